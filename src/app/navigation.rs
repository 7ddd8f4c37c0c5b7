use super::*;
use rand::Rng;

impl GameApp {
    /// Empieza (o reintenta) un nivel: pantalla de juego, pregunta 0,
    /// marcador a cero. El menú solo ofrece ids que existen en el banco;
    /// un id inválido no hace nada.
    pub fn start_level(&mut self, level_id: usize) {
        self.start_level_with(level_id, &mut rand::rng());
    }

    pub fn start_level_with<R: Rng + ?Sized>(&mut self, level_id: usize, rng: &mut R) {
        if self.bank.level(level_id).is_none() {
            return;
        }

        self.play(SoundEvent::LevelSelect);

        self.session = Session {
            screen: Screen::Playing,
            level_id,
            question_idx: 0,
            score: 0,
            ..Session::default()
        };
        self.load_question_with(rng);
    }

    /// Avanza tras un acierto. En la última pregunta pasa al resumen
    /// (nunca a un índice fuera de rango); el marcador y el nivel se
    /// conservan para mostrarlos.
    pub fn next_question(&mut self) {
        self.next_question_with(&mut rand::rng());
    }

    pub fn next_question_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.session.feedback != Feedback::Correct {
            return;
        }

        let total = match self.current_level() {
            Some(level) => level.questions.len(),
            None => return,
        };

        if self.session.question_idx + 1 < total {
            self.play(SoundEvent::Click);
            self.session.question_idx += 1;
            self.load_question_with(rng);
        } else {
            self.play(SoundEvent::Win);
            self.session.screen = Screen::Finished;
        }
    }

    /// Reintenta la pregunta actual tras un fallo: mismo índice,
    /// fichas barajadas de nuevo.
    pub fn retry_question(&mut self) {
        self.retry_question_with(&mut rand::rng());
    }

    pub fn retry_question_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.play(SoundEvent::Click);
        self.load_question_with(rng);
    }

    /// Vuelta incondicional al menú principal. La partida en curso se
    /// descarta; el siguiente `start_level` crea una sesión nueva.
    pub fn go_home(&mut self) {
        self.play(SoundEvent::Click);
        self.session.screen = Screen::Menu;
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        self.play(SoundEvent::Click);
    }
}
