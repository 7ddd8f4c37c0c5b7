use super::*;

impl GameApp {
    /// Mueve la ficha `idx` del pozo al final de la frase del jugador.
    /// Con veredicto ya emitido o índice fuera de rango no hace nada.
    pub fn pick_word(&mut self, idx: usize) {
        if self.session.feedback != Feedback::None {
            return;
        }
        if idx >= self.session.pool.len() {
            return;
        }

        self.play(SoundEvent::Pop);
        let word = self.session.pool.remove(idx);
        self.session.sentence.push(word);
    }

    /// Inversa de `pick_word`: devuelve la ficha `idx` de la frase al final
    /// del pozo. El pozo no recupera el orden del barajado original.
    pub fn return_word(&mut self, idx: usize) {
        if self.session.feedback != Feedback::None {
            return;
        }
        if idx >= self.session.sentence.len() {
            return;
        }

        self.play(SoundEvent::Pop);
        let word = self.session.sentence.remove(idx);
        self.session.pool.push(word);
    }

    /// Juzga la frase: unión con espacios comparada byte a byte con la
    /// respuesta canónica. Veredicto terminal para la pregunta; una
    /// segunda llamada sin reinicio intermedio no vuelve a puntuar.
    pub fn check_answer(&mut self) {
        if self.session.feedback != Feedback::None {
            return;
        }

        let answer = match self.current_question() {
            Some(q) => q.answer.clone(),
            None => return,
        };

        if self.session.sentence.join(" ") == answer {
            self.play(SoundEvent::Correct);
            self.session.feedback = Feedback::Correct;
            self.session.score += 10;
        } else {
            self.play(SoundEvent::Wrong);
            self.session.feedback = Feedback::Wrong;
        }
    }
}
