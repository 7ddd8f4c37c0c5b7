use super::*;
use rand::Rng;
use rand::seq::SliceRandom;

impl GameApp {
    /// Reinicio por pregunta: frase vacía, veredicto limpio y el pozo de
    /// fichas como permutación barajada de las palabras de la pregunta
    /// actual. Fisher-Yates sin semilla en producción.
    pub fn load_question(&mut self) {
        self.load_question_with(&mut rand::rng());
    }

    /// Variante con RNG inyectable para tests deterministas.
    pub fn load_question_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let words = match self.current_question() {
            Some(q) => q.words.clone(),
            None => return,
        };

        let session = &mut self.session;
        session.sentence.clear();
        session.feedback = Feedback::None;
        session.pool = words;
        session.pool.shuffle(rng);
    }
}
