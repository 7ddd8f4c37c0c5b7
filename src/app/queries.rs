use super::*;
use crate::model::{LevelData, Question};

impl GameApp {
    // Accesores de solo lectura

    pub fn current_level(&self) -> Option<&LevelData> {
        self.bank.level(self.session.level_id)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_level()?
            .questions
            .get(self.session.question_idx)
    }

    /// ¿Se ofrece el salto al siguiente nivel en el resumen?
    /// Solo con 60 puntos o más y si existe un nivel posterior.
    pub fn can_advance_level(&self) -> bool {
        self.session.screen == Screen::Finished
            && self.session.score >= 60
            && self.session.level_id < self.bank.max_level_id()
    }

    pub fn is_perfect(&self) -> bool {
        let total = self
            .current_level()
            .map(|l| l.questions.len() as u32 * 10)
            .unwrap_or(0);
        total > 0 && self.session.score == total
    }
}
