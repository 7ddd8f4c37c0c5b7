use super::*;

impl GameApp {
    pub fn level_cards(&self) -> Vec<LevelCard> {
        self.bank
            .levels
            .iter()
            .map(|l| LevelCard {
                id: l.id,
                title: l.title.clone(),
                desc: l.desc.clone(),
                questions: l.questions.len(),
            })
            .collect()
    }

    /// Instantánea de la partida para las vistas de juego y resumen.
    /// `None` fuera de una partida (sin nivel activo en el banco).
    pub fn session_view(&self) -> Option<SessionView> {
        let level = self.current_level()?;
        let question = level.questions.get(self.session.question_idx)?;

        Some(SessionView {
            level_title: level.title.clone(),
            level_id: level.id,
            question_number: self.session.question_idx + 1,
            question_total: level.questions.len(),
            kind: question.kind,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            sentence: self.session.sentence.clone(),
            pool: self.session.pool.clone(),
            feedback: self.session.feedback,
            score: self.session.score,
        })
    }
}
