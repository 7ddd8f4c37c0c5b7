// src/view_models.rs

use crate::model::{Feedback, QuestionKind};

/// Tarjeta de nivel para el menú principal.
#[derive(Clone, Debug)]
pub struct LevelCard {
    pub id: usize,
    pub title: String,  // "Tahap 1"
    pub desc: String,   // "Kata Adjektif (Sifat)"
    pub questions: usize,
}

/// Instantánea de solo lectura de la partida en curso, para renderizar.
/// Toda mutación pasa por las operaciones de `GameApp`.
#[derive(Clone, Debug)]
pub struct SessionView {
    pub level_title: String,
    pub level_id: usize,
    pub question_number: usize, // 1-based, para mostrar "3 / 10"
    pub question_total: usize,
    pub kind: QuestionKind,
    pub prompt: String,
    pub answer: String,
    pub sentence: Vec<String>,
    pub pool: Vec<String>,
    pub feedback: Feedback,
    pub score: u32,
}

impl SessionView {
    /// Fracción de progreso para la barra, acotada a 1.0.
    pub fn progress_fraction(&self) -> f32 {
        if self.question_total == 0 {
            return 0.0;
        }
        (self.question_number as f32 / self.question_total as f32).min(1.0)
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            QuestionKind::Adjective => "⭐ Kata Adjektif",
            QuestionKind::Verb => "⚡ Kata Kerja",
        }
    }
}
