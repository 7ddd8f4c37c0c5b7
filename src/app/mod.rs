use crate::data::read_question_bank;
use crate::model::{Feedback, QuestionBank, Screen, Session};
use crate::sound::{FeedbackSink, SoundEvent, platform_sink};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

#[cfg(test)]
mod tests;

// Re-export de view models
pub use crate::view_models::{LevelCard, SessionView};

/// Estado raíz del juego: banco inmutable, partida mutable y el sumidero
/// de sonido. Las vistas solo leen; mutan a través de las operaciones
/// de `actions`/`navigation`/`resets`.
pub struct GameApp {
    pub bank: QuestionBank,
    pub session: Session,
    pub sound_enabled: bool,
    sink: Box<dyn FeedbackSink>,
}

impl GameApp {
    pub fn new() -> Self {
        Self::with_sink(read_question_bank(), platform_sink())
    }

    /// Constructor con sumidero inyectable (tests usan uno que graba eventos).
    pub fn with_sink(bank: QuestionBank, sink: Box<dyn FeedbackSink>) -> Self {
        Self {
            bank,
            session: Session::default(),
            sound_enabled: true,
            sink,
        }
    }

    /// Dispara un evento sonoro si el sonido está activo.
    /// Fire-and-forget: el sumidero nunca interrumpe una transición.
    pub(crate) fn play(&self, event: SoundEvent) {
        if self.sound_enabled {
            self.sink.emit(event);
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
