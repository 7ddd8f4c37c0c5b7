//! Señales sonoras del juego. El núcleo solo conoce `FeedbackSink::emit`;
//! la síntesis concreta (WebAudio en wasm) vive detrás del trait.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioSink;

/// Eventos simbólicos que el juego dispara en cada transición.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEvent {
    Click,
    Pop,
    Correct,
    Wrong,
    Win,
    LevelSelect,
}

/// Sumidero fire-and-forget: nunca devuelve error al juego.
/// Los fallos de reproducción se tragan y se registran con `log`.
pub trait FeedbackSink {
    fn emit(&self, event: SoundEvent);
}

/// Sumidero nativo: el juego es jugable sin audio, solo deja traza.
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn emit(&self, event: SoundEvent) {
        log::debug!("sound event: {event:?}");
    }
}

/// Sumidero por defecto de la plataforma.
pub fn platform_sink() -> Box<dyn FeedbackSink> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WebAudioSink)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(LogSink)
    }
}
