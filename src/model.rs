use serde::{Deserialize, Serialize};

/// Pantalla activa del juego.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Finished,
}

/// Veredicto de la pregunta actual. Mientras sea `None` se pueden mover fichas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

/// Patrón gramatical de la frase: adjetivo (sifat) o verbo (perbuatan).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Adjective,
    Verb,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: usize,
    pub kind: QuestionKind,
    pub prompt: String,     // Frase en chino
    pub answer: String,     // Frase canónica en malayo
    pub words: Vec<String>, // Fichas que, en orden de autor, reproducen `answer`
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LevelData {
    pub id: usize,
    pub title: String,
    pub desc: String,
    pub questions: Vec<Question>,
}

/// Banco de preguntas: inmutable una vez cargado.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionBank {
    pub levels: Vec<LevelData>,
}

impl QuestionBank {
    pub fn level(&self, id: usize) -> Option<&LevelData> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn max_level_id(&self) -> usize {
        self.levels.iter().map(|l| l.id).max().unwrap_or(0)
    }
}

/// Estado mutable de una partida. Se reconstruye al empezar un nivel;
/// los campos de pregunta (sentence, pool, feedback) se limpian en cada pregunta.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub screen: Screen,
    pub level_id: usize,
    pub question_idx: usize,
    pub score: u32,
    pub sentence: Vec<String>, // fichas colocadas por el jugador, en orden
    pub pool: Vec<String>,     // fichas restantes, barajadas
    pub feedback: Feedback,
}
