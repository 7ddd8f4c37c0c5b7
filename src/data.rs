// src/data.rs

use crate::model::QuestionBank;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_question_bank() -> QuestionBank {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}
