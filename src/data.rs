// src/data.rs

use crate::model::Course;
use serde_yaml;

/// Carga la plantilla de curso embebida. Es el punto de partida de
/// "nuevo desde plantilla" en el asistente.
pub fn starter_course() -> Course {
    let file_content = include_str!("data/starter_course.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la plantilla de curso YAML")
}
