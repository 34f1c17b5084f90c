// src/api.rs
//
// Mapeo del modelo al payload JSON del backend de cursos y envío HTTP.
// El backend es un colaborador externo: aquí solo se serializa en su
// formato (camelCase) y se hace un POST con un reintento básico.

use crate::model::{Course, LessonKind, QuestionKind};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub chapters: Vec<ChapterPayload>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPayload {
    pub id: Option<String>,
    pub title: String,
    pub lessons: Vec<LessonPayload>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LessonPayload {
    pub id: Option<String>,
    pub title: String,
    pub kind: &'static str,
    pub media_url: Option<String>,
    pub media_name: Option<String>,
    pub body: String,
    pub quizzes: Vec<QuizPayload>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    pub id: Option<String>,
    pub title: String,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub id: Option<String>,
    pub title: String,
    pub kind: &'static str,
    pub options: Vec<AnswerOptionPayload>,
    pub explanation: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOptionPayload {
    pub id: Option<String>,
    pub content: String,
    pub is_correct: bool,
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api/courses";

#[cfg(not(target_arch = "wasm32"))]
pub fn default_backend_url() -> String {
    std::env::var("COURSE_STUDIO_BACKEND").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned())
}

/// En la web el backend se descubre del entorno de la página, en este
/// orden: querystring, etiqueta meta, localStorage.
#[cfg(target_arch = "wasm32")]
pub fn default_backend_url() -> String {
    backend_from_querystring()
        .or_else(backend_from_meta)
        .or_else(backend_from_local_storage)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
}

#[cfg(target_arch = "wasm32")]
fn normalize_backend(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(target_arch = "wasm32")]
fn backend_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == "backend" {
            return normalize_backend(value);
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn backend_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='course-studio-backend']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_backend)
}

#[cfg(target_arch = "wasm32")]
fn backend_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("course_studio_backend")
        .ok()?
        .as_deref()
        .and_then(normalize_backend)
}

/// Los ids temporales (`tmp-N`) solo existen en el cliente: al servidor
/// van como `null` para que asigne identificadores de verdad.
fn payload_id(id: &Option<String>) -> Option<String> {
    id.as_ref()
        .filter(|id| !id.starts_with("tmp-"))
        .cloned()
}

fn lesson_kind(kind: LessonKind) -> &'static str {
    match kind {
        LessonKind::Video => "video",
        LessonKind::Document => "document",
        LessonKind::Slide => "slide",
    }
}

fn question_kind(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Choice => "choice",
        QuestionKind::Essay => "essay",
    }
}

impl From<&Course> for CoursePayload {
    fn from(course: &Course) -> Self {
        CoursePayload {
            id: payload_id(&course.id),
            title: course.title.clone(),
            description: course.description.clone(),
            chapters: course
                .chapters
                .iter()
                .map(|chapter| ChapterPayload {
                    id: payload_id(&chapter.id),
                    title: chapter.title.clone(),
                    lessons: chapter
                        .lessons
                        .iter()
                        .map(|lesson| LessonPayload {
                            id: payload_id(&lesson.id),
                            title: lesson.title.clone(),
                            kind: lesson_kind(lesson.kind),
                            media_url: lesson.media_url.clone(),
                            media_name: lesson.media_name.clone(),
                            body: lesson.body.clone(),
                            quizzes: lesson
                                .quizzes
                                .iter()
                                .map(|quiz| QuizPayload {
                                    id: payload_id(&quiz.id),
                                    title: quiz.title.clone(),
                                    questions: quiz
                                        .questions
                                        .iter()
                                        .map(|q| QuestionPayload {
                                            id: payload_id(&q.id),
                                            title: q.title.clone(),
                                            kind: question_kind(q.kind),
                                            options: q
                                                .options
                                                .iter()
                                                .map(|o| AnswerOptionPayload {
                                                    id: payload_id(&o.id),
                                                    content: o.content.clone(),
                                                    is_correct: o.is_correct,
                                                })
                                                .collect(),
                                            explanation: q.explanation.clone(),
                                        })
                                        .collect(),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JSON legible del payload, para la previsualización del panel de
/// publicación.
pub fn payload_json(course: &Course) -> String {
    serde_json::to_string_pretty(&CoursePayload::from(course))
        .unwrap_or_else(|e| format!("error serializando: {e}"))
}

/// POST del curso al backend, con un reintento. La resiliencia de red
/// más allá de esto queda fuera del alcance de la aplicación.
#[cfg(not(target_arch = "wasm32"))]
pub fn submit_course(url: &str, token: &str, course: &Course) -> Result<(), String> {
    let client = reqwest::blocking::Client::new();
    let payload = CoursePayload::from(course);

    let mut last_err = String::new();
    for attempt in 1..=2 {
        let mut request = client.post(url).json(&payload);
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }
        match request.send() {
            Ok(resp) if resp.status().is_success() => {
                log::info!("curso enviado a {url}");
                return Ok(());
            }
            Ok(resp) => last_err = format!("HTTP {}", resp.status()),
            Err(e) => last_err = e.to_string(),
        }
        log::warn!("envío fallido (intento {attempt}): {last_err}");
    }
    Err(last_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Chapter, Lesson, Question, Quiz};

    fn sample() -> Course {
        Course {
            id: Some("crs-9".into()),
            title: "Rust".into(),
            chapters: vec![Chapter {
                id: Some("tmp-3".into()),
                title: "Cap".into(),
                lessons: vec![Lesson {
                    title: "Lec".into(),
                    kind: LessonKind::Document,
                    quizzes: vec![Quiz {
                        title: "Q".into(),
                        questions: vec![Question {
                            title: "P".into(),
                            options: vec![AnswerOption {
                                content: "sí".into(),
                                is_correct: true,
                                ..Default::default()
                            }],
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn temp_ids_are_stripped_but_server_ids_survive() {
        let payload = CoursePayload::from(&sample());
        assert_eq!(payload.id.as_deref(), Some("crs-9"));
        assert_eq!(payload.chapters[0].id, None);
    }

    #[test]
    fn payload_serializes_in_camel_case() {
        let value = serde_json::to_value(CoursePayload::from(&sample())).unwrap();
        let option =
            &value["chapters"][0]["lessons"][0]["quizzes"][0]["questions"][0]["options"][0];
        assert_eq!(option["isCorrect"], true);
        assert_eq!(
            value["chapters"][0]["lessons"][0]["mediaUrl"],
            serde_json::Value::Null
        );
    }

    #[test]
    fn kinds_travel_as_lowercase_strings() {
        let value = serde_json::to_value(CoursePayload::from(&sample())).unwrap();
        assert_eq!(value["chapters"][0]["lessons"][0]["kind"], "document");
        assert_eq!(
            value["chapters"][0]["lessons"][0]["quizzes"][0]["questions"][0]["kind"],
            "choice"
        );
    }
}
