use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LessonKind {
    Video,
    Document,
    Slide,
}

impl Default for LessonKind {
    fn default() -> Self {
        LessonKind::Video
    }
}

impl LessonKind {
    pub fn label(&self) -> &'static str {
        match self {
            LessonKind::Video => "🎬 Vídeo",
            LessonKind::Document => "📄 Documento",
            LessonKind::Slide => "🖼 Diapositivas",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Choice,
    Essay,
}

impl Default for QuestionKind {
    fn default() -> Self {
        QuestionKind::Choice
    }
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Choice => "☑ Opciones",
            QuestionKind::Essay => "✏ Desarrollo",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AnswerOption {
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Question {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<AnswerOption>, // solo para Choice
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Quiz {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Lesson {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub kind: LessonKind,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_name: Option<String>,
    #[serde(default)]
    pub body: String, // markdown, solo para Document
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Chapter {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Un curso completo: la jerarquía entera vive como un único valor
/// propiedad del estado del formulario. Cada movimiento la reemplaza
/// completa, nunca se muta en sitio.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Course {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Wizard,
    Outline,
    Preview,
    Publish,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Info,
    Curriculum,
    Review,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Info
    }
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Info => "1. Datos del curso",
            WizardStep::Curriculum => "2. Contenido",
            WizardStep::Review => "3. Revisión",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Info => Some(WizardStep::Curriculum),
            WizardStep::Curriculum => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Info => None,
            WizardStep::Curriculum => Some(WizardStep::Info),
            WizardStep::Review => Some(WizardStep::Curriculum),
        }
    }
}
