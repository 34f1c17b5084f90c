use crate::model::{AppState, Course, WizardStep};
use crate::tree::NodePath;
use crate::view_models::{CourseStats, OutlineRow, course_stats, flatten_course};
use egui_commonmark::CommonMarkCache;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod drafts;
pub mod navigation;
pub mod queries;

/// Instantánea con nombre de un curso a medio editar. Vive dentro del
/// estado persistido de la aplicación (almacenamiento local de eframe).
#[derive(Serialize, Deserialize, Clone)]
pub struct CourseDraft {
    pub name: String,
    pub course: Course,
}

/// Segundos de inactividad antes de recalcular el esquema derivado.
/// Evita recomputar en cada pulsación durante ediciones rápidas; no es
/// una cuestión de corrección, solo de fluidez.
pub const OUTLINE_DEBOUNCE_SECS: f64 = 0.3;

#[derive(Serialize, Deserialize)]
pub struct StudioApp {
    pub course: Course,
    pub drafts: Vec<CourseDraft>,
    pub wizard_step: WizardStep,
    pub selected: Option<NodePath>,
    pub collapsed: HashSet<NodePath>,
    pub backend_url: String,
    pub api_token: String,
    pub next_temp_id: u64,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub confirm_delete: Option<NodePath>,
    #[serde(skip)]
    pub draft_name_input: String,
    #[serde(skip)]
    pub show_answers_in_preview: bool,
    #[serde(skip)]
    pub cm_cache: CommonMarkCache,
    // Caché con debounce del esquema derivado (árbol, resumen y vista previa)
    #[serde(skip)]
    pub outline_dirty: bool,
    #[serde(skip)]
    pub outline_dirty_since: Option<f64>,
    #[serde(skip)]
    pub outline_rows: Vec<OutlineRow>,
    #[serde(skip)]
    pub outline_stats: CourseStats,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioApp {
    pub fn new() -> Self {
        Self {
            course: Course::default(),
            drafts: Vec::new(),
            wizard_step: WizardStep::Info,
            selected: None,
            collapsed: HashSet::new(),
            backend_url: crate::api::default_backend_url(),
            api_token: String::new(),
            next_temp_id: 0,
            state: AppState::Welcome,
            message: String::new(),
            confirm_delete: None,
            draft_name_input: String::new(),
            show_answers_in_preview: false,
            cm_cache: CommonMarkCache::default(),
            outline_dirty: false,
            outline_dirty_since: None,
            outline_rows: Vec::new(),
            outline_stats: CourseStats::default(),
        }
    }

    /// Restaura el estado persistido (si lo hay) o arranca limpio.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: StudioApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(StudioApp::new);
        app.refresh_outline();
        app
    }

    /// Genera un identificador temporal para nodos creados en la UI.
    /// En el envío al servidor estos ids se sustituyen por `null`.
    pub fn temp_id(&mut self) -> String {
        self.next_temp_id += 1;
        format!("tmp-{}", self.next_temp_id)
    }

    /// Reemplaza la jerarquía entera de golpe. Es el único punto por el
    /// que entran cursos nuevos: el valor anterior queda intacto para
    /// quien aún lo tenga.
    pub fn replace_course(&mut self, next: Course) {
        self.course = next;
        if let Some(sel) = &self.selected {
            if queries::node_title(&self.course, sel).is_none() {
                self.selected = None;
            }
        }
        self.mark_outline_dirty();
    }

    pub fn mark_outline_dirty(&mut self) {
        self.outline_dirty = true;
        self.outline_dirty_since = None;
    }

    pub fn refresh_outline(&mut self) {
        self.outline_rows = flatten_course(&self.course);
        self.outline_stats = course_stats(&self.course);
        self.outline_dirty = false;
        self.outline_dirty_since = None;
    }

    /// Tick del debounce; `now` viene del reloj de egui.
    /// Devuelve `true` si aún queda trabajo pendiente (para pedir repaint).
    pub fn tick_outline(&mut self, now: f64) -> bool {
        if !self.outline_dirty {
            return false;
        }
        match self.outline_dirty_since {
            None => {
                self.outline_dirty_since = Some(now);
                true
            }
            Some(since) if now - since >= OUTLINE_DEBOUNCE_SECS => {
                self.refresh_outline();
                false
            }
            Some(_) => true,
        }
    }

    pub fn select_node(&mut self, path: NodePath) {
        self.selected = Some(path);
        self.message.clear();
    }
}
