use super::*;
use crate::data::starter_course;
use crate::view_models::validation_issues;

impl StudioApp {
    pub fn volver_al_inicio(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    /// Arranca el asistente con un curso vacío.
    pub fn nuevo_curso(&mut self) {
        self.replace_course(Course::default());
        self.selected = None;
        self.collapsed.clear();
        self.wizard_step = WizardStep::Info;
        self.state = AppState::Wizard;
        self.message.clear();
    }

    /// Arranca el asistente precargado con la plantilla embebida.
    pub fn nuevo_desde_plantilla(&mut self) {
        self.replace_course(starter_course());
        self.selected = None;
        self.collapsed.clear();
        self.wizard_step = WizardStep::Info;
        self.state = AppState::Wizard;
        self.message.clear();
    }

    pub fn abrir_esquema(&mut self) {
        // El árbol pinta desde la caché derivada: asegúrala fresca al entrar
        self.refresh_outline();
        self.state = AppState::Outline;
        self.message.clear();
    }

    pub fn abrir_vista_previa(&mut self) {
        // La vista previa pinta desde la caché derivada: asegúrala fresca
        self.refresh_outline();
        self.state = AppState::Preview;
        self.message.clear();
    }

    pub fn abrir_publicacion(&mut self) {
        self.refresh_outline();
        self.state = AppState::Publish;
        self.message.clear();
    }

    /// Avanza el asistente si el paso actual valida; si no, se queda y
    /// explica el motivo.
    pub fn wizard_siguiente(&mut self) {
        match self.wizard_step {
            WizardStep::Info => {
                if self.course.title.trim().is_empty() {
                    self.message = "⚠ Ponle un título al curso antes de continuar.".to_owned();
                    return;
                }
            }
            WizardStep::Curriculum => {
                if self.course.chapters.is_empty() {
                    self.message = "⚠ Añade al menos un capítulo antes de continuar.".to_owned();
                    return;
                }
                self.refresh_outline();
            }
            WizardStep::Review => {}
        }
        if let Some(next) = self.wizard_step.next() {
            self.wizard_step = next;
            self.message.clear();
        }
    }

    /// Volver atrás siempre está permitido.
    pub fn wizard_anterior(&mut self) {
        if let Some(prev) = self.wizard_step.prev() {
            self.wizard_step = prev;
            self.message.clear();
        }
    }

    /// Cierra el asistente. Solo llega al esquema un curso sin problemas
    /// estructurales; si los hay, el paso de revisión los lista.
    pub fn wizard_finalizar(&mut self) {
        let issues = validation_issues(&self.course);
        if issues.is_empty() {
            self.state = AppState::Outline;
            self.message = "✅ Curso creado. Sigue editándolo desde el esquema.".to_owned();
        } else {
            self.message = format!(
                "⚠ Quedan {} problemas por resolver antes de finalizar.",
                issues.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;

    #[test]
    fn wizard_blocks_info_step_without_title() {
        let mut app = StudioApp::new();
        app.nuevo_curso();
        app.wizard_siguiente();
        assert_eq!(app.wizard_step, WizardStep::Info);
        assert!(!app.message.is_empty());

        app.course.title = "Rust".into();
        app.wizard_siguiente();
        assert_eq!(app.wizard_step, WizardStep::Curriculum);
        assert!(app.message.is_empty());
    }

    #[test]
    fn wizard_blocks_curriculum_without_chapters() {
        let mut app = StudioApp::new();
        app.nuevo_curso();
        app.course.title = "Rust".into();
        app.wizard_siguiente();
        app.wizard_siguiente();
        assert_eq!(app.wizard_step, WizardStep::Curriculum);

        app.course.chapters.push(Chapter {
            title: "Cap".into(),
            ..Default::default()
        });
        app.wizard_siguiente();
        assert_eq!(app.wizard_step, WizardStep::Review);
    }

    #[test]
    fn wizard_back_is_always_allowed() {
        let mut app = StudioApp::new();
        app.nuevo_curso();
        app.course.title = "Rust".into();
        app.wizard_siguiente();
        app.wizard_anterior();
        assert_eq!(app.wizard_step, WizardStep::Info);
        app.wizard_anterior();
        assert_eq!(app.wizard_step, WizardStep::Info);
    }

    #[test]
    fn template_course_passes_review() {
        let mut app = StudioApp::new();
        app.nuevo_desde_plantilla();
        app.wizard_finalizar();
        assert_eq!(app.state, AppState::Outline);
    }
}
