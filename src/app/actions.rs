use super::*;
use crate::model::{AnswerOption, Chapter, Lesson, Question, Quiz};
use crate::tree::{DropSpot, Level, apply_move};

impl StudioApp {
    /// Entrada única de los gestos de arrastre completados. Si el
    /// reductor rechaza el movimiento, la jerarquía anterior se conserva
    /// tal cual (no-op silencioso, como espera la UI).
    pub fn aplicar_movimiento(&mut self, drag: NodePath, drop: NodePath, spot: DropSpot) {
        match apply_move(&self.course, &drag, &drop, spot) {
            Some(next) => {
                log::info!("movimiento aplicado: {drag} → {drop} ({spot:?})");
                self.replace_course(next);
            }
            None => {
                log::debug!("movimiento rechazado: {drag} → {drop} ({spot:?})");
            }
        }
    }

    pub fn agregar_capitulo(&mut self) {
        let id = self.temp_id();
        self.course.chapters.push(Chapter {
            id: Some(id),
            title: format!("Capítulo {}", self.course.chapters.len() + 1),
            ..Default::default()
        });
        let new_ix = self.course.chapters.len() - 1;
        self.selected = NodePath::new(vec![new_ix]);
        self.mark_outline_dirty();
    }

    /// Crea un hijo nuevo bajo `parent` según su nivel: lección bajo
    /// capítulo, cuestionario bajo lección, pregunta bajo cuestionario y
    /// opción de respuesta bajo pregunta.
    pub fn agregar_hijo(&mut self, parent: &NodePath) {
        let id = self.temp_id();
        let new_child = match parent.level() {
            Level::Chapter => {
                let Some(chapter) = queries::chapter_at_mut(&mut self.course, parent) else {
                    return;
                };
                chapter.lessons.push(Lesson {
                    id: Some(id),
                    title: format!("Lección {}", chapter.lessons.len() + 1),
                    ..Default::default()
                });
                parent.child(chapter.lessons.len() - 1)
            }
            Level::Lesson => {
                let Some(lesson) = queries::lesson_at_mut(&mut self.course, parent) else {
                    return;
                };
                lesson.quizzes.push(Quiz {
                    id: Some(id),
                    title: format!("Cuestionario {}", lesson.quizzes.len() + 1),
                    ..Default::default()
                });
                parent.child(lesson.quizzes.len() - 1)
            }
            Level::Quiz => {
                let Some(quiz) = queries::quiz_at_mut(&mut self.course, parent) else {
                    return;
                };
                quiz.questions.push(Question {
                    id: Some(id),
                    title: format!("Pregunta {}", quiz.questions.len() + 1),
                    ..Default::default()
                });
                parent.child(quiz.questions.len() - 1)
            }
            Level::Question => {
                let Some(question) = queries::question_at_mut(&mut self.course, parent) else {
                    return;
                };
                question.options.push(AnswerOption {
                    id: Some(id),
                    ..Default::default()
                });
                None // las opciones no son nodos del árbol
            }
        };
        if let Some(path) = new_child {
            self.selected = Some(path);
        }
        self.mark_outline_dirty();
    }

    /// Pide el borrado de un nodo. Si arrastra un subárbol no vacío se
    /// abre un diálogo de confirmación; si no, se borra directamente.
    pub fn solicitar_borrado(&mut self, path: NodePath) {
        match queries::child_count(&self.course, &path) {
            Some(n) if n > 0 => self.confirm_delete = Some(path),
            Some(_) => self.eliminar_nodo(&path),
            None => {}
        }
    }

    pub fn confirmar_borrado(&mut self) {
        if let Some(path) = self.confirm_delete.take() {
            self.eliminar_nodo(&path);
        }
    }

    pub fn cancelar_borrado(&mut self) {
        self.confirm_delete = None;
    }

    /// Borrado en cascada: el nodo se va con todo su subárbol.
    pub fn eliminar_nodo(&mut self, path: &NodePath) {
        let mut next = self.course.clone();
        if remove_at(&mut next, path).is_none() {
            return;
        }
        self.replace_course(next);
        self.message = "🗑 Elemento eliminado.".to_owned();
    }

    pub fn eliminar_opcion(&mut self, question: &NodePath, option_ix: usize) {
        let Some(q) = queries::question_at_mut(&mut self.course, question) else {
            return;
        };
        if option_ix < q.options.len() {
            q.options.remove(option_ix);
            self.mark_outline_dirty();
        }
    }

    pub fn toggle_collapsed(&mut self, path: &NodePath) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.clone());
        }
    }

    pub fn is_visible(&self, path: &NodePath) -> bool {
        !self
            .collapsed
            .iter()
            .any(|c| c.contains(path) && c != path)
    }
}

fn remove_at(course: &mut Course, path: &NodePath) -> Option<()> {
    match path.segments() {
        [c] => {
            if *c >= course.chapters.len() {
                return None;
            }
            course.chapters.remove(*c);
        }
        [c, l] => {
            let lessons = &mut course.chapters.get_mut(*c)?.lessons;
            if *l >= lessons.len() {
                return None;
            }
            lessons.remove(*l);
        }
        [c, l, q] => {
            let quizzes = &mut course.chapters.get_mut(*c)?.lessons.get_mut(*l)?.quizzes;
            if *q >= quizzes.len() {
                return None;
            }
            quizzes.remove(*q);
        }
        [c, l, q, n] => {
            let questions = &mut course
                .chapters
                .get_mut(*c)?
                .lessons
                .get_mut(*l)?
                .quizzes
                .get_mut(*q)?
                .questions;
            if *n >= questions.len() {
                return None;
            }
            questions.remove(*n);
        }
        _ => return None,
    }
    Some(())
}
