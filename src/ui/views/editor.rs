use crate::app::{StudioApp, queries};
use crate::model::{LessonKind, QuestionKind};
use crate::tree::{Level, NodePath};
use egui::{ComboBox, TextEdit, Ui};

/// Panel de edición del nodo seleccionado. Cada nivel tiene su propio
/// formulario; la selección llega del árbol por clave posicional.
pub fn editor_panel(app: &mut StudioApp, ui: &mut Ui) {
    // Datos generales del curso, siempre visibles
    ui.heading("Curso");
    let mut changed = false;
    ui.label("Título:");
    changed |= ui.text_edit_singleline(&mut app.course.title).changed();
    ui.label("Descripción:");
    changed |= ui
        .add(TextEdit::multiline(&mut app.course.description).desired_rows(2))
        .changed();
    if changed {
        app.mark_outline_dirty();
    }

    ui.separator();

    let Some(path) = app.selected.clone() else {
        ui.weak("Selecciona un elemento del esquema para editarlo.");
        return;
    };

    match path.level() {
        Level::Chapter => chapter_editor(app, ui, &path),
        Level::Lesson => lesson_editor(app, ui, &path),
        Level::Quiz => quiz_editor(app, ui, &path),
        Level::Question => question_editor(app, ui, &path),
    }
}

fn chapter_editor(app: &mut StudioApp, ui: &mut Ui, path: &NodePath) {
    ui.heading("📚 Capítulo");
    let mut changed = false;
    if let Some(chapter) = queries::chapter_at_mut(&mut app.course, path) {
        ui.label("Título:");
        changed |= ui.text_edit_singleline(&mut chapter.title).changed();
    }
    if changed {
        app.mark_outline_dirty();
    }

    ui.add_space(8.0);
    if ui.button("➕ Añadir lección").clicked() {
        app.agregar_hijo(path);
    }
    if ui.button("🗑 Eliminar capítulo").clicked() {
        app.solicitar_borrado(path.clone());
    }
}

fn lesson_editor(app: &mut StudioApp, ui: &mut Ui, path: &NodePath) {
    ui.heading("📖 Lección");
    let mut changed = false;
    if let Some(lesson) = queries::lesson_at_mut(&mut app.course, path) {
        ui.label("Título:");
        changed |= ui.text_edit_singleline(&mut lesson.title).changed();

        ComboBox::from_label("Tipo")
            .selected_text(lesson.kind.label())
            .show_ui(ui, |ui| {
                for kind in [LessonKind::Video, LessonKind::Document, LessonKind::Slide] {
                    changed |= ui
                        .selectable_value(&mut lesson.kind, kind, kind.label())
                        .changed();
                }
            });

        // Campos de medios: la subida real la hace el backend; aquí solo
        // se referencia el fichero
        let mut url = lesson.media_url.clone().unwrap_or_default();
        ui.label("URL del medio:");
        if ui.text_edit_singleline(&mut url).changed() {
            lesson.media_url = (!url.trim().is_empty()).then_some(url);
            changed = true;
        }
        let mut name = lesson.media_name.clone().unwrap_or_default();
        ui.label("Nombre del fichero:");
        if ui.text_edit_singleline(&mut name).changed() {
            lesson.media_name = (!name.trim().is_empty()).then_some(name);
            changed = true;
        }

        if lesson.kind == LessonKind::Document {
            ui.label("Contenido (markdown):");
            changed |= ui
                .add(TextEdit::multiline(&mut lesson.body).desired_rows(10))
                .changed();
        }
    }
    if changed {
        app.mark_outline_dirty();
    }

    ui.add_space(8.0);
    if ui.button("➕ Añadir cuestionario").clicked() {
        app.agregar_hijo(path);
    }
    if ui.button("🗑 Eliminar lección").clicked() {
        app.solicitar_borrado(path.clone());
    }
}

fn quiz_editor(app: &mut StudioApp, ui: &mut Ui, path: &NodePath) {
    ui.heading("📝 Cuestionario");
    let mut changed = false;
    if let Some(quiz) = queries::quiz_at_mut(&mut app.course, path) {
        ui.label("Título:");
        changed |= ui.text_edit_singleline(&mut quiz.title).changed();
        ui.weak(format!("{} pregunta(s)", quiz.questions.len()));
    }
    if changed {
        app.mark_outline_dirty();
    }

    ui.add_space(8.0);
    if ui.button("➕ Añadir pregunta").clicked() {
        app.agregar_hijo(path);
    }
    if ui.button("🗑 Eliminar cuestionario").clicked() {
        app.solicitar_borrado(path.clone());
    }
}

fn question_editor(app: &mut StudioApp, ui: &mut Ui, path: &NodePath) {
    ui.heading("❓ Pregunta");
    let mut changed = false;
    let mut remove_option: Option<usize> = None;

    if let Some(question) = queries::question_at_mut(&mut app.course, path) {
        ui.label("Enunciado:");
        changed |= ui.text_edit_singleline(&mut question.title).changed();

        ComboBox::from_label("Tipo")
            .selected_text(question.kind.label())
            .show_ui(ui, |ui| {
                for kind in [QuestionKind::Choice, QuestionKind::Essay] {
                    changed |= ui
                        .selectable_value(&mut question.kind, kind, kind.label())
                        .changed();
                }
            });

        if question.kind == QuestionKind::Choice {
            ui.add_space(4.0);
            ui.label("Opciones de respuesta:");
            for (ix, option) in question.options.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    changed |= ui.checkbox(&mut option.is_correct, "").changed();
                    changed |= ui.text_edit_singleline(&mut option.content).changed();
                    if ui.small_button("🗑").clicked() {
                        remove_option = Some(ix);
                    }
                });
            }
        }

        let mut explanation = question.explanation.clone().unwrap_or_default();
        ui.label("Explicación (opcional):");
        if ui
            .add(TextEdit::multiline(&mut explanation).desired_rows(2))
            .changed()
        {
            question.explanation = (!explanation.trim().is_empty()).then_some(explanation);
            changed = true;
        }
    }

    if let Some(ix) = remove_option {
        app.eliminar_opcion(path, ix);
    }
    if changed {
        app.mark_outline_dirty();
    }

    ui.add_space(8.0);
    if ui.button("➕ Añadir opción").clicked() {
        app.agregar_hijo(path);
    }
    if ui.button("🗑 Eliminar pregunta").clicked() {
        app.solicitar_borrado(path.clone());
    }
}
