use crate::app::StudioApp;
use crate::model::WizardStep;
use crate::ui::views::editor::editor_panel;
use crate::ui::views::outline::tree_ui;
use crate::view_models::validation_issues;
use egui::{Context, ScrollArea, TextEdit};

/// Asistente de creación en tres pasos. El paso de contenido reutiliza
/// el mismo árbol con arrastre que la vista de esquema.
pub fn ui_wizard(app: &mut StudioApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("wizard_nav").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if app.wizard_step.prev().is_some() && ui.button("⬅ Anterior").clicked() {
                app.wizard_anterior();
            }
            match app.wizard_step.next() {
                Some(_) => {
                    if ui.button("Siguiente ➡").clicked() {
                        app.wizard_siguiente();
                    }
                }
                None => {
                    if ui.button("✅ Finalizar").clicked() {
                        app.wizard_finalizar();
                    }
                }
            }
            if !app.message.is_empty() {
                ui.label(&app.message);
            }
        });
        ui.add_space(4.0);
    });

    match app.wizard_step {
        WizardStep::Info => info_step(app, ctx),
        WizardStep::Curriculum => curriculum_step(app, ctx),
        WizardStep::Review => review_step(app, ctx),
    }
}

fn info_step(app: &mut StudioApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.wizard_step.title());
        ui.add_space(8.0);
        let mut changed = false;
        ui.label("Título del curso:");
        changed |= ui.text_edit_singleline(&mut app.course.title).changed();
        ui.label("Descripción:");
        changed |= ui
            .add(TextEdit::multiline(&mut app.course.description).desired_rows(4))
            .changed();
        if changed {
            app.mark_outline_dirty();
        }
    });
}

fn curriculum_step(app: &mut StudioApp, ctx: &Context) {
    egui::SidePanel::right("wizard_editor")
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                editor_panel(app, ui);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.wizard_step.title());
        ui.weak("Arrastra las filas para reordenar o anidar.");
        ui.add_space(8.0);
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                tree_ui(app, ui);
            });
    });
}

fn review_step(app: &mut StudioApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.wizard_step.title());
        ui.add_space(8.0);

        let stats = &app.outline_stats;
        ui.label(format!(
            "El curso «{}» tiene {} capítulos, {} lecciones, {} cuestionarios y {} preguntas.",
            app.course.title, stats.chapters, stats.lessons, stats.quizzes, stats.questions
        ));
        ui.add_space(8.0);

        let issues = validation_issues(&app.course);
        if issues.is_empty() {
            ui.label("✅ Todo en orden. Puedes finalizar.");
        } else {
            ui.label("⚠ Problemas detectados:");
            for issue in &issues {
                ui.weak(format!("• {issue}"));
            }
        }
    });
}
