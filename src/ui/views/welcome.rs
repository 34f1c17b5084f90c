use crate::app::StudioApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_welcome(app: &mut StudioApp, ctx: &Context) {
    let est_height = 280.0 + 30.0 * app.drafts.len() as f32;
    centered_panel(ctx, est_height, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 Course Studio");
            ui.label("Editor de contenido de cursos");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            let hay_curso =
                !app.course.title.trim().is_empty() || !app.course.chapters.is_empty();

            if hay_curso
                && big_list_button(
                    ui,
                    "▶ Continuar con el curso actual".into(),
                    btn_w,
                    btn_h,
                    true,
                )
            {
                app.abrir_esquema();
            }
            ui.add_space(5.0);
            if big_list_button(ui, "➕ Nuevo curso".into(), btn_w, btn_h, true) {
                app.nuevo_curso();
            }
            ui.add_space(5.0);
            if big_list_button(ui, "📋 Nuevo desde plantilla".into(), btn_w, btn_h, true) {
                app.nuevo_desde_plantilla();
            }

            // Borradores guardados
            if !app.drafts.is_empty() {
                ui.add_space(16.0);
                ui.label(RichText::new("Borradores guardados").strong());
                ui.add_space(4.0);

                let mut load_ix = None;
                let mut delete_ix = None;
                for (ix, draft) in app.drafts.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("💾 {}", draft.name));
                        if ui.small_button("Cargar").clicked() {
                            load_ix = Some(ix);
                        }
                        if ui.small_button("🗑").clicked() {
                            delete_ix = Some(ix);
                        }
                    });
                }
                if let Some(ix) = load_ix {
                    app.cargar_borrador(ix);
                }
                if let Some(ix) = delete_ix {
                    app.eliminar_borrador(ix);
                }
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CourseDraft;
    use crate::model::Course;

    fn rendered_texts(output: &egui::FullOutput) -> Vec<String> {
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::epaint::Shape::Text(t) => Some(t.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn welcome_renders_its_actions_and_saved_drafts() {
        let mut app = StudioApp::new();
        app.drafts.push(CourseDraft {
            name: "v1".into(),
            course: Course::default(),
        });

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            ui_welcome(&mut app, ctx);
        });

        let texts = rendered_texts(&output);
        assert!(texts.iter().any(|t| t.contains("Nuevo curso")));
        assert!(texts.iter().any(|t| t.contains("plantilla")));
        assert!(texts.iter().any(|t| t.contains("v1")));
    }
}
