use crate::api;
use crate::app::StudioApp;
use crate::view_models::validation_issues;
use egui::{Context, ScrollArea, TextEdit};

/// Panel de publicación: destino, validación y previsualización del
/// payload exacto que viaja al backend.
pub fn ui_publish(app: &mut StudioApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("📤 Publicar curso");
        ui.add_space(8.0);

        ui.label("URL del backend:");
        ui.text_edit_singleline(&mut app.backend_url);
        ui.label("Token de acceso (opcional):");
        ui.add(TextEdit::singleline(&mut app.api_token).password(true));
        ui.add_space(8.0);

        let issues = validation_issues(&app.course);
        if issues.is_empty() {
            ui.label("✅ El curso está listo para publicarse.");
        } else {
            ui.label("⚠ Problemas pendientes:");
            for issue in &issues {
                ui.weak(format!("• {issue}"));
            }
        }
        ui.add_space(8.0);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let can_submit = issues.is_empty();
            if ui
                .add_enabled(can_submit, egui::Button::new("📤 Publicar"))
                .clicked()
            {
                match api::submit_course(&app.backend_url, &app.api_token, &app.course) {
                    Ok(()) => app.message = "✅ Curso publicado correctamente.".to_owned(),
                    Err(e) => app.message = format!("❌ Error al publicar: {e}"),
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            ui.weak("El envío directo no está disponible en la versión web; copia el JSON.");
        }

        if !app.message.is_empty() {
            ui.label(&app.message);
        }

        ui.separator();
        ui.label("Payload que se enviará:");
        let json = api::payload_json(&app.course);
        ScrollArea::vertical().show(ui, |ui| {
            ui.monospace(json);
        });
    });
}
