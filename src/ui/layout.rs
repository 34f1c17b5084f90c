use crate::app::StudioApp;
use crate::model::AppState;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut StudioApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Inicio").clicked() {
                app.volver_al_inicio();
            }
            if ui.button("📚 Esquema").clicked() {
                app.abrir_esquema();
            }
            if ui.button("👁 Vista previa").clicked() {
                app.abrir_vista_previa();
            }
            if ui.button("📤 Publicar").clicked() {
                app.abrir_publicacion();
            }

            if !app.message.is_empty() {
                ui.separator();
                ui.label(RichText::new(&app.message).strong());
            }

            // Marca el estado activo a la derecha
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let state = match app.state {
                    AppState::Welcome => "Inicio",
                    AppState::Wizard => "Asistente",
                    AppState::Outline => "Esquema",
                    AppState::Preview => "Vista previa",
                    AppState::Publish => "Publicación",
                };
                ui.weak(state);
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                // Ejecuta contenido
                inner(ui);
            });
        ui.add_space(extra);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_panel_runs_its_content_within_the_width_cap() {
        let ctx = Context::default();
        let mut seen_width = f32::MAX;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            centered_panel(ctx, 100.0, 300.0, |ui| {
                seen_width = ui.available_width();
                ui.label("contenido");
            });
        });
        assert!(seen_width <= 300.0);
    }
}
