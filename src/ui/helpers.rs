// src/ui/helpers.rs
use crate::app::{StudioApp, queries};
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Diálogo de confirmación para borrados que arrastran un subárbol.
pub fn confirm_delete_dialog(app: &mut StudioApp, ctx: &egui::Context) {
    let Some(path) = app.confirm_delete.clone() else {
        return;
    };
    let title = queries::node_title(&app.course, &path).unwrap_or_default();
    let children = queries::child_count(&app.course, &path).unwrap_or(0);

    egui::Window::new("Confirmar borrado")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "«{}» contiene {} elemento(s). Se borrará con todo su contenido. \
                 ¡Esta acción no se puede deshacer!",
                title, children
            ));
            ui.horizontal(|ui| {
                if ui.button("Sí, borrar").clicked() {
                    app.confirmar_borrado();
                }
                if ui.button("No").clicked() {
                    app.cancelar_borrado();
                }
            });
        });
}
