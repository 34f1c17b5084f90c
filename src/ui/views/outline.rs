use crate::app::StudioApp;
use crate::tree::{DropSpot, NodePath};
use crate::ui::views::editor::editor_panel;
use egui::{CentralPanel, Context, Rect, ScrollArea, Stroke, StrokeKind, Ui};

pub fn ui_outline(app: &mut StudioApp, ctx: &Context) {
    egui::SidePanel::right("editor_panel")
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                editor_panel(app, ui);
            });
        });

    CentralPanel::default().show(ctx, |ui| {
        ui.heading(format!(
            "📚 {}",
            if app.course.title.trim().is_empty() {
                "(curso sin título)"
            } else {
                app.course.title.as_str()
            }
        ));
        ui.add_space(8.0);

        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                tree_ui(app, ui);
            });

        ui.add_space(12.0);
        ui.separator();
        // Guardado rápido de borradores
        ui.horizontal(|ui| {
            ui.label("Borrador:");
            ui.text_edit_singleline(&mut app.draft_name_input);
            if ui.button("💾 Guardar").clicked() {
                app.guardar_borrador();
            }
        });
    });
}

/// Posición relativa del puntero dentro de la fila: tercio superior =
/// antes, tercio inferior = después, franja central = dentro (anidar).
fn drop_spot(pointer_y: f32, rect: Rect) -> DropSpot {
    let third = rect.height() / 3.0;
    if pointer_y < rect.top() + third {
        DropSpot::Before
    } else if pointer_y > rect.bottom() - third {
        DropSpot::After
    } else {
        DropSpot::Inside
    }
}

/// El árbol del curso: cada fila es a la vez origen y destino de
/// arrastre. El gesto completo acaba en una única llamada al reductor;
/// la jerarquía nunca se toca desde aquí. Las filas salen de la caché
/// derivada con debounce, no se recalculan en cada frame.
pub fn tree_ui(app: &mut StudioApp, ui: &mut Ui) {
    let mut pending_select: Option<NodePath> = None;
    let mut pending_toggle: Option<NodePath> = None;
    let mut pending_drop: Option<(NodePath, NodePath, DropSpot)> = None;

    for row in app.outline_rows.iter().filter(|r| app.is_visible(&r.path)) {
        let depth = row.path.segments().len() - 1;
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * 18.0);

            if row.child_count > 0 {
                let symbol = if app.collapsed.contains(&row.path) {
                    "▸"
                } else {
                    "▾"
                };
                if ui.small_button(symbol).clicked() {
                    pending_toggle = Some(row.path.clone());
                }
            } else {
                ui.add_space(22.0);
            }

            let selected = app.selected.as_ref() == Some(&row.path);
            let id = egui::Id::new(("outline_row", row.path.to_string()));
            let inner =
                ui.dnd_drag_source(id, row.path.clone(), |ui| {
                    ui.selectable_label(selected, row.label())
                });

            if inner.inner.clicked() {
                pending_select = Some(row.path.clone());
            }

            let response = inner.response;
            if let Some(pointer) = ui.ctx().pointer_interact_pos() {
                if response.dnd_hover_payload::<NodePath>().is_some() {
                    let rect = response.rect;
                    let spot = drop_spot(pointer.y, rect);
                    let stroke = Stroke::new(2.0, ui.visuals().selection.stroke.color);
                    match spot {
                        DropSpot::Before => {
                            ui.painter().hline(rect.x_range(), rect.top(), stroke);
                        }
                        DropSpot::After => {
                            ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
                        }
                        DropSpot::Inside => {
                            ui.painter().rect_stroke(
                                rect,
                                egui::CornerRadius::same(2),
                                stroke,
                                StrokeKind::Inside,
                            );
                        }
                    }
                    if let Some(dragged) = response.dnd_release_payload::<NodePath>() {
                        pending_drop = Some(((*dragged).clone(), row.path.clone(), spot));
                    }
                }
            }
        });
    }

    if app.outline_rows.is_empty() {
        ui.weak("El curso todavía no tiene capítulos.");
        ui.add_space(8.0);
    }

    if ui.button("➕ Añadir capítulo").clicked() {
        app.agregar_capitulo();
    }

    // Las mutaciones van después del bucle para no pisar el borrow de las filas
    if let Some(path) = pending_toggle {
        app.toggle_collapsed(&path);
    }
    if let Some(path) = pending_select {
        app.select_node(path);
    }
    if let Some((drag, drop, spot)) = pending_drop {
        app.aplicar_movimiento(drag, drop, spot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;

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

    fn render_tree(app: &mut StudioApp) -> egui::FullOutput {
        let ctx = egui::Context::default();
        ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                tree_ui(app, ui);
            });
        })
    }

    #[test]
    fn tree_rows_come_from_the_cached_outline() {
        let mut app = StudioApp::new();
        app.course.chapters.push(Chapter {
            title: "Ondas".into(),
            ..Default::default()
        });

        // La caché aún no se ha refrescado: el árbol no conoce el capítulo
        let stale = rendered_texts(&render_tree(&mut app));
        assert!(!stale.iter().any(|t| t.contains("Ondas")));

        app.refresh_outline();
        let fresh = rendered_texts(&render_tree(&mut app));
        assert!(fresh.iter().any(|t| t.contains("Ondas")));
    }
}
