pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::StudioApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for StudioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Barra de navegación salvo en la bienvenida
        if self.state != AppState::Welcome {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Debounce del esquema derivado: mientras quede trabajo pendiente
        // pedimos repaint para que la ventana de inactividad venza sola.
        let now = ctx.input(|i| i.time);
        if self.tick_outline(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Wizard => views::wizard::ui_wizard(self, ctx),
            AppState::Outline => views::outline::ui_outline(self, ctx),
            AppState::Preview => views::preview::ui_preview(self, ctx),
            AppState::Publish => views::publish::ui_publish(self, ctx),
        }

        if self.confirm_delete.is_some() {
            helpers::confirm_delete_dialog(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
