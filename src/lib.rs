pub mod api;
pub mod app;
pub mod data;
pub mod model;
pub mod tree;
pub mod ui;
pub mod view_models;

pub use app::StudioApp;

/// Arranque en navegador: el HTML llama aquí con su canvas.
#[cfg(target_arch = "wasm32")]
pub fn start_web(canvas: web_sys::HtmlCanvasElement) {
    let runner = eframe::WebRunner::new();
    wasm_bindgen_futures::spawn_local(async move {
        let result = runner
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(StudioApp::from_creation_context(cc)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("no se pudo arrancar la app web: {e:?}");
        }
    });
}
