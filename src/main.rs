use course_studio::StudioApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Course Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::from_creation_context(cc)))),
    )
}
