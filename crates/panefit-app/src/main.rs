// panefit demo host.
// Run with RUST_LOG=info (or debug) to watch every frame the coordinator applies.
// Pass --write-settings to save the active settings to the config dir.

mod session;
mod settings;

use panefit_platform::shared;

fn main() {
    env_logger::init();

    let settings = settings::load_settings();
    if std::env::args().any(|arg| arg == "--write-settings") {
        settings::save_settings(&settings);
    }
    let coordinator = shared::install(settings.sizing.coordinator());

    let mut prefs = session::preferences_window();
    match session::run(&coordinator, &mut prefs) {
        Some(frame) => println!(
            "preferences window: {}x{} at ({}, {})",
            frame.width, frame.height, frame.x, frame.y
        ),
        None => println!("preferences window closed"),
    }

    drop(coordinator);
    shared::teardown();
}
