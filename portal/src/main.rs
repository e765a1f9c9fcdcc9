use std::process::ExitCode;
use std::sync::Arc;

use portal::config::Config;
use portal::core::ApiService;
use portal::services::api::ApiClient;
use portal::services::session_store::{FileSessionStore, MemorySessionStore, SessionStore};
use portal::ui::PortalUi;
use portal::utils::runtime::runtime;
use portal::App;

fn main() -> ExitCode {
    // RUST_LOG and PORTAL_LOG_DIR may come from .env
    let dotenv = portal::config::load_dotenv();
    let _log = portal::debug::init();
    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "Loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring .env"),
    }

    let config = match Config::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rt = match runtime() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };
    let _enter = rt.enter();

    let ephemeral = std::env::args().any(|arg| arg == "--ephemeral");
    let store: Arc<dyn SessionStore> = if ephemeral {
        tracing::info!("Ephemeral session store, nothing is persisted");
        Arc::new(MemorySessionStore::new())
    } else {
        Arc::new(FileSessionStore::open(config.session_file.clone()))
    };

    let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config.api_base_url(), config.request_timeout));
    tracing::info!(backend = %config.backend_url, "Starting CRED portal");

    let mut app = App::bootstrap(&config, api, store);
    app.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CRED")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    match eframe::run_native("CRED", options, Box::new(move |_cc| Ok(Box::new(PortalUi::new(app))))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "GUI exited with an error");
            ExitCode::FAILURE
        }
    }
}
