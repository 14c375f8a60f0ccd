pub mod agent;
mod commands;
pub mod error;
pub mod export;
pub mod session;

pub use session::{Session, SessionStore};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(SessionStore::default())
        .invoke_handler(tauri::generate_handler![
            commands::brainstorm::run_brainstorm,
            commands::chat::send_refinement,
            commands::sessions::list_sessions,
            commands::export::export_brainstorm,
            commands::config::get_preference,
            commands::config::set_preference,
            commands::keychain::set_agent_key,
            commands::keychain::get_agent_key_status,
            commands::keychain::delete_agent_key,
            commands::health::run_health_check,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
