//! Connection health check for the settings page.

use serde::Serialize;
use tauri::AppHandle;
use tracing::info;
use url::Url;

use crate::commands::config::agent_settings;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// Endpoint the app would call right now.
    pub endpoint: String,
    /// Whether that endpoint parses as an http(s) URL.
    pub endpoint_valid: bool,
    pub api_key_set: bool,
}

#[tauri::command]
pub fn run_health_check(app: AppHandle) -> Result<HealthReport, String> {
    let settings = agent_settings(&app)?;

    let endpoint_valid = Url::parse(&settings.endpoint)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);

    let report = HealthReport {
        endpoint: settings.endpoint,
        endpoint_valid,
        api_key_set: settings.api_key.is_some(),
    };
    info!(
        "Health check: endpoint_valid={}, api_key_set={}",
        report.endpoint_valid, report.api_key_set
    );
    Ok(report)
}
