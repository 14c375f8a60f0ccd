//! Preferences and resolved agent gateway settings.

use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::agent::AgentSettings;
use crate::commands::keychain::read_agent_key;

const STORE_FILE: &str = "settings.json";

/// Preference key for the agent gateway endpoint.
pub const ENDPOINT_PREF: &str = "agent_endpoint";

/// Used when no endpoint preference is set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8790";

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    let store = app.store(STORE_FILE).map_err(|e| {
        warn!("Failed to open settings store: {}", e);
        e.to_string()
    })?;
    Ok(store.get(key).and_then(|v| v.as_str().map(|s| s.to_string())))
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference {}", key);
    let store = app.store(STORE_FILE).map_err(|e| {
        warn!("Failed to open settings store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save settings store: {}", e);
        e.to_string()
    })
}

/// Resolve the gateway endpoint and optional API key for an agent call.
pub fn agent_settings(app: &AppHandle) -> Result<AgentSettings, String> {
    let store = app.store(STORE_FILE).map_err(|e| e.to_string())?;

    let endpoint = store
        .get(ENDPOINT_PREF)
        .and_then(|v| v.as_str().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key = read_agent_key()?;

    Ok(AgentSettings { endpoint, api_key })
}
