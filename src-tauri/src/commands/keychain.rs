//! Agent gateway API key storage in the OS keychain.
//!
//! One fixed entry; the key never touches the preferences store or logs.

use keyring::Entry;
use tracing::{info, warn};

const KEYRING_SERVICE: &str = "ideaforge-agent-gateway";
const KEYRING_USER: &str = "ideaforge";

fn entry() -> Result<Entry, String> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER).map_err(|e| {
        warn!("Failed to open keyring entry: {}", e);
        e.to_string()
    })
}

/// Read the stored key, `None` if not configured.
pub fn read_agent_key() -> Result<Option<String>, String> {
    match entry()?.get_password() {
        Ok(key) => Ok(Some(key)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => {
            warn!("Failed to read agent API key: {}", e);
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub fn set_agent_key(key: &str) -> Result<(), String> {
    info!("Storing agent API key");
    entry()?.set_password(key).map_err(|e| {
        warn!("Failed to store agent API key: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub fn get_agent_key_status() -> Result<bool, String> {
    Ok(read_agent_key()?.is_some())
}

#[tauri::command]
pub fn delete_agent_key() -> Result<(), String> {
    info!("Deleting agent API key");
    match entry()?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => {
            warn!("Failed to delete agent API key: {}", e);
            Err(e.to_string())
        }
    }
}
