//! Session history commands.

use tauri::State;

use crate::session::{Session, SessionStore};

/// All sessions from this process lifetime, newest first.
#[tauri::command]
pub fn list_sessions(store: State<'_, SessionStore>) -> Result<Vec<Session>, String> {
    Ok(store.list())
}
