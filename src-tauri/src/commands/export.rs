//! Export command: renders the markdown document the frontend downloads.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::agent::BrainstormResult;
use crate::export::{render_markdown, suggested_filename};

#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub content: String,
}

#[tauri::command]
pub fn export_brainstorm(
    result: BrainstormResult,
    industry: String,
    problem: String,
    trend: String,
) -> Result<ExportDocument, String> {
    let content = render_markdown(&result, &industry, &problem, &trend);
    let filename = suggested_filename(&industry, Utc::now());
    info!("Exported brainstorm to '{}'", filename);
    Ok(ExportDocument { filename, content })
}
