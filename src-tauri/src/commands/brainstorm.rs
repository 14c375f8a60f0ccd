//! Primary generation command.
//!
//! One orchestrator invocation per call: builds the instruction from the
//! three inputs, enforces the envelope success condition, validates the
//! untrusted result at the boundary, and records a session on success.

use serde::Serialize;
use tauri::{AppHandle, State};
use tracing::{info, warn};

use crate::agent::prompts::build_brainstorm_prompt;
use crate::agent::{invoke_agent, unwrap_envelope, validate_result, AgentIdentity, BrainstormResult};
use crate::commands::config::agent_settings;
use crate::session::SessionStore;

/// Result of a generation run: the parsed framework plus any schema
/// warnings the UI should list above it.
#[derive(Debug, Serialize)]
pub struct BrainstormOutcome {
    pub result: BrainstormResult,
    pub warnings: Vec<String>,
}

#[tauri::command]
pub async fn run_brainstorm(
    app: AppHandle,
    store: State<'_, SessionStore>,
    industry: String,
    problem: String,
    trend: String,
) -> Result<BrainstormOutcome, String> {
    let industry = industry.trim().to_string();
    let problem = problem.trim().to_string();
    let trend = trend.trim().to_string();

    // The form validates before invoking; this guards direct callers.
    if industry.is_empty() || problem.is_empty() || trend.is_empty() {
        return Err("Industry, problem, and trend are all required".to_string());
    }

    info!("Starting brainstorm for industry '{}'", industry);

    let settings = agent_settings(&app)?;
    let prompt = build_brainstorm_prompt(&industry, &problem, &trend);

    let envelope = invoke_agent(&settings, AgentIdentity::Orchestrator.id(), &prompt).await?;
    let payload = unwrap_envelope(envelope)?;
    let (result, warnings) = validate_result(&payload)?;

    if !warnings.is_empty() {
        warn!("Brainstorm result passed with {} schema warnings", warnings.len());
    }

    store.record(&industry, &problem, &trend);

    info!(
        "Brainstorm complete: {} trends, {} ideas, {} rankings",
        result.trends.len(),
        result.ideas.len(),
        result.rankings.len()
    );

    Ok(BrainstormOutcome { result, warnings })
}
