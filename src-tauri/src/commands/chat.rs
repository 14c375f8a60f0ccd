//! Refinement chat command.
//!
//! Routes each message to the specialist for the step under discussion and
//! flattens whatever the agent returns into displayable text.

use serde_json::Value;
use tauri::AppHandle;
use tracing::info;

use crate::agent::prompts::build_refinement_prompt;
use crate::agent::{invoke_agent, unwrap_envelope, StepId};
use crate::commands::config::agent_settings;

#[tauri::command]
pub async fn send_refinement(
    app: AppHandle,
    step: String,
    text: String,
    industry: String,
    problem: String,
    trend: String,
) -> Result<String, String> {
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err("Refinement message is empty".to_string());
    }

    let step = StepId::from_key(&step).ok_or_else(|| format!("Unknown refinement step: {}", step))?;
    let specialist = step.specialist();

    info!(
        "Routing refinement for '{}' to {}",
        step.label(),
        specialist.id()
    );

    let settings = agent_settings(&app)?;
    let prompt = build_refinement_prompt(step, &text, &industry, &problem, &trend);

    let envelope = invoke_agent(&settings, specialist.id(), &prompt).await?;
    let payload = unwrap_envelope(envelope)?;

    Ok(format_reply(&payload))
}

/// Render an agent payload as plain text: strings pass through, structured
/// values become an indented dump.
pub fn format_reply(payload: &Value) -> String {
    if let Value::String(text) = payload {
        return text.clone();
    }
    let mut out = String::new();
    append_value(&mut out, payload, 0);
    out.trim_end().to_string()
}

fn append_value(out: &mut String, value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Object(_) | Value::Array(_) => {
                        out.push_str(&format!("{}{}:\n", pad, key));
                        append_value(out, val, depth + 1);
                    }
                    _ => out.push_str(&format!("{}{}: {}\n", pad, key, scalar(val))),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        out.push_str(&format!("{}-\n", pad));
                        append_value(out, item, depth + 1);
                    }
                    _ => out.push_str(&format!("{}- {}\n", pad, scalar(item))),
                }
            }
        }
        _ => out.push_str(&format!("{}{}\n", pad, scalar(value))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload_passes_through() {
        assert_eq!(
            format_reply(&json!("Shortened: focus on the top two trends.")),
            "Shortened: focus on the top two trends."
        );
    }

    #[test]
    fn test_object_payload_becomes_key_value_lines() {
        let reply = format_reply(&json!({
            "suggestion": "narrow the segment",
            "confidence": 0.8
        }));

        assert!(reply.contains("suggestion: narrow the segment"));
        assert!(reply.contains("confidence: 0.8"));
    }

    #[test]
    fn test_nested_structures_are_indented() {
        let reply = format_reply(&json!({
            "ideas": [
                {"name": "DoseSense", "score": 85},
                "a bare string"
            ]
        }));

        assert!(reply.starts_with("ideas:\n"));
        assert!(reply.contains("  -\n    name: DoseSense"));
        assert!(reply.contains("  - a bare string"));
    }

    #[test]
    fn test_scalar_payload_renders_alone() {
        assert_eq!(format_reply(&json!(42)), "42");
        assert_eq!(format_reply(&json!(true)), "true");
    }
}
