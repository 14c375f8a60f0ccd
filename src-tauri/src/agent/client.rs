//! Transport to the agent gateway.
//!
//! The gateway exposes exactly one operation: invoke a named agent with a
//! natural-language message and get back a normalized envelope. Its internal
//! protocol is out of scope here; this module only owns the HTTP plumbing.

use std::time::Duration;

use tracing::{error, info};

use super::types::InvokeEnvelope;
use crate::error::AgentError;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Resolved connection settings for the gateway.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
}

/// Invoke one agent with one message. Exactly one request per call; no
/// retries, the caller surfaces whatever comes back.
pub async fn invoke_agent(
    settings: &AgentSettings,
    agent_id: &str,
    message: &str,
) -> Result<InvokeEnvelope, AgentError> {
    let client = build_api_client()?;
    let url = invoke_url(&settings.endpoint);

    info!("Invoking agent '{}' via {}", agent_id, url);

    let body = serde_json::json!({
        "agent_id": agent_id,
        "message": message,
    });

    let mut request = client.post(&url).json(&body);
    if let Some(key) = &settings.api_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await.map_err(|e| {
        let err = if e.is_timeout() {
            AgentError::Timeout(REQUEST_TIMEOUT_SECS)
        } else {
            AgentError::Transport(e.to_string())
        };
        error!("{}", err);
        err
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        let err = AgentError::Http {
            status: status.as_u16(),
            body: truncate(&body, 1024),
        };
        error!("{}", err);
        return Err(err);
    }

    let body_text = response
        .text()
        .await
        .map_err(|e| AgentError::Transport(e.to_string()))?;

    serde_json::from_str(&body_text).map_err(|e| {
        let err = AgentError::MalformedReply(format!(
            "{} (first 500 chars: {})",
            e,
            truncate(&body_text, 500)
        ));
        error!("{}", err);
        err
    })
}

/// The gateway's invoke URL for a configured endpoint.
pub fn invoke_url(endpoint: &str) -> String {
    format!("{}/api/invoke", endpoint.trim_end_matches('/'))
}

fn build_api_client() -> Result<reqwest::Client, AgentError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| AgentError::Transport(format!("failed to build HTTP client: {}", e)))
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() > max {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i < max)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &text[..cut])
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_url_strips_trailing_slash() {
        assert_eq!(
            invoke_url("http://localhost:8790/"),
            "http://localhost:8790/api/invoke"
        );
        assert_eq!(
            invoke_url("http://localhost:8790"),
            "http://localhost:8790/api/invoke"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        // Multi-byte content must not split inside a character.
        let cut = truncate("ééééé", 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_build_api_client_succeeds() {
        assert!(build_api_client().is_ok());
    }

    #[tokio::test]
    async fn test_invoke_agent_rejects_invalid_endpoint() {
        let settings = AgentSettings {
            endpoint: "not a url".to_string(),
            api_key: None,
        };

        let result = invoke_agent(&settings, "brainstorm-orchestrator", "hello").await;
        assert!(matches!(result, Err(AgentError::Transport(_))));
    }
}
