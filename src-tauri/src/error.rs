use thiserror::Error;

/// Failures talking to the agent gateway. Converted to `String` at the
/// Tauri command boundary.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Agent gateway timed out after {0}s")]
    Timeout(u64),

    #[error("Agent gateway request failed: {0}")]
    Transport(String),

    #[error("Agent gateway returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Agent gateway reply was not valid JSON: {0}")]
    MalformedReply(String),
}

impl From<AgentError> for String {
    fn from(err: AgentError) -> Self {
        err.to_string()
    }
}
