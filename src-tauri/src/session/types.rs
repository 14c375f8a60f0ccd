use serde::{Deserialize, Serialize};

/// One recorded brainstorm invocation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Derived from creation time (millisecond timestamp).
    pub id: i64,
    pub industry: String,
    pub problem: String,
    pub trend: String,
    pub created_at: String,
}
