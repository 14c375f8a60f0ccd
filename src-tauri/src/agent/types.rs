//! Wire types for the agent gateway and the eleven-step brainstorm result.
//!
//! The gateway envelope is fixed; the result payload inside it is produced
//! by the orchestrator agent and must be treated as untrusted. Every section
//! here is optional and defaulted so `validation::validate_result` can
//! degrade per section instead of rejecting the whole payload.

use serde::{Deserialize, Serialize};

/// Envelope returned by the agent gateway for every invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct InvokeEnvelope {
    pub success: bool,
    #[serde(default)]
    pub response: Option<AgentResponse>,
}

/// Agent-level reply embedded in the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Interpret an envelope. Success requires both the transport-level flag and
/// an embedded `status == "success"`; anything else becomes a readable error
/// built from whatever detail the gateway supplied.
pub fn unwrap_envelope(envelope: InvokeEnvelope) -> Result<serde_json::Value, String> {
    if !envelope.success {
        let detail = envelope
            .response
            .and_then(|r| r.message)
            .unwrap_or_else(|| "no detail provided".to_string());
        return Err(format!("Agent invocation failed: {}", detail));
    }

    let response = envelope
        .response
        .ok_or("Agent reply is missing its response body")?;

    if response.status != "success" {
        let detail = response
            .message
            .unwrap_or_else(|| format!("status '{}'", response.status));
        return Err(format!("Agent reported failure: {}", detail));
    }

    response
        .result
        .ok_or_else(|| "Agent reply contained no result payload".to_string())
}

// -- The eleven-step brainstorm result --

/// Complete brainstorm framework as returned by the orchestrator.
/// Missing sections deserialize to empty; the validation layer records a
/// warning for each one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainstormResult {
    #[serde(default)]
    pub trends: Vec<TrendItem>,
    #[serde(default)]
    pub pain_points: Vec<PainPoint>,
    #[serde(default)]
    pub ideas: Vec<ProductIdea>,
    #[serde(default)]
    pub top_ideas: Vec<TopIdea>,
    #[serde(default)]
    pub features: Vec<IdeaGroup>,
    #[serde(default)]
    pub obstacles: Vec<IdeaGroup>,
    #[serde(default)]
    pub mitigations: Vec<IdeaGroup>,
    #[serde(default)]
    pub hybrids: Vec<HybridConcept>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub rankings: Vec<RankingRow>,
    #[serde(default)]
    pub roadmap: Option<Roadmap>,
}

/// An industry trend with a 0-100 relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub relevance: u8,
}

/// A customer pain point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub affected_segment: Option<String>,
}

/// A raw product idea from the divergent ideation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductIdea {
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

/// A shortlisted idea with three 0-100 component scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopIdea {
    pub name: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub feasibility: u8,
    #[serde(default)]
    pub impact: u8,
    #[serde(default)]
    pub innovation: u8,
}

/// Items grouped under one idea. Used for features, obstacles, and the
/// mitigation strategies addressing those obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaGroup {
    pub idea: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A concept combining two or more parent ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridConcept {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// A narrative future scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    #[serde(default)]
    pub narrative: String,
}

/// Final ranking row: four 0-100 component scores and their total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub name: String,
    #[serde(default)]
    pub market_potential: u8,
    #[serde(default)]
    pub feasibility: u8,
    #[serde(default)]
    pub innovation: u8,
    #[serde(default)]
    pub strategic_fit: u8,
    #[serde(default)]
    pub total: u16,
}

/// Execution roadmap. The orchestrator is asked for exactly four phases but
/// the renderer shows whatever arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub name: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_success() {
        let envelope: InvokeEnvelope = serde_json::from_value(json!({
            "success": true,
            "response": {
                "status": "success",
                "result": {"trends": []}
            }
        }))
        .unwrap();

        let payload = unwrap_envelope(envelope).unwrap();
        assert!(payload.get("trends").is_some());
    }

    #[test]
    fn test_unwrap_envelope_transport_failure() {
        let envelope: InvokeEnvelope = serde_json::from_value(json!({
            "success": false,
            "response": {
                "status": "error",
                "message": "gateway overloaded"
            }
        }))
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.contains("Agent invocation failed"));
        assert!(err.contains("gateway overloaded"));
    }

    #[test]
    fn test_unwrap_envelope_agent_failure_status() {
        let envelope: InvokeEnvelope = serde_json::from_value(json!({
            "success": true,
            "response": {
                "status": "timeout",
                "message": null,
                "result": null
            }
        }))
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.contains("Agent reported failure"));
        assert!(err.contains("timeout"));
    }

    #[test]
    fn test_unwrap_envelope_missing_result() {
        let envelope: InvokeEnvelope = serde_json::from_value(json!({
            "success": true,
            "response": {"status": "success"}
        }))
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.contains("no result payload"));
    }

    #[test]
    fn test_unwrap_envelope_missing_response_body() {
        let envelope: InvokeEnvelope =
            serde_json::from_value(json!({"success": true})).unwrap();

        assert!(unwrap_envelope(envelope).is_err());
    }

    #[test]
    fn test_result_deserialize_partial() {
        let result: BrainstormResult = serde_json::from_value(json!({
            "trends": [
                {"name": "AI wearables", "description": "on-device models", "relevance": 85}
            ]
        }))
        .unwrap();

        assert_eq!(result.trends.len(), 1);
        assert_eq!(result.trends[0].relevance, 85);
        assert!(result.pain_points.is_empty());
        assert!(result.roadmap.is_none());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = BrainstormResult {
            rankings: vec![RankingRow {
                name: "DoseSense".to_string(),
                market_potential: 82,
                feasibility: 70,
                innovation: 75,
                strategic_fit: 80,
                total: 307,
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&result).unwrap();
        let reparsed: BrainstormResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, reparsed);
    }
}
