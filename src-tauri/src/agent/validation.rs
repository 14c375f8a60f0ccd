//! Boundary validation for the orchestrator's result payload.
//!
//! The payload comes from an external agent and is untrusted. Validation
//! fails closed on payloads that are not framework results at all, and
//! degrades per section otherwise: a missing or misshapen section becomes an
//! empty section plus a warning the UI lists above the rendered result.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::identity::StepId;
use super::types::{BrainstormResult, Roadmap};

/// Parse and check an orchestrator result payload.
///
/// Rejects payloads that are not JSON objects or that contain none of the
/// eleven framework sections. Returns the parsed result together with one
/// warning per section that was missing or could not be parsed.
pub fn validate_result(payload: &Value) -> Result<(BrainstormResult, Vec<String>), String> {
    let obj = payload
        .as_object()
        .ok_or("Agent result is not a JSON object")?;

    if !StepId::ALL.iter().any(|s| obj.contains_key(s.key())) {
        return Err(
            "Agent result contains none of the framework sections; refusing to render it"
                .to_string(),
        );
    }

    let mut warnings = Vec::new();
    let result = BrainstormResult {
        trends: take_section(obj, StepId::Trends, &mut warnings),
        pain_points: take_section(obj, StepId::PainPoints, &mut warnings),
        ideas: take_section(obj, StepId::Ideas, &mut warnings),
        top_ideas: take_section(obj, StepId::TopIdeas, &mut warnings),
        features: take_section(obj, StepId::Features, &mut warnings),
        obstacles: take_section(obj, StepId::Obstacles, &mut warnings),
        mitigations: take_section(obj, StepId::Mitigations, &mut warnings),
        hybrids: take_section(obj, StepId::Hybrids, &mut warnings),
        scenarios: take_section(obj, StepId::Scenarios, &mut warnings),
        rankings: take_section(obj, StepId::Rankings, &mut warnings),
        roadmap: take_roadmap(obj, &mut warnings),
    };

    for w in &warnings {
        warn!("{}", w);
    }

    Ok((result, warnings))
}

fn take_section<T: DeserializeOwned + Default>(
    obj: &serde_json::Map<String, Value>,
    step: StepId,
    warnings: &mut Vec<String>,
) -> T {
    match obj.get(step.key()) {
        None | Some(Value::Null) => {
            warnings.push(missing(step));
            T::default()
        }
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warnings.push(malformed(step, &e));
                T::default()
            }
        },
    }
}

fn take_roadmap(
    obj: &serde_json::Map<String, Value>,
    warnings: &mut Vec<String>,
) -> Option<Roadmap> {
    match obj.get(StepId::Roadmap.key()) {
        None | Some(Value::Null) => {
            warnings.push(missing(StepId::Roadmap));
            None
        }
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warnings.push(malformed(StepId::Roadmap, &e));
                None
            }
        },
    }
}

fn missing(step: StepId) -> String {
    format!("The agent did not return '{}' ({})", step.key(), step.label())
}

fn malformed(step: StepId, err: &serde_json::Error) -> String {
    format!(
        "Section '{}' has an unexpected shape and was skipped: {}",
        step.key(),
        err
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_object_payload() {
        assert!(validate_result(&json!("just a string")).is_err());
        assert!(validate_result(&json!([1, 2, 3])).is_err());
        assert!(validate_result(&json!(null)).is_err());
    }

    #[test]
    fn test_rejects_object_without_any_section() {
        let err = validate_result(&json!({"unrelated": true})).unwrap_err();
        assert!(err.contains("none of the framework sections"));
    }

    #[test]
    fn test_single_section_parses_with_warnings_for_the_rest() {
        let payload = json!({
            "trends": [{"name": "AI wearables", "relevance": 85}]
        });

        let (result, warnings) = validate_result(&payload).unwrap();
        assert_eq!(result.trends.len(), 1);
        assert_eq!(result.trends[0].relevance, 85);
        // Ten sections absent, one warning each.
        assert_eq!(warnings.len(), 10);
        assert!(warnings.iter().any(|w| w.contains("pain_points")));
        assert!(warnings.iter().any(|w| w.contains("roadmap")));
    }

    #[test]
    fn test_malformed_section_degrades_to_empty_with_warning() {
        let payload = json!({
            "trends": "should have been an array",
            "ideas": [{"name": "DoseSense", "summary": "reminders"}]
        });

        let (result, warnings) = validate_result(&payload).unwrap();
        assert!(result.trends.is_empty());
        assert_eq!(result.ideas.len(), 1);
        assert!(warnings
            .iter()
            .any(|w| w.contains("'trends'") && w.contains("unexpected shape")));
    }

    #[test]
    fn test_null_section_counts_as_missing() {
        let payload = json!({
            "trends": [{"name": "t", "relevance": 10}],
            "roadmap": null
        });

        let (result, warnings) = validate_result(&payload).unwrap();
        assert!(result.roadmap.is_none());
        assert!(warnings.iter().any(|w| w.contains("'roadmap'")));
    }

    #[test]
    fn test_complete_payload_produces_no_warnings() {
        let mut obj = serde_json::Map::new();
        for step in StepId::ALL {
            let value = if step == StepId::Roadmap {
                json!({"phases": []})
            } else {
                json!([])
            };
            obj.insert(step.key().to_string(), value);
        }

        let (_, warnings) = validate_result(&Value::Object(obj)).unwrap();
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }
}
