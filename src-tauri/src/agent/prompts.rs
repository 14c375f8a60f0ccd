//! Prompt construction for the orchestrator and the refinement specialists.

use super::identity::StepId;

/// Build the single orchestrator instruction for a full brainstorm run.
/// Embeds the three inputs verbatim and the fixed directive to produce the
/// complete eleven-step framework as one JSON object.
pub fn build_brainstorm_prompt(industry: &str, problem: &str, trend: &str) -> String {
    format!(
        r#"Run the complete eleven-step product brainstorming framework.

Context:
- Industry: {industry}
- Problem to solve: {problem}
- Emerging trend to leverage: {trend}

Work through all eleven steps and return the full framework in a single
response: market trends, customer pain points, product ideas, top ideas
with feasibility/impact/innovation scores, key features per top idea,
obstacles per top idea, mitigation strategies for those obstacles, hybrid
concepts combining parent ideas, future scenarios, final rankings with
market potential/feasibility/innovation/strategic fit scores and totals,
and a four-phase roadmap with a timeframe, activities, and deliverables
per phase.

Respond with valid JSON only, no markdown, shaped as:
{schema}"#,
        industry = industry,
        problem = problem,
        trend = trend,
        schema = result_shape(),
    )
}

/// Build a refinement prompt for the side chat. Carries the step under
/// discussion, the user's question, and the original inputs as grounding.
pub fn build_refinement_prompt(
    step: StepId,
    question: &str,
    industry: &str,
    problem: &str,
    trend: &str,
) -> String {
    format!(
        r#"You are refining one step of an existing brainstorm.

Step under discussion: {label}
Original context: industry "{industry}", problem "{problem}", trend "{trend}".

User request: {question}

Answer concisely and stay within the scope of this step."#,
        label = step.label(),
        industry = industry,
        problem = problem,
        trend = trend,
        question = question,
    )
}

/// Compact description of the expected result object, embedded in the
/// orchestrator prompt. Keys here must match `BrainstormResult`.
fn result_shape() -> &'static str {
    r#"{
  "trends": [{"name": "", "description": "", "relevance": 0-100}],
  "pain_points": [{"title": "", "description": "", "affected_segment": ""}],
  "ideas": [{"name": "", "summary": ""}],
  "top_ideas": [{"name": "", "rationale": "", "feasibility": 0-100, "impact": 0-100, "innovation": 0-100}],
  "features": [{"idea": "", "items": [""]}],
  "obstacles": [{"idea": "", "items": [""]}],
  "mitigations": [{"idea": "", "items": [""]}],
  "hybrids": [{"name": "", "parents": [""], "description": ""}],
  "scenarios": [{"title": "", "narrative": ""}],
  "rankings": [{"name": "", "market_potential": 0-100, "feasibility": 0-100, "innovation": 0-100, "strategic_fit": 0-100, "total": 0-400}],
  "roadmap": {"phases": [{"name": "", "timeframe": "", "activities": [""], "deliverables": [""]}]}
}"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brainstorm_prompt_embeds_inputs_verbatim() {
        let prompt = build_brainstorm_prompt(
            "Healthcare",
            "medication adherence",
            "AI wearables",
        );

        assert!(prompt.contains("Healthcare"));
        assert!(prompt.contains("medication adherence"));
        assert!(prompt.contains("AI wearables"));
        assert!(prompt.contains("eleven-step"));
    }

    #[test]
    fn test_brainstorm_prompt_names_every_section_key() {
        let prompt = build_brainstorm_prompt("a", "b", "c");
        for step in StepId::ALL {
            assert!(
                prompt.contains(&format!("\"{}\"", step.key())),
                "prompt missing key {}",
                step.key()
            );
        }
    }

    #[test]
    fn test_refinement_prompt_carries_step_and_grounding() {
        let prompt = build_refinement_prompt(
            StepId::Rankings,
            "why is DoseSense ranked first?",
            "Healthcare",
            "medication adherence",
            "AI wearables",
        );

        assert!(prompt.contains("Step 10: Final Rankings"));
        assert!(prompt.contains("why is DoseSense ranked first?"));
        assert!(prompt.contains("Healthcare"));
        assert!(prompt.contains("medication adherence"));
        assert!(prompt.contains("AI wearables"));
    }
}
