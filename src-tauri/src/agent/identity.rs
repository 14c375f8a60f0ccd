//! Agent identities and the step-to-specialist routing table.
//!
//! Routing is an explicit mapping over a closed set of step identifiers.
//! The UI can only produce keys from this set; unknown keys are rejected at
//! the command boundary instead of falling through to a default specialist.

use serde::{Deserialize, Serialize};

/// The four fixed identities exposed by the agent gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentIdentity {
    /// Primary generation: produces the full eleven-step framework.
    Orchestrator,
    /// Refinement specialist for market-facing steps.
    MarketResearch,
    /// Refinement specialist for idea generation and combination.
    Ideation,
    /// Refinement specialist for everything execution-shaped.
    Strategy,
}

impl AgentIdentity {
    /// Opaque identifier understood by the gateway.
    pub fn id(&self) -> &'static str {
        match self {
            AgentIdentity::Orchestrator => "brainstorm-orchestrator",
            AgentIdentity::MarketResearch => "market-research-agent",
            AgentIdentity::Ideation => "ideation-agent",
            AgentIdentity::Strategy => "strategy-agent",
        }
    }
}

/// The eleven steps of the brainstorm framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Trends,
    PainPoints,
    Ideas,
    TopIdeas,
    Features,
    Obstacles,
    Mitigations,
    Hybrids,
    Scenarios,
    Rankings,
    Roadmap,
}

impl StepId {
    pub const ALL: [StepId; 11] = [
        StepId::Trends,
        StepId::PainPoints,
        StepId::Ideas,
        StepId::TopIdeas,
        StepId::Features,
        StepId::Obstacles,
        StepId::Mitigations,
        StepId::Hybrids,
        StepId::Scenarios,
        StepId::Rankings,
        StepId::Roadmap,
    ];

    /// Stable key, also the section key in the result payload.
    pub fn key(&self) -> &'static str {
        match self {
            StepId::Trends => "trends",
            StepId::PainPoints => "pain_points",
            StepId::Ideas => "ideas",
            StepId::TopIdeas => "top_ideas",
            StepId::Features => "features",
            StepId::Obstacles => "obstacles",
            StepId::Mitigations => "mitigations",
            StepId::Hybrids => "hybrids",
            StepId::Scenarios => "scenarios",
            StepId::Rankings => "rankings",
            StepId::Roadmap => "roadmap",
        }
    }

    pub fn from_key(key: &str) -> Option<StepId> {
        StepId::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Display label used in section headers and chat greetings.
    pub fn label(&self) -> &'static str {
        match self {
            StepId::Trends => "Step 1: Market Trends",
            StepId::PainPoints => "Step 2: Customer Pain Points",
            StepId::Ideas => "Step 3: Product Ideas",
            StepId::TopIdeas => "Step 4: Top Ideas",
            StepId::Features => "Step 5: Key Features",
            StepId::Obstacles => "Step 6: Obstacles",
            StepId::Mitigations => "Step 7: Mitigation Strategies",
            StepId::Hybrids => "Step 8: Hybrid Concepts",
            StepId::Scenarios => "Step 9: Future Scenarios",
            StepId::Rankings => "Step 10: Final Rankings",
            StepId::Roadmap => "Step 11: Roadmap",
        }
    }

    /// Which specialist handles refinement chat for this step.
    pub fn specialist(&self) -> AgentIdentity {
        match self {
            StepId::Trends => AgentIdentity::MarketResearch,
            StepId::Ideas | StepId::TopIdeas | StepId::Hybrids => AgentIdentity::Ideation,
            _ => AgentIdentity::Strategy,
        }
    }
}
