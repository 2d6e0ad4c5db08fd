use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attributes::CandidateAttributes;
use super::gates::{satisfies, Gate, GateFailure, Threshold};

/// How a gate treats a candidate attribute that could not be derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    #[default]
    Fail,
    Pass,
}

/// Per-gate unknown handling. Gates without an override use `default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    pub default: UnknownPolicy,
    pub overrides: BTreeMap<Gate, UnknownPolicy>,
}

impl Default for GatePolicy {
    /// Age is collected optionally, so an unknown age never disqualifies.
    fn default() -> Self {
        Self::strict().with_override(Gate::MinAge, UnknownPolicy::Pass)
    }
}

impl GatePolicy {
    /// Every unknown attribute fails the gates that need it.
    pub fn strict() -> Self {
        Self {
            default: UnknownPolicy::Fail,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, gate: Gate, policy: UnknownPolicy) -> Self {
        self.overrides.insert(gate, policy);
        self
    }

    pub fn for_gate(&self, gate: Gate) -> UnknownPolicy {
        self.overrides.get(&gate).copied().unwrap_or(self.default)
    }
}

pub(crate) fn check_gate(
    gate: Gate,
    threshold: Threshold,
    attrs: &CandidateAttributes,
    policy: &GatePolicy,
) -> Option<GateFailure> {
    let observed = gate.observe(attrs);
    let passed = match satisfies(threshold, observed) {
        Some(passed) => passed,
        None => policy.for_gate(gate) == UnknownPolicy::Pass,
    };
    (!passed).then(|| GateFailure {
        gate,
        threshold,
        unknown: observed.is_unknown(),
    })
}
