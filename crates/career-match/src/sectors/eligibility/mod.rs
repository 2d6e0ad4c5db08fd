mod attributes;
mod gates;
mod policy;

pub use attributes::{
    derive_attributes, education_label, gate_key, missing_gate_answers, parse_age,
    CandidateAttributes, TriState, AGE_KEY, DISTRICT_FALLBACK_KEY, DISTRICT_KEY,
    LETTERED_GATE_QUESTIONS,
};
pub use gates::{Gate, GateFailure, Observed, Threshold};
pub use policy::{GatePolicy, UnknownPolicy};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::requirements::SectorRequirements;
use policy::check_gate;

/// Stateless evaluator that checks candidate attributes against sector requirements.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    policy: GatePolicy,
}

impl EligibilityEvaluator {
    pub fn new(policy: GatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn derive_attributes(&self, answers: &HashMap<String, String>) -> CandidateAttributes {
        derive_attributes(answers)
    }

    /// Walks every gate in [`Gate::ordered`] order. Absent requirements gate nothing.
    pub fn check(
        &self,
        attrs: &CandidateAttributes,
        requirements: Option<&SectorRequirements>,
    ) -> EligibilityVerdict {
        let Some(requirements) = requirements else {
            return EligibilityVerdict::eligible();
        };

        let failures: Vec<GateFailure> = Gate::ordered()
            .into_iter()
            .filter_map(|gate| {
                let threshold = gate.threshold(requirements)?;
                check_gate(gate, threshold, attrs, &self.policy)
            })
            .collect();

        EligibilityVerdict {
            eligible: failures.is_empty(),
            failures,
        }
    }
}

/// Per-sector gate outcome; `eligible` holds exactly when `failures` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub failures: Vec<GateFailure>,
}

impl EligibilityVerdict {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            failures: Vec::new(),
        }
    }

    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(GateFailure::summary).collect()
    }

    pub fn failed_gates(&self) -> Vec<&'static str> {
        self.failures
            .iter()
            .map(|failure| failure.gate.code())
            .collect()
    }
}
