use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Domain, Trait};
use super::matrix::blend;

/// Per-domain IPIP accumulation and its normalized percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub raw_sum: u32,
    pub answered: u32,
    pub pct: f64,
}

/// Scores of one trait at each stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScore {
    pub from_ipip: f64,
    pub from_sjt: f64,
    pub blended: f64,
}

impl TraitScore {
    pub fn new(from_ipip: f64, from_sjt: f64) -> Self {
        Self {
            from_ipip,
            from_sjt,
            blended: blend(from_ipip, from_sjt),
        }
    }
}

/// Immutable result of one scoring run. Every score is on a `0..=100` scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub domains: BTreeMap<Domain, DomainScore>,
    pub traits: BTreeMap<Trait, TraitScore>,
    pub ipip_overall: f64,
    pub sjt_overall: f64,
    pub composite: f64,
}

impl TraitProfile {
    pub fn domain_pct(&self, domain: Domain) -> f64 {
        self.domains
            .get(&domain)
            .map(|score| score.pct)
            .unwrap_or(0.0)
    }

    pub fn trait_score(&self, trait_: Trait) -> TraitScore {
        self.traits
            .get(&trait_)
            .copied()
            .unwrap_or_else(|| TraitScore::new(0.0, 0.0))
    }

    /// Final blended scores keyed by trait, the input expected by sector scoring.
    pub fn final_scores(&self) -> BTreeMap<Trait, f64> {
        self.traits
            .iter()
            .map(|(trait_, score)| (*trait_, score.blended))
            .collect()
    }

    /// Final blended scores keyed by `T01`..`T12`.
    pub fn final_scores_by_code(&self) -> BTreeMap<String, f64> {
        self.traits
            .iter()
            .map(|(trait_, score)| (trait_.code().to_string(), score.blended))
            .collect()
    }
}
