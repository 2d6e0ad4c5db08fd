use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SectorConfig;
use super::eligibility::{CandidateAttributes, EligibilityEvaluator, Gate};
use super::scorer::SectorScorer;
use super::weights::TraitScores;

pub const DEFAULT_TOP_N: usize = 5;

/// One sector as shown to the candidate: fit score plus gate outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSectorView {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub eligible: bool,
    /// Rendered gate failures in evaluation order; empty iff `eligible`.
    pub reasons: Vec<String>,
    pub failed_gates: Vec<Gate>,
    pub top_traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub top_eligible: Vec<RankedSectorView>,
    /// Every ineligible sector scoring at least `eligible_cutoff`; deliberately unbounded.
    pub near_miss: Vec<RankedSectorView>,
    pub eligible_cutoff: f64,
}

/// Combines sector scores with eligibility verdicts into the final shortlist.
#[derive(Debug, Clone)]
pub struct RankingCompositor {
    config: Arc<SectorConfig>,
    evaluator: EligibilityEvaluator,
    scorer: SectorScorer,
    top_n: usize,
}

impl RankingCompositor {
    pub fn new(config: Arc<SectorConfig>, evaluator: EligibilityEvaluator, top_n: usize) -> Self {
        Self {
            config,
            evaluator,
            scorer: SectorScorer::new(),
            top_n: top_n.max(1),
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn evaluator(&self) -> &EligibilityEvaluator {
        &self.evaluator
    }

    pub fn build(&self, gate_answers: &HashMap<String, String>, scores: &TraitScores) -> RankedResult {
        let attrs = self.evaluator.derive_attributes(gate_answers);
        self.build_for(&attrs, scores)
    }

    /// Same as [`RankingCompositor::build`] for callers that already derived the attributes.
    pub fn build_for(&self, attrs: &CandidateAttributes, scores: &TraitScores) -> RankedResult {
        let views: Vec<RankedSectorView> = self
            .scorer
            .score_all(scores, &self.config)
            .into_iter()
            .map(|scored| {
                let requirements = self
                    .config
                    .get(&scored.id)
                    .map(|sector| &sector.requirements);
                let verdict = self.evaluator.check(attrs, requirements);
                RankedSectorView {
                    reasons: verdict.reasons(),
                    failed_gates: verdict.failures.iter().map(|failure| failure.gate).collect(),
                    eligible: verdict.eligible,
                    top_traits: scored.top_trait_labels(),
                    id: scored.id,
                    name: scored.name,
                    score: scored.score,
                }
            })
            .collect();

        let (mut eligible, mut ineligible): (Vec<_>, Vec<_>) =
            views.into_iter().partition(|view| view.eligible);
        eligible.sort_by(|a, b| b.score.total_cmp(&a.score));
        eligible.truncate(self.top_n);

        let eligible_cutoff = eligible
            .iter()
            .map(|view| view.score)
            .reduce(f64::min)
            .unwrap_or(0.0);

        ineligible.retain(|view| view.score >= eligible_cutoff);
        ineligible.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            top_eligible = eligible.len(),
            near_miss = ineligible.len(),
            eligible_cutoff,
            "ranked sectors"
        );

        RankedResult {
            top_eligible: eligible,
            near_miss: ineligible,
            eligible_cutoff,
        }
    }
}
