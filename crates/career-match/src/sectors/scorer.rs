use serde::{Deserialize, Serialize};

use super::catalog::SectorConfig;
use super::weights::TraitScores;
use crate::psychometrics::Trait;

/// Fit of one candidate to one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSector {
    pub id: String,
    pub name: String,
    /// `0..=100`, rounded to one decimal.
    pub score: f64,
    /// Heaviest traits of the sector's own weight row, not of the candidate's contribution.
    pub top_traits: Vec<Trait>,
}

impl ScoredSector {
    pub fn top_trait_labels(&self) -> Vec<String> {
        self.top_traits
            .iter()
            .map(|trait_| trait_.label().to_string())
            .collect()
    }
}

/// Weighted-sum scorer over the frozen sector configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorScorer;

impl SectorScorer {
    pub fn new() -> Self {
        Self
    }

    /// Every sector scored and sorted by descending score; ties keep configuration order.
    pub fn score_all(&self, scores: &TraitScores, config: &SectorConfig) -> Vec<ScoredSector> {
        let mut scored: Vec<ScoredSector> = config
            .sectors()
            .iter()
            .map(|sector| ScoredSector {
                id: sector.id.clone(),
                name: sector.name.clone(),
                score: round1(sector.weights.dot(scores)),
                top_traits: sector.top_traits(),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
