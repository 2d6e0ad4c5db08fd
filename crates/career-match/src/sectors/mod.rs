//! Sector side of matching: gate checks, weighted fit scores and the ranked shortlist.

pub mod catalog;
pub mod eligibility;
pub mod location;
pub mod ranking;
pub mod requirements;
pub mod scorer;
pub mod weights;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogEntry, GateEntry, SectorConfig, SectorConfigError, SectorDefinition, SectorTables,
    ValidationReport, WeightEntry, DEFAULT_ROW_TOLERANCE,
};
pub use eligibility::{
    CandidateAttributes, EligibilityEvaluator, EligibilityVerdict, Gate, GateFailure, GatePolicy,
    Threshold, TriState, UnknownPolicy,
};
pub use ranking::{RankedResult, RankedSectorView, RankingCompositor, DEFAULT_TOP_N};
pub use requirements::SectorRequirements;
pub use scorer::{round1, ScoredSector, SectorScorer};
pub use weights::{TraitScores, TraitWeights, TOP_TRAIT_COUNT};
