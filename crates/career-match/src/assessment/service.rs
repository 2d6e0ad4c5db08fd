use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::repository::{QuestionBank, QuestionBankError};
use crate::config::RankingConfig;
use crate::psychometrics::{AnswerMap, ScoringEngine, TraitProfile};
use crate::sectors::eligibility::missing_gate_answers;
use crate::sectors::{
    CandidateAttributes, EligibilityEvaluator, GatePolicy, RankedResult, RankingCompositor,
    SectorConfig, TraitScores, TOP_TRAIT_COUNT,
};

/// Everything produced for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub profile: TraitProfile,
    pub attributes: CandidateAttributes,
    pub ranking: RankedResult,
}

/// Catalog listing entry with the sector's heaviest traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub id: String,
    pub name: String,
    pub top_traits: Vec<String>,
}

/// Service composing the question bank, scoring engine and ranking over a frozen sector config.
pub struct AssessmentService<Q> {
    bank: Arc<Q>,
    engine: ScoringEngine,
    ranking: RankingCompositor,
    config: Arc<SectorConfig>,
}

impl<Q> AssessmentService<Q>
where
    Q: QuestionBank + 'static,
{
    pub fn new(
        bank: Arc<Q>,
        config: Arc<SectorConfig>,
        policy: GatePolicy,
        ranking: RankingConfig,
    ) -> Self {
        let evaluator = EligibilityEvaluator::new(policy);
        let ranking = RankingCompositor::new(Arc::clone(&config), evaluator, ranking.top_n);
        Self {
            bank,
            engine: ScoringEngine::new(),
            ranking,
            config,
        }
    }

    pub fn with_defaults(bank: Arc<Q>, config: Arc<SectorConfig>) -> Self {
        Self::new(bank, config, GatePolicy::default(), RankingConfig::default())
    }

    pub fn sector_config(&self) -> &SectorConfig {
        &self.config
    }

    /// Score the questionnaire against the active question bank.
    pub fn profile(&self, answers: &AnswerMap) -> Result<TraitProfile, AssessmentError> {
        let items = self.bank.active_items()?;
        Ok(self.engine.score(&items, answers))
    }

    /// Profile plus the gate-aware sector shortlist.
    ///
    /// Refuses to rank while any lettered gating question is unanswered, since every such gap
    /// would otherwise surface as a spurious gate failure.
    pub fn recommend(&self, answers: &AnswerMap) -> Result<Recommendation, AssessmentError> {
        let missing = missing_gate_answers(answers);
        if !missing.is_empty() {
            debug!(missing = missing.len(), "gating answers incomplete");
            return Err(AssessmentError::IncompleteGating { missing });
        }

        let profile = self.profile(answers)?;
        let attributes = self.ranking.evaluator().derive_attributes(answers);
        let scores = TraitScores::from_traits(&profile.final_scores());
        let ranking = self.ranking.build_for(&attributes, &scores);

        Ok(Recommendation {
            profile,
            attributes,
            ranking,
        })
    }

    pub fn sectors(&self) -> Vec<SectorSummary> {
        self.config
            .sectors()
            .iter()
            .map(|sector| SectorSummary {
                id: sector.id.clone(),
                name: sector.name.clone(),
                top_traits: sector
                    .weights
                    .top_traits(TOP_TRAIT_COUNT)
                    .into_iter()
                    .map(|trait_| trait_.label().to_string())
                    .collect(),
            })
            .collect()
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
    #[error("gating answers incomplete: {}", .missing.join(", "))]
    IncompleteGating { missing: Vec<String> },
}
