use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::{
    assessment_router, AssessmentService, QuestionBank, QuestionBankError, StaticQuestionBank,
};
use crate::config::RankingConfig;
use crate::psychometrics::{QuestionItem, QuestionType, Trait};
use crate::sectors::{
    CatalogEntry, GateEntry, GatePolicy, SectorConfig, SectorRequirements, SectorTables,
    WeightEntry, DEFAULT_ROW_TOLERANCE,
};

pub(super) fn question_items() -> Vec<QuestionItem> {
    vec![
        QuestionItem {
            key: "ipip.c1".to_string(),
            section: "ipip".to_string(),
            question_type: Some(QuestionType::Single),
            meta: Some(json!({ "kind": "ipip", "domain": "C", "keyed": "+" })),
        },
        QuestionItem {
            key: "ipip.a1".to_string(),
            section: "ipip".to_string(),
            question_type: Some(QuestionType::Single),
            meta: Some(json!({ "kind": "ipip", "domain": "A", "keyed": "-" })),
        },
        QuestionItem {
            key: "sjt.sop".to_string(),
            section: "sjt".to_string(),
            question_type: Some(QuestionType::Single),
            meta: Some(json!({ "kind": "sjt", "format": "YES_NO", "trait": "T06", "correctValue": "B" })),
        },
    ]
}

fn weights(pairs: &[(Trait, f64)]) -> std::collections::BTreeMap<String, f64> {
    Trait::ordered()
        .into_iter()
        .map(|trait_| {
            let weight = pairs
                .iter()
                .find(|(candidate, _)| *candidate == trait_)
                .map(|(_, weight)| *weight)
                .unwrap_or(0.0);
            (trait_.code().to_string(), weight)
        })
        .collect()
}

pub(super) fn sector_config() -> SectorConfig {
    let tables = SectorTables {
        catalog: vec![
            CatalogEntry {
                id: "back_office".to_string(),
                name: "Back Office".to_string(),
            },
            CatalogEntry {
                id: "security".to_string(),
                name: "Security Services".to_string(),
            },
        ],
        gates: vec![
            GateEntry {
                id: "back_office".to_string(),
                req: SectorRequirements {
                    min_edu: Some(3),
                    ..SectorRequirements::none()
                },
            },
            GateEntry {
                id: "security".to_string(),
                req: SectorRequirements {
                    needs_psara: Some(true),
                    min_height_cm: Some(160),
                    ..SectorRequirements::none()
                },
            },
        ],
        weights: vec![
            WeightEntry {
                id: "back_office".to_string(),
                weights: weights(&[(Trait::Compliance, 0.6), (Trait::Planning, 0.4)]),
            },
            WeightEntry {
                id: "security".to_string(),
                weights: weights(&[(Trait::Safety, 0.5), (Trait::Deescalation, 0.5)]),
            },
        ],
    };
    SectorConfig::from_tables(tables, DEFAULT_ROW_TOLERANCE).expect("valid sector tables")
}

pub(super) fn build_service() -> AssessmentService<StaticQuestionBank> {
    AssessmentService::new(
        Arc::new(StaticQuestionBank::new(question_items())),
        Arc::new(sector_config()),
        GatePolicy::default(),
        RankingConfig::new(5),
    )
}

/// Complete gating answers: 12th pass, 155 cm, no PSARA.
pub(super) fn complete_answers() -> HashMap<String, String> {
    let mut answers: HashMap<String, String> = (1..=24)
        .map(|question| (format!("gate.Q{question}"), "A".to_string()))
        .collect();
    answers.insert("gate.Q1".to_string(), "D".to_string());
    answers.insert("gate.Q14".to_string(), "C".to_string());
    answers.insert("gate.Q19".to_string(), "B".to_string());
    answers.insert("ipip.c1".to_string(), "5".to_string());
    answers.insert("ipip.a1".to_string(), "2".to_string());
    answers.insert("sjt.sop".to_string(), "b".to_string());
    answers
}

pub(super) struct UnavailableBank;

impl QuestionBank for UnavailableBank {
    fn active_items(&self) -> Result<Vec<QuestionItem>, QuestionBankError> {
        Err(QuestionBankError::Unavailable("bank offline".to_string()))
    }
}

pub(super) fn unavailable_service() -> AssessmentService<UnavailableBank> {
    AssessmentService::with_defaults(Arc::new(UnavailableBank), Arc::new(sector_config()))
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(build_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
