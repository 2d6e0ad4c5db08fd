use serde_json::json;

use crate::psychometrics::{AnswerMap, QuestionItem, QuestionType, ScoringEngine, TraitProfile};

pub(super) fn ipip_item(key: &str, domain: &str, keyed: &str) -> QuestionItem {
    QuestionItem {
        key: key.to_string(),
        section: "ipip".to_string(),
        question_type: Some(QuestionType::Single),
        meta: Some(json!({ "kind": "ipip", "domain": domain, "keyed": keyed })),
    }
}

pub(super) fn multi_select_item(key: &str, trait_code: &str, tags: &[(&str, &str)]) -> QuestionItem {
    let tag_by_value: serde_json::Map<String, serde_json::Value> = tags
        .iter()
        .map(|(value, tag)| (value.to_string(), json!(tag)))
        .collect();
    QuestionItem {
        key: key.to_string(),
        section: "sjt".to_string(),
        question_type: Some(QuestionType::Multi),
        meta: Some(json!({
            "kind": "sjt",
            "format": "MULTI_SELECT",
            "trait": trait_code,
            "tagByValue": tag_by_value,
        })),
    }
}

pub(super) fn exact_item(
    key: &str,
    format: &str,
    trait_code: &str,
    correct_value: Option<&str>,
) -> QuestionItem {
    let mut meta = json!({ "kind": "sjt", "format": format, "trait": trait_code });
    if let Some(correct) = correct_value {
        meta["correctValue"] = json!(correct);
    }
    QuestionItem {
        key: key.to_string(),
        section: "sjt".to_string(),
        question_type: Some(QuestionType::Single),
        meta: Some(meta),
    }
}

/// Two positively keyed items per domain.
pub(super) fn balanced_ipip_bank() -> Vec<QuestionItem> {
    ["O", "C", "E", "A", "ES"]
        .iter()
        .flat_map(|domain| {
            (1..=2).map(move |n| ipip_item(&format!("ipip.{domain}{n}"), domain, "+"))
        })
        .collect()
}

pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub(super) fn score(items: &[QuestionItem], answers: &AnswerMap) -> TraitProfile {
    ScoringEngine::new().score(items, answers)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
