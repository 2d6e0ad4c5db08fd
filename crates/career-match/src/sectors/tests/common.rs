use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::psychometrics::Trait;
use crate::sectors::{
    CandidateAttributes, CatalogEntry, EligibilityEvaluator, GateEntry, RankingCompositor,
    SectorConfig, SectorRequirements, SectorTables, WeightEntry, DEFAULT_ROW_TOLERANCE,
};

/// Lettered answers of a candidate who clears every gate.
pub(super) fn qualified_answers() -> HashMap<String, String> {
    let letters = [
        "G", "F", "A", "A", "A", "A", "A", "D", "D", "D", "A", "C", "A", "A", "A", "A", "A", "A",
        "E", "A", "A", "A", "A", "F",
    ];
    let mut answers: HashMap<String, String> = letters
        .iter()
        .enumerate()
        .map(|(idx, letter)| (format!("gate.Q{}", idx + 1), letter.to_string()))
        .collect();
    answers.insert("gate.Q25_district".to_string(), "pune".to_string());
    answers.insert("gate.Q26_age".to_string(), "30".to_string());
    answers
}

pub(super) fn qualified_attributes() -> CandidateAttributes {
    EligibilityEvaluator::default().derive_attributes(&qualified_answers())
}

pub(super) fn weight_map(row: [f64; Trait::COUNT]) -> BTreeMap<String, f64> {
    Trait::ordered()
        .into_iter()
        .map(|trait_| (trait_.code().to_string(), row[trait_.index()]))
        .collect()
}

/// Row putting all weight on one trait.
pub(super) fn single_trait_row(trait_: Trait) -> [f64; Trait::COUNT] {
    let mut row = [0.0; Trait::COUNT];
    row[trait_.index()] = 1.0;
    row
}

pub(super) fn tables(sectors: &[(&str, [f64; Trait::COUNT], SectorRequirements)]) -> SectorTables {
    SectorTables {
        catalog: sectors
            .iter()
            .map(|(id, _, _)| CatalogEntry {
                id: id.to_string(),
                name: format!("Sector {id}"),
            })
            .collect(),
        gates: sectors
            .iter()
            .map(|(id, _, req)| GateEntry {
                id: id.to_string(),
                req: req.clone(),
            })
            .collect(),
        weights: sectors
            .iter()
            .map(|(id, row, _)| WeightEntry {
                id: id.to_string(),
                weights: weight_map(*row),
            })
            .collect(),
    }
}

pub(super) fn config(sectors: &[(&str, [f64; Trait::COUNT], SectorRequirements)]) -> SectorConfig {
    SectorConfig::from_tables(tables(sectors), DEFAULT_ROW_TOLERANCE).expect("valid sector tables")
}

pub(super) fn compositor(config: SectorConfig, top_n: usize) -> RankingCompositor {
    RankingCompositor::new(Arc::new(config), EligibilityEvaluator::default(), top_n)
}

pub(super) fn needs_night() -> SectorRequirements {
    SectorRequirements {
        needs_night_ok: Some(true),
        ..SectorRequirements::none()
    }
}
