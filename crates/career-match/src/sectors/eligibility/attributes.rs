use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::super::location::{canonicalize_district, STATE_CODE};

pub const DISTRICT_KEY: &str = "gate.Q25_district";
pub const DISTRICT_FALLBACK_KEY: &str = "gate.DISTRICT";
pub const AGE_KEY: &str = "gate.Q26_age";

/// Number of lettered gating questions (`gate.Q1`..`gate.Q24`).
pub const LETTERED_GATE_QUESTIONS: usize = 24;

pub const MIN_PLAUSIBLE_AGE: u16 = 14;
pub const MAX_PLAUSIBLE_AGE: u16 = 70;

pub fn gate_key(question: usize) -> String {
    format!("gate.Q{question}")
}

/// Lettered gating questions that are absent or blank.
pub fn missing_gate_answers(answers: &HashMap<String, String>) -> Vec<String> {
    (1..=LETTERED_GATE_QUESTIONS)
        .map(gate_key)
        .filter(|key| {
            answers
                .get(key)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true)
        })
        .collect()
}

/// Three-valued answer to a yes/no style gating attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    pub fn from_bool(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

/// Typed facts about a candidate derived from the raw gating answers.
///
/// `None` numerics and `TriState::Unknown` flags mean the answer was missing or unreadable;
/// they are never collapsed into a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    /// Ordinal 0 (no schooling) ..= 6 (post-graduate).
    pub education: Option<u8>,
    pub age: Option<u16>,
    pub height_cm: Option<u16>,
    pub lift_kg: Option<u16>,
    pub commute_km: Option<u16>,
    pub typing_wpm: Option<u16>,

    pub standing_ok: TriState,
    pub night_shift_ok: TriState,
    pub weekend_ok: TriState,
    pub field_travel_ok: TriState,
    pub work_at_height_ok: TriState,

    pub smartphone: TriState,
    pub has_documents: TriState,
    pub has_driving_licence: TriState,
    pub has_two_wheeler: TriState,
    pub has_psara: TriState,
    pub has_airport_permit: TriState,
    pub background_check_ok: TriState,

    pub english_basic: TriState,
    pub local_language: TriState,
    pub computer_basics: TriState,
    pub normal_vision: TriState,
    pub colour_vision_ok: TriState,
    pub vaccination_proof: TriState,
    pub safety_inducted: TriState,

    pub state_code: String,
    pub district: Option<String>,
}

/// Builds [`CandidateAttributes`] from the flat answer map.
pub fn derive_attributes(answers: &HashMap<String, String>) -> CandidateAttributes {
    let choice = |question: usize| -> Option<String> {
        answers
            .get(&gate_key(question))
            .map(|value| value.trim().to_ascii_uppercase())
            .filter(|value| !value.is_empty())
    };
    let pick = |question: usize, table: &[(&str, u16)]| -> Option<u16> {
        let letter = choice(question)?;
        table
            .iter()
            .find(|(candidate, _)| *candidate == letter)
            .map(|(_, value)| *value)
    };
    let flag = |question: usize, yes: &[&str], no: &[&str]| -> TriState {
        match choice(question) {
            Some(letter) if yes.iter().any(|option| *option == letter) => TriState::Yes,
            Some(letter) if no.iter().any(|option| *option == letter) => TriState::No,
            _ => TriState::Unknown,
        }
    };
    let yes_no = |question: usize| flag(question, &["A"], &["B"]);
    // Proficiency scales run A (none) to D (fluent); basic or better counts.
    let basic_or_above = |question: usize| flag(question, &["B", "C", "D"], &["A"]);

    let district = [DISTRICT_KEY, DISTRICT_FALLBACK_KEY]
        .iter()
        .filter_map(|key| answers.get(*key))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| canonicalize_district(value));

    CandidateAttributes {
        education: education_level(choice(1).as_deref()),
        lift_kg: pick(
            2,
            &[("A", 5), ("B", 10), ("C", 15), ("D", 20), ("E", 25), ("F", 30)],
        ),
        standing_ok: yes_no(3),
        night_shift_ok: yes_no(4),
        weekend_ok: yes_no(5),
        commute_km: pick(
            6,
            &[("A", 5), ("B", 10), ("C", 15), ("D", 20), ("E", 30), ("F", 40)],
        ),
        smartphone: yes_no(7),
        computer_basics: basic_or_above(8),
        english_basic: basic_or_above(9),
        local_language: basic_or_above(10),
        has_documents: flag(11, &["A", "B"], &["C"]),
        // A: none, B: learner's permit; only C..E are valid licence classes.
        has_driving_licence: flag(12, &["C", "D", "E"], &["A", "B"]),
        has_two_wheeler: yes_no(13),
        has_psara: flag(14, &["A", "B"], &["C"]),
        has_airport_permit: flag(15, &["A"], &["B", "C"]),
        background_check_ok: flag(16, &["A"], &["B", "C"]),
        normal_vision: flag(17, &["A"], &["B", "C"]),
        colour_vision_ok: flag(18, &["A"], &["B", "C"]),
        height_cm: pick(
            19,
            &[("A", 150), ("B", 155), ("C", 160), ("D", 165), ("E", 170)],
        ),
        vaccination_proof: flag(20, &["A", "B"], &["C"]),
        safety_inducted: yes_no(21),
        field_travel_ok: yes_no(22),
        work_at_height_ok: yes_no(23),
        typing_wpm: pick(
            24,
            &[("A", 10), ("B", 20), ("C", 30), ("D", 40), ("E", 55), ("F", 65)],
        ),
        age: parse_age(answers.get(AGE_KEY).map(String::as_str)),
        state_code: STATE_CODE.to_string(),
        district,
    }
}

/// Education choice `A`..`G` as ordinal `0..=6`.
fn education_level(letter: Option<&str>) -> Option<u8> {
    match letter?.as_bytes() {
        [byte @ b'A'..=b'G'] => Some(byte - b'A'),
        _ => None,
    }
}

/// Free-text age in years; values outside the plausible working range are discarded.
pub fn parse_age(raw: Option<&str>) -> Option<u16> {
    let age: u16 = raw?.trim().parse().ok()?;
    (MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE)
        .contains(&age)
        .then_some(age)
}

pub fn education_label(level: u8) -> String {
    match level {
        0 => "No schooling".to_string(),
        1 => "8th".to_string(),
        2 => "10th".to_string(),
        3 => "12th".to_string(),
        4 => "Diploma/ITI".to_string(),
        5 => "Graduate".to_string(),
        6 => "Post-grad+".to_string(),
        other => other.to_string(),
    }
}
