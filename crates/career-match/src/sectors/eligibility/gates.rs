use serde::{Deserialize, Serialize};

use super::super::requirements::SectorRequirements;
use super::attributes::{education_label, CandidateAttributes, TriState};

/// One hard prerequisite a sector may impose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    MinEducation,
    MinAge,
    MinHeight,
    MinLift,
    MaxCommute,
    Standing,
    NightShift,
    Weekend,
    FieldTravel,
    WorkAtHeight,
    Smartphone,
    Documents,
    DrivingLicence,
    TwoWheeler,
    Psara,
    AirportPermit,
    BackgroundCheck,
    EnglishBasic,
    LocalLanguage,
    ComputerBasics,
    NormalVision,
    ColourVision,
    VaccinationProof,
    TypingSpeed,
}

/// Limit a sector sets for a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Threshold {
    AtLeast(u16),
    AtMost(u16),
    Required,
}

/// What the candidate reported for a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    Number(Option<u16>),
    Flag(TriState),
}

impl Observed {
    pub fn is_unknown(self) -> bool {
        match self {
            Observed::Number(value) => value.is_none(),
            Observed::Flag(state) => state.is_unknown(),
        }
    }
}

/// Outcome of comparing a known observation with a threshold.
pub(crate) fn satisfies(threshold: Threshold, observed: Observed) -> Option<bool> {
    match (threshold, observed) {
        (Threshold::AtLeast(min), Observed::Number(Some(value))) => Some(value >= min),
        (Threshold::AtMost(max), Observed::Number(Some(value))) => Some(value <= max),
        (Threshold::Required, Observed::Flag(TriState::Yes)) => Some(true),
        (Threshold::Required, Observed::Flag(TriState::No)) => Some(false),
        (_, observed) if observed.is_unknown() => None,
        // Shape mismatch cannot happen through `Gate`; treat it as a failed check.
        _ => Some(false),
    }
}

fn needs(flag: Option<bool>) -> Option<Threshold> {
    (flag == Some(true)).then_some(Threshold::Required)
}

impl Gate {
    pub const COUNT: usize = 24;

    /// Evaluation order; reason lists follow it.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::MinEducation,
            Self::MinAge,
            Self::MinHeight,
            Self::MinLift,
            Self::MaxCommute,
            Self::Standing,
            Self::NightShift,
            Self::Weekend,
            Self::FieldTravel,
            Self::WorkAtHeight,
            Self::Smartphone,
            Self::Documents,
            Self::DrivingLicence,
            Self::TwoWheeler,
            Self::Psara,
            Self::AirportPermit,
            Self::BackgroundCheck,
            Self::EnglishBasic,
            Self::LocalLanguage,
            Self::ComputerBasics,
            Self::NormalVision,
            Self::ColourVision,
            Self::VaccinationProof,
            Self::TypingSpeed,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::MinEducation => "min_education",
            Self::MinAge => "min_age",
            Self::MinHeight => "min_height",
            Self::MinLift => "min_lift",
            Self::MaxCommute => "max_commute",
            Self::Standing => "standing",
            Self::NightShift => "night_shift",
            Self::Weekend => "weekend",
            Self::FieldTravel => "field_travel",
            Self::WorkAtHeight => "work_at_height",
            Self::Smartphone => "smartphone",
            Self::Documents => "documents",
            Self::DrivingLicence => "driving_licence",
            Self::TwoWheeler => "two_wheeler",
            Self::Psara => "psara",
            Self::AirportPermit => "airport_permit",
            Self::BackgroundCheck => "background_check",
            Self::EnglishBasic => "english_basic",
            Self::LocalLanguage => "local_language",
            Self::ComputerBasics => "computer_basics",
            Self::NormalVision => "normal_vision",
            Self::ColourVision => "colour_vision",
            Self::VaccinationProof => "vaccination_proof",
            Self::TypingSpeed => "typing_speed",
        }
    }

    /// The sector's limit for this gate, or `None` when the sector does not gate on it.
    pub fn threshold(self, req: &SectorRequirements) -> Option<Threshold> {
        match self {
            Self::MinEducation => req.min_edu.map(|level| Threshold::AtLeast(u16::from(level))),
            Self::MinAge => req.min_age.map(Threshold::AtLeast),
            Self::MinHeight => req.min_height_cm.map(Threshold::AtLeast),
            Self::MinLift => req.min_lift_kg.map(Threshold::AtLeast),
            Self::MaxCommute => req.max_commute_km.map(Threshold::AtMost),
            Self::Standing => needs(req.needs_standing_ok),
            Self::NightShift => needs(req.needs_night_ok),
            Self::Weekend => needs(req.needs_weekend_ok),
            Self::FieldTravel => needs(req.needs_field_travel_ok),
            Self::WorkAtHeight => needs(req.needs_work_at_height_ok),
            Self::Smartphone => needs(req.needs_smartphone),
            Self::Documents => needs(req.needs_docs),
            Self::DrivingLicence => needs(req.needs_driving_licence),
            Self::TwoWheeler => needs(req.needs_two_wheeler),
            Self::Psara => needs(req.needs_psara),
            Self::AirportPermit => needs(req.needs_airport_permit),
            Self::BackgroundCheck => needs(req.needs_background_check),
            Self::EnglishBasic => needs(req.needs_english_basic),
            Self::LocalLanguage => needs(req.needs_local_language),
            Self::ComputerBasics => needs(req.needs_computer_basics),
            Self::NormalVision => needs(req.needs_normal_vision),
            Self::ColourVision => needs(req.needs_color_vision_ok),
            Self::VaccinationProof => needs(req.needs_vacc_proof),
            Self::TypingSpeed => req.min_typing_wpm.map(Threshold::AtLeast),
        }
    }

    pub fn observe(self, attrs: &CandidateAttributes) -> Observed {
        match self {
            Self::MinEducation => Observed::Number(attrs.education.map(u16::from)),
            Self::MinAge => Observed::Number(attrs.age),
            Self::MinHeight => Observed::Number(attrs.height_cm),
            Self::MinLift => Observed::Number(attrs.lift_kg),
            Self::MaxCommute => Observed::Number(attrs.commute_km),
            Self::Standing => Observed::Flag(attrs.standing_ok),
            Self::NightShift => Observed::Flag(attrs.night_shift_ok),
            Self::Weekend => Observed::Flag(attrs.weekend_ok),
            Self::FieldTravel => Observed::Flag(attrs.field_travel_ok),
            Self::WorkAtHeight => Observed::Flag(attrs.work_at_height_ok),
            Self::Smartphone => Observed::Flag(attrs.smartphone),
            Self::Documents => Observed::Flag(attrs.has_documents),
            Self::DrivingLicence => Observed::Flag(attrs.has_driving_licence),
            Self::TwoWheeler => Observed::Flag(attrs.has_two_wheeler),
            Self::Psara => Observed::Flag(attrs.has_psara),
            Self::AirportPermit => Observed::Flag(attrs.has_airport_permit),
            Self::BackgroundCheck => Observed::Flag(attrs.background_check_ok),
            Self::EnglishBasic => Observed::Flag(attrs.english_basic),
            Self::LocalLanguage => Observed::Flag(attrs.local_language),
            Self::ComputerBasics => Observed::Flag(attrs.computer_basics),
            Self::NormalVision => Observed::Flag(attrs.normal_vision),
            Self::ColourVision => Observed::Flag(attrs.colour_vision_ok),
            Self::VaccinationProof => Observed::Flag(attrs.vaccination_proof),
            Self::TypingSpeed => Observed::Number(attrs.typing_wpm),
        }
    }

    /// Fixed English wording for a failed gate.
    pub fn describe(self, threshold: Threshold) -> String {
        let limit = match threshold {
            Threshold::AtLeast(value) | Threshold::AtMost(value) => value,
            Threshold::Required => 0,
        };
        match self {
            Self::MinEducation => format!(
                "Min education required: {}",
                education_label(u8::try_from(limit).unwrap_or(u8::MAX))
            ),
            Self::MinAge => format!("Min age required: {limit}"),
            Self::MinHeight => format!("Min height required: {limit} cm"),
            Self::MinLift => format!("Must lift ≥ {limit} kg"),
            Self::MaxCommute => format!("Commute must be ≤ {limit} km"),
            Self::Standing => "Comfortable standing 6-8 hrs".to_string(),
            Self::NightShift => "Night/rotational shifts OK".to_string(),
            Self::Weekend => "Weekend work OK".to_string(),
            Self::FieldTravel => "Field travel OK".to_string(),
            Self::WorkAtHeight => "Work at height with safety gear OK".to_string(),
            Self::Smartphone => "Smartphone for daily work".to_string(),
            Self::Documents => "Standard ID & bank docs ready".to_string(),
            Self::DrivingLicence => "Valid driving licence".to_string(),
            Self::TwoWheeler => "Two-wheeler access".to_string(),
            Self::Psara => "PSARA certification".to_string(),
            Self::AirportPermit => "Airport Entry Permit (AEP)".to_string(),
            Self::BackgroundCheck => "Background check clearance".to_string(),
            Self::EnglishBasic => "Basic English".to_string(),
            Self::LocalLanguage => "Local language (basic+)".to_string(),
            Self::ComputerBasics => "Basic computer skills".to_string(),
            Self::NormalVision => "Normal/adequate vision".to_string(),
            Self::ColourVision => "Normal colour vision".to_string(),
            Self::VaccinationProof => "Vaccination proof".to_string(),
            Self::TypingSpeed => format!("Typing ≥ {limit} WPM"),
        }
    }
}

/// Structured record of a failed gate, renderable by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateFailure {
    pub gate: Gate,
    pub threshold: Threshold,
    pub unknown: bool,
}

impl GateFailure {
    pub fn summary(&self) -> String {
        self.gate.describe(self.threshold)
    }
}
