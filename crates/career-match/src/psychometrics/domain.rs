use serde::{Deserialize, Serialize};
use std::fmt;

/// Big-Five personality domain measured by the IPIP inventory.
///
/// `EmotionalStability` is the reverse pole of neuroticism; items are keyed so that a
/// higher score always means a more stable respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "ES")]
    EmotionalStability,
}

impl Domain {
    pub const COUNT: usize = 5;

    /// Column order of the projection matrix. Never reorder.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::EmotionalStability,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Openness => 0,
            Self::Conscientiousness => 1,
            Self::Extraversion => 2,
            Self::Agreeableness => 3,
            Self::EmotionalStability => 4,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Openness => "O",
            Self::Conscientiousness => "C",
            Self::Extraversion => "E",
            Self::Agreeableness => "A",
            Self::EmotionalStability => "ES",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness / Intellect",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::EmotionalStability => "Emotional Stability",
        }
    }

    /// Case-insensitive lookup of `"O"`, `"C"`, `"E"`, `"A"`, `"ES"`.
    pub fn from_code(raw: &str) -> Option<Self> {
        let code = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|domain| domain.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Work-style trait scored for sector matching.
///
/// The ordinal position is the only link between the enum and the `T01`..`T12` codes used by
/// the weight tables, so the declaration order is part of the data contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    #[serde(rename = "T01")]
    Safety,
    #[serde(rename = "T02")]
    Teamwork,
    #[serde(rename = "T03")]
    Communication,
    #[serde(rename = "T04")]
    ServiceOrientation,
    #[serde(rename = "T05")]
    ProfessionalDemeanour,
    #[serde(rename = "T06")]
    Compliance,
    #[serde(rename = "T07")]
    Documentation,
    #[serde(rename = "T08")]
    AttentionToDetail,
    #[serde(rename = "T09")]
    Planning,
    #[serde(rename = "T10")]
    Adaptability,
    #[serde(rename = "T11")]
    Deescalation,
    #[serde(rename = "T12")]
    Inclusivity,
}

impl Trait {
    pub const COUNT: usize = 12;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Safety,
            Self::Teamwork,
            Self::Communication,
            Self::ServiceOrientation,
            Self::ProfessionalDemeanour,
            Self::Compliance,
            Self::Documentation,
            Self::AttentionToDetail,
            Self::Planning,
            Self::Adaptability,
            Self::Deescalation,
            Self::Inclusivity,
        ]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Safety => "T01",
            Self::Teamwork => "T02",
            Self::Communication => "T03",
            Self::ServiceOrientation => "T04",
            Self::ProfessionalDemeanour => "T05",
            Self::Compliance => "T06",
            Self::Documentation => "T07",
            Self::AttentionToDetail => "T08",
            Self::Planning => "T09",
            Self::Adaptability => "T10",
            Self::Deescalation => "T11",
            Self::Inclusivity => "T12",
        }
    }

    /// Short label used in "why this sector fits" explanations.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safety => "Safety & Hygiene",
            Self::Teamwork => "Teamwork & Cooperation",
            Self::Communication => "Communication",
            Self::ServiceOrientation => "Service Orientation",
            Self::ProfessionalDemeanour => "Professional Demeanour",
            Self::Compliance => "Compliance & Ethics",
            Self::Documentation => "Documentation",
            Self::AttentionToDetail => "Attention to Detail",
            Self::Planning => "Planning & Self-Mgmt",
            Self::Adaptability => "Adaptability & Learning",
            Self::Deescalation => "De-escalation / Stress",
            Self::Inclusivity => "Inclusivity & Sensitivity",
        }
    }

    /// Accepts `T01`, `T1`, `t6` and similar; rejects anything outside `1..=12`.
    pub fn from_code(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('T')
            .or_else(|| trimmed.strip_prefix('t'))?;
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let ordinal: usize = digits.parse().ok()?;
        ordinal.checked_sub(1).and_then(Self::from_index)
    }

    /// Strict form used by the weight tables: exactly `T` followed by two digits.
    pub fn from_canonical_code(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != 3 || bytes[0] != b'T' {
            return None;
        }
        Self::from_code(raw)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.label())
    }
}
