use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{Domain, Trait};

/// Respondent answers keyed by question key. A missing key means "unanswered".
pub type AnswerMap = HashMap<String, String>;

/// Answer widget declared for a question. Unrecognized widgets are kept so the row loads,
/// and are excluded at scoring time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionType {
    Single,
    Multi,
    Text,
    Unrecognized(String),
}

impl QuestionType {
    /// Case-insensitive lookup of `single`, `multi` and `text`.
    pub fn from_key(raw: &str) -> Self {
        let key = raw.trim();
        if key.eq_ignore_ascii_case("single") {
            Self::Single
        } else if key.eq_ignore_ascii_case("multi") {
            Self::Multi
        } else if key.eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Unrecognized(key.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Text => "text",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for QuestionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_key(&raw))
    }
}

/// Question-bank section a scored item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ipip,
    Sjt,
}

impl Section {
    pub fn from_key(raw: &str) -> Option<Self> {
        let key = raw.trim();
        if key.eq_ignore_ascii_case("ipip") {
            Some(Self::Ipip)
        } else if key.eq_ignore_ascii_case("sjt") {
            Some(Self::Sjt)
        } else {
            None
        }
    }
}

/// One active question as supplied by the question bank.
///
/// Every field is lenient: a bank row with unreadable metadata must not poison the whole
/// bank, it is skipped at scoring time instead. A missing `type` skips the widget check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub section: String,
    #[serde(rename = "type", default)]
    pub question_type: Option<QuestionType>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl QuestionItem {
    pub fn section(&self) -> Option<Section> {
        Section::from_key(&self.section)
    }

    /// Resolve the item into a scoreable spec, or `None` when it must be excluded.
    pub fn spec(&self) -> Option<ItemSpec> {
        if self.key.trim().is_empty() {
            return None;
        }
        let section = self.section()?;
        let meta: ItemMeta = match self.meta.as_ref()? {
            serde_json::Value::String(raw) => serde_json::from_str(raw).ok()?,
            value => serde_json::from_value(value.clone()).ok()?,
        };
        ItemSpec::resolve(section, self.question_type.as_ref(), &meta)
    }
}

/// Raw metadata shape. Every field is optional because the relevant subset depends on the
/// item kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMeta {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub keyed: Option<String>,
    #[serde(default)]
    pub scale: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, rename = "trait")]
    pub trait_code: Option<String>,
    #[serde(default)]
    pub tag_by_value: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub correct_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    Positive,
    Negative,
}

impl Keying {
    /// Anything other than an explicit `-` counts as positively keyed.
    fn from_meta(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("-") => Self::Negative,
            _ => Self::Positive,
        }
    }

    pub fn score(self, likert: u8) -> u8 {
        match self {
            Self::Positive => likert,
            Self::Negative => 6 - likert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SjtFormat {
    MultiSelect,
    YesNo,
    SingleBest,
}

impl SjtFormat {
    pub fn from_meta(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MULTI_SELECT" => Some(Self::MultiSelect),
            "YES_NO" => Some(Self::YesNo),
            "SINGLE_BEST" => Some(Self::SingleBest),
            _ => None,
        }
    }
}

/// How a selected option of a multi-select item is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTag {
    /// Expected behaviour.
    Expected,
    /// Acceptable, partially effective behaviour.
    Acceptable,
    /// Counter-productive behaviour.
    Counterproductive,
}

impl OptionTag {
    pub fn from_meta(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "E" => Some(Self::Expected),
            "O" => Some(Self::Acceptable),
            "X" => Some(Self::Counterproductive),
            _ => None,
        }
    }
}

/// Validated, scoreable view of a question item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSpec {
    Ipip {
        domain: Domain,
        keying: Keying,
    },
    MultiSelect {
        trait_: Trait,
        /// Option value (lowercased) to its tag; values with unrecognized tags are dropped.
        tags: BTreeMap<String, OptionTag>,
    },
    Exact {
        trait_: Trait,
        format: SjtFormat,
        correct_value: Option<String>,
    },
}

impl ItemSpec {
    fn resolve(
        section: Section,
        question_type: Option<&QuestionType>,
        meta: &ItemMeta,
    ) -> Option<Self> {
        if matches!(question_type, Some(QuestionType::Unrecognized(_))) {
            return None;
        }
        let is = |expected: QuestionType| question_type.map_or(true, |qt| *qt == expected);
        let is_multi = question_type == Some(&QuestionType::Multi);

        let kind = match meta.kind.as_deref().map(str::trim) {
            Some(kind) if kind.eq_ignore_ascii_case("ipip") => Section::Ipip,
            Some(kind) if kind.eq_ignore_ascii_case("sjt") => Section::Sjt,
            Some(_) => return None,
            None => section,
        };

        match kind {
            Section::Ipip => {
                if !is(QuestionType::Single) {
                    return None;
                }
                let domain = Domain::from_code(meta.domain.as_deref()?)?;
                Some(Self::Ipip {
                    domain,
                    keying: Keying::from_meta(meta.keyed.as_deref()),
                })
            }
            Section::Sjt => {
                let trait_ = Trait::from_code(meta.trait_code.as_deref()?)?;
                match SjtFormat::from_meta(meta.format.as_deref()?)? {
                    SjtFormat::MultiSelect => {
                        if !is(QuestionType::Multi) {
                            return None;
                        }
                        let raw_tags = meta.tag_by_value.as_ref()?;
                        if raw_tags.is_empty() {
                            return None;
                        }
                        let tags = raw_tags
                            .iter()
                            .filter_map(|(value, tag)| {
                                OptionTag::from_meta(tag)
                                    .map(|tag| (value.trim().to_lowercase(), tag))
                            })
                            .collect();
                        Some(Self::MultiSelect { trait_, tags })
                    }
                    format @ (SjtFormat::YesNo | SjtFormat::SingleBest) => {
                        if is_multi {
                            return None;
                        }
                        let correct_value = meta
                            .correct_value
                            .as_deref()
                            .map(str::trim)
                            .filter(|value| !value.is_empty())
                            .map(str::to_string);
                        Some(Self::Exact {
                            trait_,
                            format,
                            correct_value,
                        })
                    }
                }
            }
        }
    }
}
