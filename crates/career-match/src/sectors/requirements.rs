use serde::{Deserialize, Serialize};

/// Hard prerequisites of one sector. `None` means the sector has no opinion on that attribute;
/// `Some(false)` on a `needs_*` flag is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectorRequirements {
    pub min_edu: Option<u8>,
    pub min_age: Option<u16>,
    pub min_height_cm: Option<u16>,
    pub min_lift_kg: Option<u16>,
    pub max_commute_km: Option<u16>,

    pub needs_standing_ok: Option<bool>,
    pub needs_night_ok: Option<bool>,
    pub needs_weekend_ok: Option<bool>,
    pub needs_field_travel_ok: Option<bool>,
    pub needs_work_at_height_ok: Option<bool>,

    pub needs_smartphone: Option<bool>,
    pub needs_docs: Option<bool>,
    #[serde(rename = "needsDL")]
    pub needs_driving_licence: Option<bool>,
    #[serde(rename = "needs2W")]
    pub needs_two_wheeler: Option<bool>,
    #[serde(rename = "needsPSARA")]
    pub needs_psara: Option<bool>,
    #[serde(rename = "needsAEP")]
    pub needs_airport_permit: Option<bool>,
    #[serde(rename = "needsBGC")]
    pub needs_background_check: Option<bool>,

    pub needs_english_basic: Option<bool>,
    pub needs_local_language: Option<bool>,
    pub needs_computer_basics: Option<bool>,
    pub needs_normal_vision: Option<bool>,
    pub needs_color_vision_ok: Option<bool>,
    pub needs_vacc_proof: Option<bool>,

    #[serde(rename = "minTypingWPM")]
    pub min_typing_wpm: Option<u16>,
}

impl SectorRequirements {
    /// Requirements that gate nothing.
    pub fn none() -> Self {
        Self::default()
    }
}
