//! Maharashtra district names used by the gating form.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const STATE_CODE: &str = "MH";

pub const DISTRICTS: &[&str] = &[
    "Ahmednagar",
    "Akola",
    "Amravati",
    "Bhandara",
    "Beed",
    "Buldhana",
    "Chandrapur",
    "Chhatrapati Sambhajinagar (Aurangabad)",
    "Dhule",
    "Dharashiv (Osmanabad)",
    "Gadchiroli",
    "Gondia",
    "Hingoli",
    "Jalgaon",
    "Jalna",
    "Kolhapur",
    "Latur",
    "Mumbai City",
    "Mumbai Suburban",
    "Nagpur",
    "Nanded",
    "Nandurbar",
    "Nashik",
    "Palghar",
    "Parbhani",
    "Pune",
    "Raigad",
    "Ratnagiri",
    "Sangli",
    "Satara",
    "Sindhudurg",
    "Solapur",
    "Thane",
    "Wardha",
    "Washim",
    "Yavatmal",
];

static ALIAS_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn alias_map() -> &'static HashMap<&'static str, &'static str> {
    ALIAS_MAP.get_or_init(|| {
        const ALIASES: &[(&str, &str)] = &[
            ("aurangabad", "Chhatrapati Sambhajinagar (Aurangabad)"),
            ("chhatrapati sambhajinagar", "Chhatrapati Sambhajinagar (Aurangabad)"),
            ("c. sambhajinagar", "Chhatrapati Sambhajinagar (Aurangabad)"),
            ("sambhajinagar", "Chhatrapati Sambhajinagar (Aurangabad)"),
            ("osmanabad", "Dharashiv (Osmanabad)"),
            ("dharashiv", "Dharashiv (Osmanabad)"),
            ("gondiya", "Gondia"),
            ("beed (bhir)", "Beed"),
            ("bhir", "Beed"),
            ("ahilyanagar", "Ahmednagar"),
            ("bombay", "Mumbai City"),
            ("poona", "Pune"),
        ];
        ALIASES.iter().copied().collect()
    })
}

fn canonical_match(name: &str) -> Option<&'static str> {
    if let Some(district) = DISTRICTS
        .iter()
        .copied()
        .find(|district| district.eq_ignore_ascii_case(name))
    {
        return Some(district);
    }
    alias_map().get(name.to_lowercase().as_str()).copied()
}

pub fn is_known_district(name: &str) -> bool {
    canonical_match(name.trim()).is_some()
}

/// Canonical display name for a district answer.
///
/// Unmatched input is returned trimmed rather than rejected; blank input is unknown.
pub fn canonicalize_district(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    Some(
        canonical_match(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.to_string()),
    )
}
