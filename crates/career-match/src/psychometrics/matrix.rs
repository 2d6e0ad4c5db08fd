//! Scoring policy constants and the fixed OCEAN to work-style projection.

use super::domain::{Domain, Trait};

/// Weight of the personality inventory in the blended trait score.
pub const IPIP_BLEND_WEIGHT: f64 = 0.60;
/// Weight of the situational-judgment channel in the blended trait score.
pub const SJT_BLEND_WEIGHT: f64 = 0.40;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Per-item ceiling of the situational-judgment scale (items score `0..=4`).
pub const SJT_ITEM_SCALE: f64 = 4.0;

pub const SJT_POINTS_EXPECTED: i32 = 2;
pub const SJT_POINTS_ACCEPTABLE: i32 = 1;
pub const SJT_POINTS_COUNTERPRODUCTIVE: i32 = -1;

/// Rows follow `Trait::ordered()`, columns follow `Domain::ordered()` (O, C, E, A, ES).
///
/// Rows are non-negative but do not all sum to one.
pub const OCEAN_TO_TRAIT: [[f64; Domain::COUNT]; Trait::COUNT] = [
    /* T01 Safety                 */ [0.0, 0.6, 0.0, 0.0, 0.4],
    /* T02 Teamwork               */ [0.0, 0.0, 0.4, 0.6, 0.0],
    /* T03 Communication          */ [0.0, 0.3, 0.7, 0.0, 0.0],
    /* T04 Service orientation    */ [0.0, 0.4, 0.0, 0.6, 0.0],
    /* T05 Professional demeanour */ [0.0, 0.6, 0.0, 0.0, 0.4],
    /* T06 Compliance             */ [0.0, 0.7, 0.0, 0.3, 0.0],
    /* T07 Documentation          */ [0.2, 0.8, 0.0, 0.0, 0.0],
    /* T08 Attention to detail    */ [0.2, 0.8, 0.0, 0.0, 0.0],
    /* T09 Planning               */ [0.0, 0.8, 0.0, 0.0, 0.2],
    /* T10 Adaptability           */ [0.8, 0.2, 0.0, 0.0, 0.0],
    /* T11 De-escalation          */ [0.0, 0.0, 0.0, 0.3, 0.7],
    /* T12 Inclusivity            */ [0.3, 0.0, 0.0, 0.7, 0.0],
];

pub fn projection_row(trait_: Trait) -> &'static [f64; Domain::COUNT] {
    &OCEAN_TO_TRAIT[trait_.index()]
}

/// Projects normalized domain percentages onto the twelve traits, clamped to `0..=100`.
pub fn project(domain_pct: &[f64; Domain::COUNT]) -> [f64; Trait::COUNT] {
    let mut out = [0.0; Trait::COUNT];
    for trait_ in Trait::ordered() {
        let row = projection_row(trait_);
        let sum: f64 = row
            .iter()
            .zip(domain_pct.iter())
            .map(|(weight, pct)| weight * pct)
            .sum();
        out[trait_.index()] = clamp_percent(sum);
    }
    out
}

pub fn blend(ipip: f64, sjt: f64) -> f64 {
    clamp_percent(IPIP_BLEND_WEIGHT * ipip + SJT_BLEND_WEIGHT * sjt)
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
