use std::collections::{BTreeMap, BTreeSet};

use super::matrix::{
    LIKERT_MAX, LIKERT_MIN, SJT_ITEM_SCALE, SJT_POINTS_ACCEPTABLE, SJT_POINTS_COUNTERPRODUCTIVE,
    SJT_POINTS_EXPECTED,
};
use super::questions::OptionTag;

/// Parses a Likert answer, rejecting anything outside `1..=5`.
pub(crate) fn parse_likert(answer: Option<&str>) -> Option<u8> {
    let value: u8 = answer?.trim().parse().ok()?;
    (LIKERT_MIN..=LIKERT_MAX).contains(&value).then_some(value)
}

/// Splits a comma-separated selection into a lowercase, de-duplicated set.
pub(crate) fn split_selection(answer: Option<&str>) -> BTreeSet<String> {
    answer
        .unwrap_or_default()
        .split(',')
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Multi-select item value on the `0..=4` scale.
///
/// Expected options earn 2 points, acceptable ones 1, counter-productive ones cost 1. The sum is
/// floored at zero and divided by the best achievable total for the item.
pub fn multi_select_value(tags: &BTreeMap<String, OptionTag>, answer: Option<&str>) -> f64 {
    let mut expected_total = 0;
    let mut acceptable_total = 0;
    for tag in tags.values() {
        match tag {
            OptionTag::Expected => expected_total += 1,
            OptionTag::Acceptable => acceptable_total += 1,
            OptionTag::Counterproductive => {}
        }
    }

    let denominator =
        SJT_POINTS_EXPECTED * expected_total + SJT_POINTS_ACCEPTABLE * acceptable_total;
    if denominator <= 0 {
        return 0.0;
    }

    let points: i32 = split_selection(answer)
        .iter()
        .filter_map(|value| tags.get(value))
        .map(|tag| match tag {
            OptionTag::Expected => SJT_POINTS_EXPECTED,
            OptionTag::Acceptable => SJT_POINTS_ACCEPTABLE,
            OptionTag::Counterproductive => SJT_POINTS_COUNTERPRODUCTIVE,
        })
        .sum();

    SJT_ITEM_SCALE * f64::from(points.max(0)) / f64::from(denominator)
}

/// Yes/no and single-best item value: full scale on a case-insensitive match, otherwise zero.
pub fn exact_match_value(correct_value: Option<&str>, answer: Option<&str>) -> f64 {
    match (correct_value, answer) {
        (Some(correct), Some(given)) if correct.trim().eq_ignore_ascii_case(given.trim()) => {
            SJT_ITEM_SCALE
        }
        _ => 0.0,
    }
}
