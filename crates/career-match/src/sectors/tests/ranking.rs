use super::common::*;
use crate::psychometrics::Trait;
use crate::sectors::{Gate, RankedResult, SectorRequirements, TraitScores};

/// Scores chosen so each single-trait sector lands on a distinct value.
fn spread_scores() -> TraitScores {
    let mut values = [0.0; Trait::COUNT];
    for trait_ in Trait::ordered() {
        values[trait_.index()] = 90.0 - 5.0 * trait_.index() as f64;
    }
    TraitScores::new(values)
}

fn night_blocked_answers() -> std::collections::HashMap<String, String> {
    let mut answers = qualified_answers();
    answers.insert("gate.Q4".to_string(), "B".to_string());
    answers
}

fn assert_near_miss_invariants(result: &RankedResult) {
    for view in &result.near_miss {
        assert!(!view.eligible);
        assert!(view.score >= result.eligible_cutoff);
        assert!(!view.reasons.is_empty());
        assert!(result
            .top_eligible
            .iter()
            .all(|eligible| eligible.id != view.id));
    }
    for pair in result.near_miss.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn fewer_eligible_sectors_than_n_returns_them_all() {
    let compositor = compositor(
        config(&[
            ("safety", single_trait_row(Trait::Safety), needs_night()),
            ("team", single_trait_row(Trait::Teamwork), SectorRequirements::none()),
            ("talk", single_trait_row(Trait::Communication), SectorRequirements::none()),
        ]),
        5,
    );

    let result = compositor.build(&night_blocked_answers(), &spread_scores());

    let ids: Vec<&str> = result.top_eligible.iter().map(|view| view.id.as_str()).collect();
    assert_eq!(ids, vec!["team", "talk"]);
    assert_eq!(result.eligible_cutoff, 80.0);
    assert_eq!(result.near_miss.len(), 1);
    assert_eq!(result.near_miss[0].id, "safety");
    assert_eq!(result.near_miss[0].score, 90.0);
    assert_eq!(result.near_miss[0].reasons, vec!["Night/rotational shifts OK".to_string()]);
    assert_eq!(result.near_miss[0].failed_gates, vec![Gate::NightShift]);
    assert_near_miss_invariants(&result);
}

#[test]
fn top_list_is_truncated_to_n_and_sets_the_cutoff() {
    let sectors: Vec<(String, Trait)> = Trait::ordered()
        .into_iter()
        .map(|trait_| (format!("s{}", trait_.code()), trait_))
        .collect();
    let rows: Vec<(&str, [f64; Trait::COUNT], SectorRequirements)> = sectors
        .iter()
        .map(|(id, trait_)| {
            let req = if trait_.index() % 2 == 0 {
                needs_night()
            } else {
                SectorRequirements::none()
            };
            (id.as_str(), single_trait_row(*trait_), req)
        })
        .collect();
    let compositor = compositor(config(&rows), 3);

    let result = compositor.build(&night_blocked_answers(), &spread_scores());

    // Eligible sectors are the odd ordinals: T02 85, T04 75, T06 65, ...
    let scores: Vec<f64> = result.top_eligible.iter().map(|view| view.score).collect();
    assert_eq!(scores, vec![85.0, 75.0, 65.0]);
    assert_eq!(result.eligible_cutoff, 65.0);
    // Ineligible even ordinals at or above 65: T01 90, T03 80, T05 70.
    let near: Vec<f64> = result.near_miss.iter().map(|view| view.score).collect();
    assert_eq!(near, vec![90.0, 80.0, 70.0]);
    assert_near_miss_invariants(&result);
}

#[test]
fn no_eligible_sector_puts_every_sector_in_near_miss() {
    let compositor = compositor(
        config(&[
            ("a", single_trait_row(Trait::Safety), needs_night()),
            ("b", single_trait_row(Trait::Teamwork), needs_night()),
            ("c", single_trait_row(Trait::Inclusivity), needs_night()),
        ]),
        5,
    );

    let result = compositor.build(&night_blocked_answers(), &spread_scores());

    assert!(result.top_eligible.is_empty());
    assert_eq!(result.eligible_cutoff, 0.0);
    let ids: Vec<&str> = result.near_miss.iter().map(|view| view.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_near_miss_invariants(&result);
}

#[test]
fn near_miss_is_not_capped() {
    let sectors: Vec<String> = (0..Trait::COUNT).map(|idx| format!("blocked-{idx}")).collect();
    let rows: Vec<(&str, [f64; Trait::COUNT], SectorRequirements)> = sectors
        .iter()
        .map(|id| (id.as_str(), single_trait_row(Trait::Safety), needs_night()))
        .chain(std::iter::once((
            "open",
            single_trait_row(Trait::Inclusivity),
            SectorRequirements::none(),
        )))
        .collect();
    let compositor = compositor(config(&rows), 1);

    let result = compositor.build(&night_blocked_answers(), &spread_scores());

    assert_eq!(result.top_eligible.len(), 1);
    assert_eq!(result.eligible_cutoff, 35.0);
    assert_eq!(result.near_miss.len(), Trait::COUNT);
    assert_near_miss_invariants(&result);
}

#[test]
fn top_n_below_one_is_raised_to_one() {
    let compositor = compositor(
        config(&[
            ("a", single_trait_row(Trait::Safety), SectorRequirements::none()),
            ("b", single_trait_row(Trait::Teamwork), SectorRequirements::none()),
        ]),
        0,
    );

    assert_eq!(compositor.top_n(), 1);
    let result = compositor.build(&qualified_answers(), &spread_scores());
    assert_eq!(result.top_eligible.len(), 1);
    assert_eq!(result.top_eligible[0].id, "a");
    assert!(result.near_miss.is_empty());
}

#[test]
fn views_carry_top_trait_labels() {
    let compositor = compositor(
        config(&[("a", single_trait_row(Trait::Planning), SectorRequirements::none())]),
        5,
    );

    let result = compositor.build(&qualified_answers(), &spread_scores());

    let view = &result.top_eligible[0];
    assert!(view.eligible);
    assert!(view.reasons.is_empty());
    assert_eq!(view.top_traits[0], "Planning & Self-Mgmt");
    assert_eq!(view.top_traits.len(), 3);
}
