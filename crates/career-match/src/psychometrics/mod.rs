//! Two-channel psychometric scoring: IPIP personality items and situational-judgment items
//! combined into twelve work-style trait scores.

pub mod domain;
pub mod matrix;
pub mod profile;
pub mod questions;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use domain::{Domain, Trait};
pub use profile::{DomainScore, TraitProfile, TraitScore};
pub use questions::{
    AnswerMap, ItemMeta, ItemSpec, Keying, OptionTag, QuestionItem, QuestionType, Section,
    SjtFormat,
};
pub use rules::{exact_match_value, multi_select_value};

use std::collections::BTreeMap;

use matrix::{blend, clamp_percent, project, SJT_ITEM_SCALE};
use tracing::debug;

/// Stateless scorer turning raw answers into a [`TraitProfile`].
///
/// Malformed items are excluded, never reported: partial data still yields a best-effort profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, items: &[QuestionItem], answers: &AnswerMap) -> TraitProfile {
        let mut tally = Tally::default();
        let mut skipped = 0usize;

        for item in items {
            match item.spec() {
                Some(spec) => tally.record(&spec, answers.get(&item.key).map(String::as_str)),
                None => skipped += 1,
            }
        }

        debug!(
            items = items.len(),
            skipped,
            ipip_answered = tally.ipip_count.iter().sum::<u32>(),
            sjt_items = tally.sjt_buckets.iter().map(Vec::len).sum::<usize>(),
            "scored questionnaire"
        );

        tally.into_profile()
    }
}

#[derive(Debug, Default)]
struct Tally {
    ipip_sum: [u32; Domain::COUNT],
    ipip_count: [u32; Domain::COUNT],
    sjt_buckets: [Vec<f64>; Trait::COUNT],
}

impl Tally {
    fn record(&mut self, spec: &ItemSpec, answer: Option<&str>) {
        match spec {
            ItemSpec::Ipip { domain, keying } => {
                // Unanswered or out-of-range Likert answers do not count toward the domain.
                if let Some(likert) = rules::parse_likert(answer) {
                    self.ipip_sum[domain.index()] += u32::from(keying.score(likert));
                    self.ipip_count[domain.index()] += 1;
                }
            }
            ItemSpec::MultiSelect { trait_, tags } => {
                self.sjt_buckets[trait_.index()].push(rules::multi_select_value(tags, answer));
            }
            ItemSpec::Exact {
                trait_,
                correct_value,
                ..
            } => {
                self.sjt_buckets[trait_.index()]
                    .push(rules::exact_match_value(correct_value.as_deref(), answer));
            }
        }
    }

    fn into_profile(self) -> TraitProfile {
        let mut domain_pct = [0.0; Domain::COUNT];
        let mut domains = BTreeMap::new();
        let mut weighted_sum = 0.0;
        let mut total_answered = 0u32;

        for domain in Domain::ordered() {
            let idx = domain.index();
            let answered = self.ipip_count[idx];
            let raw_sum = self.ipip_sum[idx];
            let pct = domain_percent(raw_sum, answered);
            if answered > 0 {
                weighted_sum += pct * f64::from(answered);
                total_answered += answered;
            }
            domain_pct[idx] = pct;
            domains.insert(
                domain,
                DomainScore {
                    raw_sum,
                    answered,
                    pct,
                },
            );
        }

        let ipip_overall = if total_answered > 0 {
            weighted_sum / f64::from(total_answered)
        } else {
            0.0
        };

        let from_ipip = project(&domain_pct);

        let mut traits = BTreeMap::new();
        let mut sjt_items = 0usize;
        let mut sjt_points = 0.0;
        for trait_ in Trait::ordered() {
            let bucket = &self.sjt_buckets[trait_.index()];
            let mean = if bucket.is_empty() {
                0.0
            } else {
                bucket.iter().sum::<f64>() / bucket.len() as f64
            };
            sjt_items += bucket.len();
            sjt_points += bucket.iter().sum::<f64>();

            let from_sjt = clamp_percent(mean * 100.0 / SJT_ITEM_SCALE);
            traits.insert(trait_, TraitScore::new(from_ipip[trait_.index()], from_sjt));
        }

        let sjt_overall = if sjt_items > 0 {
            clamp_percent((sjt_points / sjt_items as f64) * 100.0 / SJT_ITEM_SCALE)
        } else {
            0.0
        };

        TraitProfile {
            domains,
            traits,
            ipip_overall,
            sjt_overall,
            composite: blend(ipip_overall, sjt_overall),
        }
    }
}

/// Maps the summed Likert range `[n, 5n]` onto `0..=100`; zero answered items yields zero.
pub fn domain_percent(raw_sum: u32, answered: u32) -> f64 {
    if answered == 0 {
        return 0.0;
    }
    let n = f64::from(answered);
    clamp_percent(100.0 * (f64::from(raw_sum) - n) / (4.0 * n))
}
