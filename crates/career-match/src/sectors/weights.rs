use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::psychometrics::Trait;

/// Number of top-weighted traits reported per sector.
pub const TOP_TRAIT_COUNT: usize = 3;

/// One sector's weight row, indexed by [`Trait::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitWeights(pub [f64; Trait::COUNT]);

impl TraitWeights {
    pub fn get(&self, trait_: Trait) -> f64 {
        self.0[trait_.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The `n` heaviest traits of this row. Equal weights keep trait order.
    pub fn top_traits(&self, n: usize) -> Vec<Trait> {
        let mut ranked: Vec<Trait> = Trait::ordered().to_vec();
        ranked.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        ranked.truncate(n);
        ranked
    }

    /// Weighted sum of candidate trait scores.
    pub fn dot(&self, scores: &TraitScores) -> f64 {
        Trait::ordered()
            .into_iter()
            .map(|trait_| self.get(trait_) * scores.get(trait_))
            .sum()
    }
}

/// A candidate's twelve final trait scores. Traits without a value count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitScores([f64; Trait::COUNT]);

impl TraitScores {
    pub fn new(values: [f64; Trait::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, trait_: Trait) -> f64 {
        self.0[trait_.index()]
    }

    pub fn values(&self) -> &[f64; Trait::COUNT] {
        &self.0
    }

    pub fn from_traits(scores: &BTreeMap<Trait, f64>) -> Self {
        let mut values = [0.0; Trait::COUNT];
        for (trait_, score) in scores {
            values[trait_.index()] = *score;
        }
        Self(values)
    }

    /// Accepts `T01`..`T12` as well as the short `T1`..`T12` form; other keys are ignored.
    pub fn from_codes<'a, I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let mut values = [0.0; Trait::COUNT];
        for (code, score) in scores {
            if let Some(trait_) = Trait::from_code(code) {
                values[trait_.index()] = *score;
            }
        }
        Self(values)
    }
}
