use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::super::domain::CollegeLevel;

pub const SCORE_FLOOR: i32 = 0;
pub const SCORE_CEILING: i32 = 100;

/// One score per target tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "D1")]
    pub d1: i32,
    #[serde(rename = "D2")]
    pub d2: i32,
    #[serde(rename = "D3")]
    pub d3: i32,
    #[serde(rename = "NAIA")]
    pub naia: i32,
    #[serde(rename = "JUCO")]
    pub juco: i32,
}

impl ScoreVector {
    pub const fn new(d1: i32, d2: i32, d3: i32, naia: i32, juco: i32) -> Self {
        Self {
            d1,
            d2,
            d3,
            naia,
            juco,
        }
    }

    pub const fn get(&self, level: CollegeLevel) -> i32 {
        match level {
            CollegeLevel::D1 => self.d1,
            CollegeLevel::D2 => self.d2,
            CollegeLevel::D3 => self.d3,
            CollegeLevel::Naia => self.naia,
            CollegeLevel::Juco => self.juco,
        }
    }

    pub fn map(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self {
            d1: f(self.d1),
            d2: f(self.d2),
            d3: f(self.d3),
            naia: f(self.naia),
            juco: f(self.juco),
        }
    }

    /// Bounds every tier into `[0, 100]`.
    pub fn clamped(self) -> Self {
        self.map(|score| score.clamp(SCORE_FLOOR, SCORE_CEILING))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CollegeLevel, i32)> + '_ {
        CollegeLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

impl Add for ScoreVector {
    type Output = ScoreVector;

    fn add(self, rhs: ScoreVector) -> ScoreVector {
        ScoreVector {
            d1: self.d1 + rhs.d1,
            d2: self.d2 + rhs.d2,
            d3: self.d3 + rhs.d3,
            naia: self.naia + rhs.naia,
            juco: self.juco + rhs.juco,
        }
    }
}
