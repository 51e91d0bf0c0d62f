//! The seven readability formulas and their conversions to a reading age.
//!
//! Each formula maps [`UnitStats`] to its native scale (a U.S. grade level,
//! or a raw score for Flesch and SMOG). A converter then maps that onto one
//! shared "reading age" axis, and the age is clamped to
//! [`MIN_AGE`]..=[`MAX_AGE`] before it leaves this module.

use super::metrics::UnitStats;
use crate::{MAX_AGE, MIN_AGE};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    EnumCountMacro,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    AutomatedReadability,
    ColemanLiau,
    DaleChall,
    Flesch,
    GunningFog,
    Smog,
    Spache,
}

impl Formula {
    /// Column header used in reports.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::AutomatedReadability => "ARI",
            Self::ColemanLiau => "CL",
            Self::DaleChall => "DC",
            Self::Flesch => "Flesch",
            Self::GunningFog => "Fog",
            Self::Smog => "SMOG",
            Self::Spache => "Spache",
        }
    }

    /// Native score for the unit (Dale–Chall reports its band's grade).
    /// Callers must not pass a zero-word unit.
    pub fn raw(&self, stats: &UnitStats) -> f64 {
        match self {
            Self::AutomatedReadability => automated_readability(stats),
            Self::ColemanLiau => coleman_liau(stats),
            Self::DaleChall => dale_chall_grade(dale_chall(stats)),
            Self::Flesch => flesch(stats),
            Self::GunningFog => gunning_fog(stats),
            Self::Smog => smog(stats),
            Self::Spache => spache(stats),
        }
    }

    /// Converts a native score into an unclamped reading age.
    pub fn to_age(&self, raw: f64) -> f64 {
        match self {
            Self::Flesch => flesch_to_age(raw),
            Self::Smog => smog_to_age(raw),
            _ => grade_to_age(raw),
        }
    }

    /// Clamped reading age of a native score.
    pub fn clamped_age(&self, raw: f64) -> f64 {
        clamp_age(self.to_age(raw))
    }

    pub fn age(&self, stats: &UnitStats) -> f64 {
        self.clamped_age(self.raw(stats))
    }
}

pub fn automated_readability(s: &UnitStats) -> f64 {
    4.71 * (s.letter_count as f64 / s.words()) + 0.5 * (s.words() / s.sentences()) - 21.43
}

pub fn coleman_liau(s: &UnitStats) -> f64 {
    0.0588 * 100.0 * (s.letter_count as f64 / s.words())
        - 0.296 * 100.0 * (s.sentences() / s.words())
        - 15.8
}

/// Raw Dale–Chall score; see [`dale_chall_grade`] for the grade lookup.
pub fn dale_chall(s: &UnitStats) -> f64 {
    let difficult = s.difficult_word_count() as f64 / s.words();
    let mut score = 0.1579 * difficult * 100.0 + 0.0496 * (s.words() / s.sentences());
    if difficult > 0.05 {
        score += 3.6365;
    }
    score
}

/// Upper grade of the Dale–Chall band the raw score falls in. The top band
/// is open-ended.
pub fn dale_chall_grade(score: f64) -> f64 {
    match score.floor() {
        s if s < 5.0 => 4.0,
        s if s < 6.0 => 6.0,
        s if s < 7.0 => 8.0,
        s if s < 8.0 => 10.0,
        s if s < 9.0 => 12.0,
        s if s < 10.0 => 15.0,
        _ => f64::INFINITY,
    }
}

pub fn flesch(s: &UnitStats) -> f64 {
    206.835 - 1.015 * (s.words() / s.sentences()) - 84.6 * (s.syllable_count as f64 / s.words())
}

pub fn gunning_fog(s: &UnitStats) -> f64 {
    0.4 * (s.words() / s.sentences()
        + 100.0 * (s.complex_polysyllabic_word_count as f64 / s.words()))
}

pub fn smog(s: &UnitStats) -> f64 {
    1.043 * (s.polysyllabic_word_count as f64 * (30.0 / s.sentences())).sqrt() + 3.1291
}

pub fn spache(s: &UnitStats) -> f64 {
    0.659
        + 0.121 * (s.words() / s.sentences())
        + 0.082 * 100.0 * (s.unfamiliar_word_count() as f64 / s.words())
}

/// Grade `g` is typically started at age `g + 5` in the U.S.
pub fn grade_to_age(grade: f64) -> f64 {
    // Half-up rounding.
    (grade + 5.0 + 0.5).floor()
}

pub fn flesch_to_age(score: f64) -> f64 {
    20.0 - (score / 10.0).floor()
}

pub fn smog_to_age(score: f64) -> f64 {
    (score.sqrt() + 2.5).ceil()
}

pub fn clamp_age(age: f64) -> f64 {
    if age.is_nan() {
        MIN_AGE
    } else {
        age.clamp(MIN_AGE, MAX_AGE)
    }
}

/// Native scores and clamped ages of all seven formulas for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub raw: [f64; Formula::COUNT],
    pub ages: [f64; Formula::COUNT],
}

impl ScoreSet {
    /// `None` for a unit without words; the formulas are undefined there.
    pub fn from_stats(stats: &UnitStats) -> Option<Self> {
        if stats.is_empty() {
            return None;
        }

        let mut raw = [0.0; Formula::COUNT];
        let mut ages = [0.0; Formula::COUNT];
        for (i, formula) in Formula::iter().enumerate() {
            raw[i] = formula.raw(stats);
            ages[i] = formula.clamped_age(raw[i]);
        }
        Some(Self { raw, ages })
    }

    pub fn age(&self, formula: Formula) -> f64 {
        self.ages[formula as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Formula, f64, f64)> + '_ {
        Formula::iter()
            .zip(self.raw.iter().zip(self.ages.iter()))
            .map(|(f, (&raw, &age))| (f, raw, age))
    }
}
