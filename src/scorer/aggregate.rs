use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter, EnumString};

/// Statistic used to fold the seven formula ages into one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    Mean,
    Median,
    Mode,
}

impl Average {
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Self::Mean => mean(values),
            Self::Median => median(values),
            Self::Mode => mode_mean(values),
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Middle value; the mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> f64 {
    let v = sorted(values);
    let mid = v.len() / 2;
    if v.len() % 2 == 1 {
        v[mid]
    } else {
        (v[mid - 1] + v[mid]) / 2.0
    }
}

/// Every value sharing the highest frequency, in ascending order.
pub fn modes(values: &[f64]) -> Vec<f64> {
    let v = sorted(values);
    let mut best = 0;
    let mut found = Vec::new();

    let mut i = 0;
    while i < v.len() {
        let run = v[i..]
            .iter()
            .take_while(|x| x.total_cmp(&v[i]) == Ordering::Equal)
            .count();
        match run.cmp(&best) {
            Ordering::Greater => {
                best = run;
                found = vec![v[i]];
            }
            Ordering::Equal => found.push(v[i]),
            Ordering::Less => {}
        }
        i += run;
    }
    found
}

/// Mode, with ties between equally frequent values broken by averaging them.
pub fn mode_mean(values: &[f64]) -> f64 {
    mean(&modes(values))
}
