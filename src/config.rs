use crate::error::{ReadResult, ReadabilityError};
use crate::highlight::Granularity;
use crate::scorer::aggregate::Average;
use crate::{DEFAULT_AGE, DEFAULT_SCALE, MAX_AGE, MIN_AGE};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-controlled knobs of one highlighting pass.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Reading age the text should suit (5-22).
    #[arg(long, default_value_t = DEFAULT_AGE, value_parser = clap::value_parser!(u8).range(5..=22))]
    pub target_age: u8,

    /// Statistic combining the seven formula ages.
    #[arg(long, value_enum, default_value_t = Average::Median)]
    pub average: Average,

    /// Unit that receives one colour.
    #[arg(long, value_enum, default_value_t = Granularity::Sentence)]
    pub granularity: Granularity,

    /// Years beyond the target age at which a unit is fully red.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            target_age: DEFAULT_AGE,
            average: Average::Median,
            granularity: Granularity::Sentence,
            scale: DEFAULT_SCALE,
        }
    }
}

impl HighlightSettings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: HighlightSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ReadResult<()> {
        let age = f64::from(self.target_age);
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ReadabilityError::Config(format!(
                "target_age {} is outside {}..={}",
                self.target_age, MIN_AGE, MAX_AGE
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ReadabilityError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Copies every setting the user typed on the command line over the
    /// values loaded from a file.
    pub fn merge_from_cli(&mut self, cli_settings: &HighlightSettings, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_settings.$field.clone();
                }
            };
        }

        update_if_present!(target_age, "target_age");
        update_if_present!(average, "average");
        update_if_present!(granularity, "granularity");
        update_if_present!(scale, "scale");
    }
}

/// Optional replacements for the embedded word lists.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconPaths {
    /// Familiar (Spache) words, one or more per line.
    #[arg(global = true, long)]
    pub familiar_words: Option<PathBuf>,

    /// Easy (Dale-Chall) words, one or more per line.
    #[arg(global = true, long)]
    pub easy_words: Option<PathBuf>,
}

/// Immutable snapshot of everything one pipeline run depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightState {
    pub settings: HighlightSettings,
    pub text: String,
}

impl HighlightState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            settings: HighlightSettings::default(),
            text: text.into(),
        }
    }

    pub fn with_settings(mut self, settings: HighlightSettings) -> Self {
        self.settings = settings;
        self
    }
}
