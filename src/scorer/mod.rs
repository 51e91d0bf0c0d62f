pub mod aggregate;
pub mod color;
pub mod formulas;
pub mod metrics;
pub mod types;

pub use self::aggregate::Average;
pub use self::color::{hue_for, Color};
pub use self::formulas::{Formula, ScoreSet};
pub use self::metrics::UnitStats;
pub use self::types::UnitScore;

use crate::config::{HighlightSettings, HighlightState};
use crate::highlight::{self, Highlight};
use crate::lexicon::Lexicon;
use crate::tree::{self, LinguisticNode};
use tracing::debug;

/// Scoring engine. Holds only the read-only lexicon; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub lexicon: Lexicon,
}

impl Scorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Collect → formulas → aggregate → colour for one unit.
    pub fn score_unit(&self, unit: &LinguisticNode, settings: &HighlightSettings) -> UnitScore {
        let stats = metrics::collect(unit, &self.lexicon);
        let scores = ScoreSet::from_stats(&stats);

        let aggregate_age = scores.map(|s| settings.average.apply(&s.ages));
        let color = aggregate_age.map(|age| {
            Color::from_hue(hue_for(
                age,
                f64::from(settings.target_age),
                settings.scale,
            ))
        });

        UnitScore {
            stats,
            scores,
            aggregate_age,
            color,
        }
    }

    /// Scores the whole tree as one unit, for report summaries.
    pub fn score_document(&self, tree: &LinguisticNode, settings: &HighlightSettings) -> UnitScore {
        let score = self.score_unit(tree, settings);
        debug!(
            "📊 Document: {} words, {} sentences, aggregate {:?}",
            score.stats.word_count, score.stats.sentence_count, score.aggregate_age
        );
        score
    }

    /// Walks an already-parsed tree.
    pub fn highlight(&self, tree: &LinguisticNode, settings: &HighlightSettings) -> Highlight {
        highlight::walk(self, tree, settings)
    }

    /// Full pipeline: parse the snapshot's text, then walk it.
    pub fn highlight_state(&self, state: &HighlightState) -> Highlight {
        let tree = tree::parse(&state.text);
        self.highlight(&tree, &state.settings)
    }
}
