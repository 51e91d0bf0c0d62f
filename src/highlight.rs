//! Highlight Walker.
//!
//! Walks a linguistic tree in document order and wraps every node of the
//! active granularity in a [`Segment::Unit`] carrying its score and colour.
//! All other nodes flatten into plain text, so the output holds exactly the
//! characters of the input, in order.

use crate::config::HighlightSettings;
use crate::scorer::{Color, Scorer, UnitScore};
use crate::tree::{LinguisticNode, NodeKind};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

/// Node kind that receives one colour.
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
pub enum Granularity {
    Sentence,
    Paragraph,
}

impl Granularity {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Sentence => NodeKind::Sentence,
            Self::Paragraph => NodeKind::Paragraph,
        }
    }

    pub fn matches(&self, node: &LinguisticNode) -> bool {
        node.kind() == self.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { value: String },
    Unit(HighlightedUnit),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedUnit {
    pub granularity: Granularity,
    pub score: UnitScore,
    pub segments: Vec<Segment>,
}

impl HighlightedUnit {
    /// Background colour; `None` for a unit without words.
    pub fn color(&self) -> Option<Color> {
        self.score.color
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        push_segments_text(&self.segments, &mut out);
        out
    }
}

/// Annotated output of one walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlight {
    pub segments: Vec<Segment>,
}

impl Highlight {
    /// Reconstructs the input text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        push_segments_text(&self.segments, &mut out);
        out
    }

    /// Every highlighted unit, in document order.
    pub fn units(&self) -> impl Iterator<Item = &HighlightedUnit> + '_ {
        let mut found = Vec::new();
        collect_units(&self.segments, &mut found);
        found.into_iter()
    }
}

fn push_segments_text(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text { value } => out.push_str(value),
            Segment::Unit(unit) => push_segments_text(&unit.segments, out),
        }
    }
}

fn collect_units<'a>(segments: &'a [Segment], found: &mut Vec<&'a HighlightedUnit>) {
    for segment in segments {
        if let Segment::Unit(unit) = segment {
            found.push(unit);
            collect_units(&unit.segments, found);
        }
    }
}

struct Walker<'a> {
    scorer: &'a Scorer,
    settings: &'a HighlightSettings,
}

impl Walker<'_> {
    fn visit(&self, node: &LinguisticNode, is_root: bool, out: &mut Vec<Segment>) {
        if let Some(value) = node.value() {
            push_text(out, value);
            return;
        }

        // A tokenizer must never emit an empty non-terminal below the root.
        assert!(
            is_root || !node.children().is_empty(),
            "malformed tree: {} node has no children",
            node.kind()
        );

        let granularity = self.settings.granularity;
        if !granularity.matches(node) {
            for child in node.children() {
                self.visit(child, false, out);
            }
            return;
        }

        let score = self.scorer.score_unit(node, self.settings);
        trace!(
            "{} unit: {} words, aggregate {:?}, hue {:?}",
            granularity,
            score.stats.word_count,
            score.aggregate_age,
            score.hue()
        );

        let mut segments = Vec::new();
        for child in node.children() {
            self.visit(child, false, &mut segments);
        }
        out.push(Segment::Unit(HighlightedUnit {
            granularity,
            score,
            segments,
        }));
    }
}

fn push_text(out: &mut Vec<Segment>, value: &str) {
    if let Some(Segment::Text { value: last }) = out.last_mut() {
        last.push_str(value);
    } else {
        out.push(Segment::Text {
            value: value.to_string(),
        });
    }
}

/// Walks `tree` and scores every unit at `settings.granularity`.
///
/// # Panics
///
/// Panics if a non-root non-terminal has no children. Trees from
/// [`LinguisticNode::load_from_file`] are validated before they get here.
pub fn walk(scorer: &Scorer, tree: &LinguisticNode, settings: &HighlightSettings) -> Highlight {
    let walker = Walker { scorer, settings };
    let mut segments = Vec::new();
    walker.visit(tree, true, &mut segments);
    Highlight { segments }
}
