use crate::lexicon::Lexicon;
use crate::tree::LinguisticNode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Counts gathered from the words of one unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    pub word_count: usize,
    pub syllable_count: usize,
    pub letter_count: usize,

    // Words with 3+ syllables, and those not starting upper-case (Gunning Fog).
    pub polysyllabic_word_count: usize,
    pub complex_polysyllabic_word_count: usize,

    // Distinct case-folded words found in each list.
    pub familiar_word_count: usize,
    pub easy_word_count: usize,

    pub sentence_count: usize,
}

impl UnitStats {
    /// Words outside the easy list (Dale–Chall). Repeats of an easy word
    /// after its first occurrence count here too.
    pub fn difficult_word_count(&self) -> usize {
        self.word_count.saturating_sub(self.easy_word_count)
    }

    /// Words outside the familiar list (Spache), counted the same way.
    pub fn unfamiliar_word_count(&self) -> usize {
        self.word_count.saturating_sub(self.familiar_word_count)
    }

    /// Sentence count as a divisor; never zero.
    pub fn sentences(&self) -> f64 {
        self.sentence_count.max(1) as f64
    }

    pub fn words(&self) -> f64 {
        self.word_count as f64
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[derive(Default)]
struct Accumulator {
    stats: UnitStats,
    familiar_seen: HashSet<String>,
    easy_seen: HashSet<String>,
}

impl Accumulator {
    fn add_word(mut self, value: &str, lexicon: &Lexicon) -> Self {
        let caseless = value.to_lowercase();
        let syllables = lexicon.syllables(value);

        self.stats.word_count += 1;
        self.stats.syllable_count += syllables;
        self.stats.letter_count += value.chars().count();

        // Proper nouns are guessed from the first letter alone, so
        // sentence-initial words and acronyms are misjudged.
        if syllables >= 3 {
            self.stats.polysyllabic_word_count += 1;
            if !value.chars().next().is_some_and(char::is_uppercase) {
                self.stats.complex_polysyllabic_word_count += 1;
            }
        }

        if lexicon.is_familiar(&caseless) && !self.familiar_seen.contains(&caseless) {
            self.familiar_seen.insert(caseless.clone());
            self.stats.familiar_word_count += 1;
        }
        if lexicon.is_easy(&caseless) && !self.easy_seen.contains(&caseless) {
            self.easy_seen.insert(caseless);
            self.stats.easy_word_count += 1;
        }
        self
    }
}

/// Walks the words below `unit` and returns its statistics. Each call is
/// independent; nothing is shared between units.
pub fn collect(unit: &LinguisticNode, lexicon: &Lexicon) -> UnitStats {
    let acc = unit
        .words()
        .fold(Accumulator::default(), |acc, word| acc.add_word(word, lexicon));

    UnitStats {
        sentence_count: unit.sentence_count(),
        ..acc.stats
    }
}
