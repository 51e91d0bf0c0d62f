/// Counts syllables in a single word.
pub trait SyllableCounter: Send + Sync {
    fn syllables(&self, word: &str) -> usize;
}

impl<F> SyllableCounter for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn syllables(&self, word: &str) -> usize {
        self(word)
    }
}

/// Vowel-group heuristic for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSyllables;

impl SyllableCounter for EnglishSyllables {
    fn syllables(&self, word: &str) -> usize {
        count_syllables(word)
    }
}

// Words the vowel-group rules get wrong.
const EXCEPTIONS: &[(&str, usize)] = &[
    ("area", 3),
    ("being", 2),
    ("business", 2),
    ("create", 2),
    ("every", 2),
    ("idea", 3),
    ("lion", 2),
    ("ocean", 2),
    ("poem", 2),
    ("quiet", 2),
    ("science", 2),
    ("video", 3),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Returns 0 for tokens without letters, otherwise at least 1.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if chars.is_empty() {
        return 0;
    }

    let lower: String = chars.iter().collect();
    if let Some(&(_, n)) = EXCEPTIONS.iter().find(|(w, _)| *w == lower) {
        return n;
    }
    if chars.len() <= 3 {
        return 1;
    }

    // 'y' is a vowel only after a consonant ("happy", not "young" or "player").
    let vowel_at = |i: usize| -> bool {
        let c = chars[i];
        if c == 'y' {
            i > 0 && !is_vowel(chars[i - 1])
        } else {
            is_vowel(c)
        }
    };

    let mut count = 0usize;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let v = vowel_at(i);
        if v && !prev_vowel {
            count += 1;
        }
        prev_vowel = v;
    }

    let n = chars.len();
    let last = chars[n - 1];
    let before = chars[n - 2];

    if last == 'e' && !vowel_at(n - 2) {
        // Silent e ("make"), except consonant + "le" ("table").
        let consonant_le = before == 'l' && !vowel_at(n - 3);
        if !consonant_le {
            count = count.saturating_sub(1);
        }
    } else if last == 's' && before == 'e' {
        // "makes" drops the e, "boxes" and "places" keep it.
        let stem = chars[n - 3];
        let voiced = matches!(stem, 's' | 'x' | 'z' | 'c' | 'g')
            || (stem == 'h' && matches!(chars.get(n.wrapping_sub(4)), Some('c') | Some('s')));
        if !voiced && !vowel_at(n - 3) {
            count = count.saturating_sub(1);
        }
    } else if last == 'd' && before == 'e' {
        // "walked" drops the e, "wanted" and "needed" keep it.
        let stem = chars[n - 3];
        if !matches!(stem, 't' | 'd') && !vowel_at(n - 3) {
            count = count.saturating_sub(1);
        }
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words() {
        let cases = [
            ("cat", 1),
            ("make", 1),
            ("table", 2),
            ("happy", 2),
            ("young", 1),
            ("player", 2),
            ("makes", 1),
            ("boxes", 2),
            ("walked", 1),
            ("wanted", 2),
            ("readability", 5),
            ("understand", 3),
            ("government", 3),
            ("Dictionary", 4),
        ];
        for (word, expected) in cases {
            assert_eq!(count_syllables(word), expected, "word: {}", word);
        }
    }

    #[test]
    fn test_non_letters() {
        assert_eq!(count_syllables("1,000"), 0);
        assert_eq!(count_syllables("it’s"), 1);
    }

    #[test]
    fn test_closure_counter() {
        let fixed = |_: &str| 3usize;
        assert_eq!(fixed.syllables("anything"), 3);
    }
}
