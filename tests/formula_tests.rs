use readability::scorer::formulas::{
    clamp_age, dale_chall_grade, flesch_to_age, grade_to_age, smog_to_age,
};
use readability::scorer::{Average, Formula, ScoreSet, UnitStats};
use rstest::rstest;
use strum::IntoEnumIterator;

// Ten words in one sentence: one lower-case polysyllable, two unfamiliar
// words, one difficult word.
fn plain_sentence() -> UnitStats {
    UnitStats {
        word_count: 10,
        syllable_count: 14,
        letter_count: 45,
        polysyllabic_word_count: 1,
        complex_polysyllabic_word_count: 1,
        familiar_word_count: 8,
        easy_word_count: 9,
        sentence_count: 1,
    }
}

#[rstest]
#[case(Formula::AutomatedReadability, 4.765, 10.0)]
#[case(Formula::ColemanLiau, 7.7, 13.0)]
#[case(Formula::DaleChall, 6.0, 11.0)]
#[case(Formula::Flesch, 78.245, 13.0)]
#[case(Formula::GunningFog, 8.0, 13.0)]
#[case(Formula::Smog, 8.8418, 6.0)]
#[case(Formula::Spache, 3.509, 9.0)]
fn test_formula_raw_and_age(#[case] formula: Formula, #[case] raw: f64, #[case] age: f64) {
    let stats = plain_sentence();
    assert!(
        (formula.raw(&stats) - raw).abs() < 1e-3,
        "{} raw was {}",
        formula,
        formula.raw(&stats)
    );
    assert_eq!(formula.age(&stats), age, "{} age", formula);
}

#[test]
fn test_score_set_order_and_aggregates() {
    let scores = ScoreSet::from_stats(&plain_sentence()).unwrap();
    assert_eq!(scores.ages, [10.0, 13.0, 11.0, 13.0, 13.0, 6.0, 9.0]);
    assert_eq!(scores.age(Formula::Smog), 6.0);

    assert_eq!(Average::Median.apply(&scores.ages), 11.0);
    assert_eq!(Average::Mode.apply(&scores.ages), 13.0);
    assert!((Average::Mean.apply(&scores.ages) - 75.0 / 7.0).abs() < 1e-9);

    let formulas: Vec<Formula> = scores.iter().map(|(f, _, _)| f).collect();
    assert_eq!(formulas, Formula::iter().collect::<Vec<_>>());
}

#[test]
fn test_score_set_matches_per_formula_ages() {
    let pathological = UnitStats {
        word_count: 1,
        syllable_count: 500,
        letter_count: 2000,
        sentence_count: 1,
        ..Default::default()
    };
    for stats in [plain_sentence(), pathological] {
        let scores = ScoreSet::from_stats(&stats).unwrap();
        for (formula, raw, age) in scores.iter() {
            assert_eq!(raw, formula.raw(&stats), "{} raw", formula);
            assert_eq!(age, formula.age(&stats), "{} age", formula);
            assert_eq!(age, formula.clamped_age(raw), "{} clamped", formula);
        }
    }
}

#[test]
fn test_zero_words_are_not_scored() {
    assert!(ScoreSet::from_stats(&UnitStats::default()).is_none());
    let punctuation_only = UnitStats {
        sentence_count: 1,
        ..Default::default()
    };
    assert!(ScoreSet::from_stats(&punctuation_only).is_none());
}

#[rstest]
#[case(6.4, 11.0)]
#[case(6.5, 12.0)]
#[case(0.0, 5.0)]
#[case(-10.0, -5.0)]
fn test_grade_to_age_rounds_half_up(#[case] grade: f64, #[case] age: f64) {
    assert_eq!(grade_to_age(grade), age);
}

#[rstest]
#[case(100.0, 10.0)]
#[case(65.0, 14.0)]
#[case(5.0, 20.0)]
#[case(-5.0, 21.0)]
fn test_flesch_to_age(#[case] score: f64, #[case] age: f64) {
    assert_eq!(flesch_to_age(score), age);
}

#[rstest]
#[case(4.0, 5.0)]
#[case(9.0, 6.0)]
#[case(16.0, 7.0)]
#[case(10.0, 6.0)]
fn test_smog_to_age(#[case] score: f64, #[case] age: f64) {
    assert_eq!(smog_to_age(score), age);
}

#[rstest]
#[case(4.9, 4.0)]
#[case(5.0, 6.0)]
#[case(6.99, 8.0)]
#[case(7.5, 10.0)]
#[case(8.2, 12.0)]
#[case(9.9, 15.0)]
#[case(10.0, f64::INFINITY)]
fn test_dale_chall_bands(#[case] score: f64, #[case] grade: f64) {
    assert_eq!(dale_chall_grade(score), grade);
}

#[rstest]
#[case(f64::NAN, 5.0)]
#[case(f64::INFINITY, 22.0)]
#[case(f64::NEG_INFINITY, 5.0)]
#[case(-3.0, 5.0)]
#[case(13.0, 13.0)]
#[case(40.0, 22.0)]
fn test_clamp_age(#[case] age: f64, #[case] clamped: f64) {
    assert_eq!(clamp_age(age), clamped);
}

#[test]
fn test_pathological_stats_still_clamp() {
    // Far more syllables and letters than any real text.
    let stats = UnitStats {
        word_count: 1,
        syllable_count: 500,
        letter_count: 2000,
        polysyllabic_word_count: 1,
        complex_polysyllabic_word_count: 1,
        familiar_word_count: 0,
        easy_word_count: 0,
        sentence_count: 1,
    };
    let scores = ScoreSet::from_stats(&stats).unwrap();
    for (formula, _, age) in scores.iter() {
        assert!((5.0..=22.0).contains(&age), "{} age {}", formula, age);
    }
    assert_eq!(scores.age(Formula::DaleChall), 22.0);
    assert_eq!(scores.age(Formula::Flesch), 22.0);
}
