use readability::lexicon::{Lexicon, WordList};
use readability::scorer::metrics::collect;
use readability::tree::parse;

// Long words count as three syllables, everything else as one.
fn toy_lexicon() -> Lexicon {
    Lexicon::new(
        WordList::from_words(["the", "dog", "cat"]),
        WordList::from_words(["the", "saw", "with"]),
    )
    .with_syllable_counter(|word: &str| if word.chars().count() >= 5 { 3 } else { 1 })
}

#[test]
fn test_sentence_counts() {
    let tree = parse("The Dog saw the dog again with Elephants.");
    let sentence = &tree.children()[0].children()[0];
    let stats = collect(sentence, &toy_lexicon());

    assert_eq!(stats.word_count, 8);
    assert_eq!(stats.syllable_count, 12);
    assert_eq!(stats.letter_count, 33);
    assert_eq!(stats.polysyllabic_word_count, 2);
    // "Elephants" looks like a proper noun.
    assert_eq!(stats.complex_polysyllabic_word_count, 1);
    // Distinct case-folded hits: {the, dog} and {the, saw, with}.
    assert_eq!(stats.familiar_word_count, 2);
    assert_eq!(stats.easy_word_count, 3);
    assert_eq!(stats.sentence_count, 1);

    assert_eq!(stats.unfamiliar_word_count(), 6);
    assert_eq!(stats.difficult_word_count(), 5);
}

#[test]
fn test_paragraph_counts_its_sentences() {
    let tree = parse("The cat sat. The dog ran. The end.");
    let paragraph = &tree.children()[0];
    let stats = collect(paragraph, &toy_lexicon());
    assert_eq!(stats.sentence_count, 3);
    assert_eq!(stats.word_count, 8);
    // "the" appears three times but counts once.
    assert_eq!(stats.familiar_word_count, 3);
}

#[test]
fn test_units_are_independent() {
    let lexicon = toy_lexicon();
    let tree = parse("The cat sat. The cat ran.");
    let paragraph = &tree.children()[0];
    let first = collect(&paragraph.children()[0], &lexicon);
    let second = collect(&paragraph.children()[2], &lexicon);

    assert_eq!(first.familiar_word_count, 2);
    assert_eq!(second.familiar_word_count, 2);
    assert_eq!(collect(paragraph, &lexicon).familiar_word_count, 2);
}

#[test]
fn test_no_words_gives_zero_counts() {
    let tree = parse("...");
    let sentence = &tree.children()[0].children()[0];
    let stats = collect(sentence, &toy_lexicon());
    assert!(stats.is_empty());
    assert_eq!(stats.syllable_count, 0);
    assert_eq!(stats.letter_count, 0);
    assert_eq!(stats.sentence_count, 1);
}

#[test]
fn test_default_lexicon_on_real_words() {
    let lexicon = Lexicon::default();
    let tree = parse("The dictionary is beautiful.");
    let stats = collect(&tree, &lexicon);
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.polysyllabic_word_count, 2);
    assert!(stats.easy_word_count >= 2);
}

#[test]
fn test_default_lexicon_knows_everyday_words() {
    let lexicon = Lexicon::default();
    let tree = parse("The teacher ate dinner in the kitchen by the window.");
    let stats = collect(&tree, &lexicon);
    assert_eq!(stats.word_count, 10);
    // Eight distinct words, all on both lists; "the" repeats twice.
    assert_eq!(stats.familiar_word_count, 8);
    assert_eq!(stats.easy_word_count, 8);
    assert_eq!(stats.unfamiliar_word_count(), 2);
    assert_eq!(stats.difficult_word_count(), 2);
}
