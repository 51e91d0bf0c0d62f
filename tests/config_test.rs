use clap::{CommandFactory, FromArgMatches, Parser};
use readability::config::{HighlightSettings, LexiconPaths};
use readability::error::ReadabilityError;
use readability::highlight::Granularity;
use readability::lexicon::Lexicon;
use readability::scorer::Average;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    settings: HighlightSettings,
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

#[test]
fn test_defaults() {
    let s = HighlightSettings::default();
    assert_eq!(s.target_age, 12);
    assert_eq!(s.average, Average::Median);
    assert_eq!(s.granularity, Granularity::Sentence);
    assert_eq!(s.scale, 6.0);
    assert!(s.validate().is_ok());

    let parsed = TestCli::try_parse_from(["test"]).unwrap();
    assert_eq!(parsed.settings, s);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "settings.json", r#"{"target_age": 9, "average": "mode"}"#);

    let s = HighlightSettings::load_from_file(&path).unwrap();
    assert_eq!(s.target_age, 9);
    assert_eq!(s.average, Average::Mode);
    assert_eq!(s.granularity, Granularity::Sentence);
    assert_eq!(s.scale, 6.0);
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_file(&dir, "age.json", r#"{"target_age": 30}"#);
    assert!(matches!(
        HighlightSettings::load_from_file(&path),
        Err(ReadabilityError::Config(_))
    ));

    let path = write_file(&dir, "scale.json", r#"{"scale": 0}"#);
    assert!(matches!(
        HighlightSettings::load_from_file(&path),
        Err(ReadabilityError::Config(_))
    ));

    let path = write_file(&dir, "average.json", r#"{"average": "geometric"}"#);
    assert!(matches!(
        HighlightSettings::load_from_file(&path),
        Err(ReadabilityError::Json(_))
    ));
}

#[test]
fn test_cli_flags_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "settings.json",
        r#"{"target_age": 9, "average": "mode", "granularity": "paragraph"}"#,
    );

    let matches = TestCli::command()
        .try_get_matches_from(["test", "--average", "mean", "--scale", "4"])
        .unwrap();
    let cli = TestCli::from_arg_matches(&matches).unwrap();

    let mut s = HighlightSettings::load_from_file(&path).unwrap();
    s.merge_from_cli(&cli.settings, &matches);

    assert_eq!(s.average, Average::Mean);
    assert_eq!(s.scale, 4.0);
    // Not typed on the command line, so the file wins over the CLI default.
    assert_eq!(s.target_age, 9);
    assert_eq!(s.granularity, Granularity::Paragraph);
}

#[test]
fn test_cli_rejects_out_of_range_age() {
    assert!(TestCli::try_parse_from(["test", "--target-age", "4"]).is_err());
    assert!(TestCli::try_parse_from(["test", "--target-age", "23"]).is_err());
    assert!(TestCli::try_parse_from(["test", "--target-age", "22"]).is_ok());
}

#[test]
fn test_lexicon_paths_replace_lists() {
    let dir = tempfile::tempdir().unwrap();
    let familiar = write_file(&dir, "familiar.txt", "# kids\nZebra yak\n");

    let lexicon = Lexicon::load(&LexiconPaths {
        familiar_words: Some(familiar),
        easy_words: None,
    })
    .unwrap();
    assert_eq!(lexicon.familiar().len(), 2);
    assert!(lexicon.is_familiar("zebra"));
    assert!(!lexicon.is_familiar("the"));
    assert!(lexicon.is_easy("the"));
}

#[test]
fn test_empty_word_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_file(&dir, "empty.txt", "# nothing here\n\n");
    let result = Lexicon::load(&LexiconPaths {
        familiar_words: None,
        easy_words: Some(empty),
    });
    assert!(matches!(result, Err(ReadabilityError::Validation(_))));
}
