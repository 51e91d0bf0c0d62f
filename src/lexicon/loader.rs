use crate::error::{ReadResult, ReadabilityError};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads a word list: whitespace-separated words, `#` starts a comment line.
/// Words are case-folded on the way in.
pub fn read_words<R: Read>(reader: R) -> ReadResult<HashSet<String>> {
    let mut words = HashSet::new();
    let mut lines_read = 0;

    for line in BufReader::new(reader).lines() {
        let line = line?;
        lines_read += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for word in line.split_whitespace() {
            words.insert(word.to_lowercase());
        }
    }

    debug!(
        "   -> Scanned {} lines. Loaded {} words.",
        lines_read,
        words.len()
    );
    Ok(words)
}

pub fn load_words<P: AsRef<Path>>(path: P) -> ReadResult<HashSet<String>> {
    let path = path.as_ref();
    info!("📂 Loading word list: {}", path.display());

    let file = File::open(path)?;
    let words = read_words(file)?;

    if words.is_empty() {
        return Err(ReadabilityError::Validation(format!(
            "Word list '{}' contains no words.",
            path.display()
        )));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_comments_and_case_folding() {
        let data = "# header\nThe cat\n\n  SAT on\n";
        let words = read_words(Cursor::new(data)).unwrap();
        assert_eq!(words.len(), 4);
        assert!(words.contains("the"));
        assert!(words.contains("sat"));
        assert!(!words.contains("# header"));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "# nothing here\n").unwrap();
        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, ReadabilityError::Validation(_)));
    }
}
