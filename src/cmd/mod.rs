pub mod highlight;
pub mod report;
pub mod samples;
pub mod watch;

use readability::error::ReadResult;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file; `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> ReadResult<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(fs::read_to_string(p)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
