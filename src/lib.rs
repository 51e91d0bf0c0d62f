pub mod config;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod lexicon;
pub mod render;
pub mod samples;
pub mod scorer;
pub mod tree;
// cmd and reports are binary modules (see main.rs).

/// Youngest reading age any formula may report.
pub const MIN_AGE: f64 = 5.0;
/// Oldest reading age any formula may report.
pub const MAX_AGE: f64 = 22.0;
pub const DEFAULT_AGE: u8 = 12;
/// Years beyond the target age at which a unit turns fully red.
pub const DEFAULT_SCALE: f64 = 6.0;
