use crate::reports::{self, FileReport};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use readability::config::HighlightSettings;
use readability::error::ReadResult;
use readability::scorer::Scorer;
use readability::tree;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Text files to score.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    #[command(flatten)]
    pub settings: HighlightSettings,
}

pub fn run(args: &ReportArgs, settings: &HighlightSettings, scorer: &Scorer) -> ReadResult<()> {
    info!("📊 Scoring {} file(s)", args.inputs.len());

    let results: Vec<FileReport> = args
        .inputs
        .par_iter()
        .map(|path| -> ReadResult<FileReport> {
            let text = fs::read_to_string(path)?;
            let tree = tree::parse(&text);
            let highlight = scorer.highlight(&tree, settings);
            let summary = scorer.score_document(&tree, settings);
            Ok(FileReport::new(
                path.display().to_string(),
                &highlight,
                &summary,
            ))
        })
        .collect::<ReadResult<_>>()?;

    match args.format {
        ReportFormat::Table => {
            for report in &results {
                reports::print_unit_table(report, settings);
            }
        }
        ReportFormat::Csv => reports::write_csv(&results, io::stdout())?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}
