use clap::{Args, ValueEnum};
use readability::config::HighlightSettings;
use readability::error::ReadResult;
use readability::render;
use readability::samples::Sample;
use readability::scorer::Scorer;
use readability::tree::{self, LinguisticNode};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HighlightFormat {
    Terminal,
    Html,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct HighlightArgs {
    /// Text file to highlight; `-` or nothing reads stdin.
    pub input: Option<PathBuf>,

    /// Highlight a built-in sample instead (see `samples`).
    #[arg(long, conflicts_with_all = ["input", "tree"])]
    pub sample: Option<Sample>,

    /// Pre-tokenized tree as JSON instead of raw text.
    #[arg(long, conflicts_with = "input")]
    pub tree: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = HighlightFormat::Terminal)]
    pub format: HighlightFormat,

    #[command(flatten)]
    pub settings: HighlightSettings,
}

fn load_tree(args: &HighlightArgs) -> ReadResult<LinguisticNode> {
    if let Some(path) = &args.tree {
        info!("🌳 Loading tree: {}", path.display());
        return LinguisticNode::load_from_file(path);
    }
    let text = match args.sample {
        Some(sample) => sample.text(),
        None => super::read_input(args.input.as_deref())?,
    };
    Ok(tree::parse(&text))
}

pub fn run(args: &HighlightArgs, settings: &HighlightSettings, scorer: &Scorer) -> ReadResult<()> {
    let tree = load_tree(args)?;
    let highlight = scorer.highlight(&tree, settings);
    debug!(
        "🖍️  {} {} units at target age {}",
        highlight.units().count(),
        settings.granularity,
        settings.target_age
    );

    match args.format {
        HighlightFormat::Terminal => println!("{}", render::to_terminal(&highlight)),
        HighlightFormat::Html => println!("{}", render::to_html(&highlight)),
        HighlightFormat::Json => println!("{}", serde_json::to_string_pretty(&highlight)?),
    }
    Ok(())
}
