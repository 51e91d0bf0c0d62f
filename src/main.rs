use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use readability::config::{HighlightSettings, LexiconPaths};
use readability::error::{ReadResult, ReadabilityError};
use readability::lexicon::Lexicon;
use readability::scorer::Scorer;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with highlight settings; flags given on the command line win.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    lexicon: LexiconPaths,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Colour each sentence or paragraph of a text by reading age.
    Highlight(cmd::highlight::HighlightArgs),
    /// Per-unit score tables for one or more files.
    Report(cmd::report::ReportArgs),
    /// List the built-in sample texts.
    Samples,
    /// Re-render a file whenever it changes.
    Watch(cmd::watch::WatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> ReadResult<()> {
    let sub_matches = matches
        .subcommand()
        .map(|(_, m)| m)
        .ok_or_else(|| ReadabilityError::Config("no subcommand given".to_string()))?;

    let cli_settings = match &cli.command {
        Commands::Highlight(args) => &args.settings,
        Commands::Report(args) => &args.settings,
        Commands::Watch(args) => &args.settings,
        Commands::Samples => {
            cmd::samples::run();
            return Ok(());
        }
    };
    let settings = resolve_settings(cli_settings, cli.config.as_deref(), sub_matches)?;

    let lexicon = Lexicon::load(&cli.lexicon)?;
    let scorer = Scorer::new(lexicon);

    match &cli.command {
        Commands::Highlight(args) => cmd::highlight::run(args, &settings, &scorer),
        Commands::Report(args) => cmd::report::run(args, &settings, &scorer),
        Commands::Watch(args) => cmd::watch::run(args, &settings, scorer),
        Commands::Samples => Ok(()),
    }
}

fn resolve_settings(
    cli_settings: &HighlightSettings,
    config: Option<&Path>,
    sub_matches: &ArgMatches,
) -> ReadResult<HighlightSettings> {
    let settings = match config {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_settings = HighlightSettings::load_from_file(path)?;
            file_settings.merge_from_cli(cli_settings, sub_matches);
            file_settings
        }
        None => cli_settings.clone(),
    };
    settings.validate()?;
    Ok(settings)
}
