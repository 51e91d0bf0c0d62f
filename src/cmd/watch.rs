use clap::Args;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use readability::config::{HighlightSettings, HighlightState};
use readability::debounce::Debouncer;
use readability::error::ReadResult;
use readability::render;
use readability::scorer::Scorer;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Text file to watch.
    pub file: PathBuf,

    /// Quiet period before a change is re-rendered, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    #[command(flatten)]
    pub settings: HighlightSettings,
}

pub fn run(args: &WatchArgs, settings: &HighlightSettings, scorer: Scorer) -> ReadResult<()> {
    let file = args.file.canonicalize()?;
    // Editors often save by replacing the file, so the directory is watched
    // and events are matched on the file name.
    let dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();
    let name = file.file_name().map(OsStr::to_os_string);

    let settings = settings.clone();
    let debouncer = Debouncer::new(Duration::from_millis(args.debounce_ms), move |text: String| {
        let state = HighlightState::new(text).with_settings(settings.clone());
        let highlight = scorer.highlight_state(&state);
        if let Err(e) = draw(&render::to_terminal(&highlight)) {
            warn!("⚠️  Could not draw frame: {}", e);
        }
    })?;

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        let _ = tx.send(result);
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("👀 Watching {} (Ctrl-C to stop)", file.display());

    let mut last = fs::read_to_string(&file)?;
    debouncer.push(last.clone());

    for result in rx.iter() {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                warn!("⚠️  Watch error: {}", e);
                continue;
            }
        };
        let touched = matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
            && event.paths.iter().any(|p| p.file_name() == name.as_deref());
        if !touched {
            continue;
        }

        match fs::read_to_string(&file) {
            Ok(text) if text == last => debug!("   -> {:?} left the text unchanged", event.kind),
            Ok(text) => {
                last = text;
                debouncer.push(last.clone());
            }
            // Mid-replace; the following create event brings the new text.
            Err(e) => debug!("   -> Could not read {}: {}", file.display(), e),
        }
    }
    Ok(())
}

fn draw(frame: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(stdout, "{}", frame)?;
    stdout.flush()
}
