pub mod ui;

use cgpa_genie::{
    app::App,
    app_dirs::AppDirs,
    catalog::Catalog,
    config::{Config, ConfigStore, FileConfigStore, MemoryConfigStore},
    gpa::{cgpa_for_session, compute_sgpa, format_gpa},
    history::SessionHistory,
    logging,
    parse::parse_entries,
    runtime::{self, TerminalInput},
    GpaError,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{info, warn};

/// SGPA & CGPA calculator for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Calculate a credit-weighted SGPA from your subject grades and a CGPA over your semesters. Runs as an interactive terminal app, or prints results directly when given --sgpa/--cgpa."
)]
pub struct Cli {
    /// course to preselect in the subject reference
    #[clap(short = 'c', long)]
    course: Option<String>,

    /// number of empty subject rows when the SGPA form opens
    #[clap(short = 'r', long)]
    rows: Option<usize>,

    /// do not add calculated SGPAs to this session's history
    #[clap(long)]
    no_record: bool,

    /// read and write preferences at this path instead of the default location
    #[clap(long, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// ignore the preferences file entirely
    #[clap(long)]
    no_config: bool,

    /// one semester's subjects as credit:grade pairs, e.g. "4:S,3:A" (repeatable)
    #[clap(long = "sgpa", value_name = "ENTRIES")]
    sgpa: Vec<String>,

    /// print the CGPA (of this run's SGPAs, or of --history when there are none)
    #[clap(long)]
    cgpa: bool,

    /// previous SGPAs for the CGPA, e.g. "[8.5, 9.0, 8.0]"; ignored when --sgpa is given
    #[clap(long, value_name = "LIST")]
    history: Option<String>,
}

impl Cli {
    fn is_headless(&self) -> bool {
        !self.sgpa.is_empty() || self.cgpa || self.history.is_some()
    }

    fn config_store(&self) -> Box<dyn ConfigStore> {
        if self.no_config {
            Box::new(MemoryConfigStore::default())
        } else if let Some(path) = &self.config {
            Box::new(FileConfigStore::with_path(path))
        } else {
            Box::new(FileConfigStore::new())
        }
    }

    /// Preferences from the store with command line flags layered on top
    fn apply_to(&self, mut cfg: Config) -> Config {
        if let Some(course) = &self.course {
            cfg.default_course = Some(course.clone());
        }
        if let Some(rows) = self.rows {
            cfg.starting_rows = rows.max(1);
        }
        if self.no_record {
            cfg.record_sessions = false;
        }
        cfg
    }
}

/// Compute everything requested on the command line, returning the lines
/// to print. Stops at the first invalid semester or list.
pub fn run_headless(
    cli: &Cli,
    config: &Config,
    history: &mut SessionHistory,
) -> Result<Vec<String>, GpaError> {
    let mut lines = Vec::new();

    for (idx, text) in cli.sgpa.iter().enumerate() {
        let sgpa = compute_sgpa(&parse_entries(text)?)?;
        if config.record_sessions {
            history.record(sgpa);
        }
        lines.push(format!("SGPA (semester {}): {}", idx + 1, format_gpa(sgpa)));
    }

    if cli.cgpa || cli.history.is_some() {
        if !history.is_empty() && cli.history.is_some() {
            warn!("SGPAs calculated this run take precedence over --history");
        }
        let cgpa = cgpa_for_session(history, cli.history.as_deref())?;
        lines.push(format!("CGPA ({}): {}", cgpa.source, format_gpa(cgpa.value)));
    }

    Ok(lines)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    let store = cli.config_store();
    let config = cli.apply_to(store.load());

    if cli.is_headless() {
        logging::init_stderr();
        let mut history = SessionHistory::new();
        return match run_headless(&cli, &config, &mut history) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("error: {}", err);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty (or pass --sgpa/--cgpa)")
            .exit();
    }

    if let Some(path) = AppDirs::log_path() {
        logging::init_file(&path);
    }
    info!("starting interactive session");

    let catalog = Catalog::load()?;
    let mut app = App::new(config, catalog, SessionHistory::new());

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;
    result?;

    remember_course(store.as_ref(), &app);
    info!(sgpas = app.history.len(), "session ended");

    Ok(ExitCode::SUCCESS)
}

/// Persist the last chosen course; other preferences are left as they were
/// on disk so one-off flags do not stick.
fn remember_course(store: &dyn ConfigStore, app: &App) {
    let mut saved = store.load();
    if saved.default_course == app.config.default_course {
        return;
    }
    saved.default_course = app.config.default_course.clone();
    if let Err(err) = store.save(&saved) {
        warn!(%err, "could not save preferences");
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    runtime::run(app, &mut TerminalInput, |app| {
        terminal.draw(|f| ui::ui(app, f)).map(|_| ())
    })?;
    Ok(())
}
