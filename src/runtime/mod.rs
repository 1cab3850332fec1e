use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::{Controller, RodioEngine};
use crate::cli::Args;
use crate::config::LastDir;
use crate::library::{self, tags};

mod event_loop;
mod logging;
mod session;
mod settings;
mod startup;

use session::Session;

/// How a run ended, for the message printed after the terminal is restored.
enum Outcome {
    Finished,
    NothingChosen,
    NoTracks,
}

pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings(args.config.as_deref());
    if args.print_config {
        println!("{}", settings.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(&settings.logging);
    tracing::info!("cubeplayer {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(problem) = config_problem {
        tracing::warn!("{problem}");
    }

    let last_dir = LastDir::default_location();
    let tags = tags::reader(settings.library.read_tags);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<Outcome, Box<dyn std::error::Error>> = (|| {
        let Some(paths) =
            startup::resolve_paths(&mut terminal, &args.paths, &last_dir, &settings.browser)?
        else {
            return Ok(Outcome::NothingChosen);
        };

        let catalog = library::build(&paths, &settings.library, tags.as_ref());
        if catalog.is_empty() {
            return Ok(Outcome::NoTracks);
        }

        let engine = RodioEngine::init()?;
        let now = Instant::now();
        let mut session = Session::new(Controller::new(engine), catalog, tags, &settings, now);
        session.start(now);

        let loop_result = event_loop::run(&mut terminal, &mut session, &settings, &last_dir);
        session.shutdown();
        loop_result.map(|()| Outcome::Finished)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match run_result {
        Ok(Outcome::Finished) => tracing::info!("cubeplayer exiting"),
        Ok(Outcome::NothingChosen) => {
            println!("No paths provided. Pass files/folders or choose a folder.")
        }
        Ok(Outcome::NoTracks) => println!("No supported audio files found."),
        Err(e) => {
            tracing::error!("cubeplayer stopped: {e}");
            return Err(e);
        }
    }
    Ok(())
}
