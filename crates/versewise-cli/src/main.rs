mod app;
mod ui;

use std::{
    env,
    io::stdout,
    process,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use versewise_client::{AnswerSource, HttpAnswerSource, ScriptedAnswerSource};
use versewise_config::Config;
use versewise_engine::find_scripture;

use app::App;
use ui::theme::Theme;

/// Latency the scripted demo source pretends the backend has.
const DEMO_LATENCY: Duration = Duration::from_millis(600);

fn main() -> Result<()> {
    // CLI arguments: an optional backend URL, or --offline to force the
    // scripted demo source. Everything else comes from the config file.
    let args: Vec<String> = env::args().collect();
    let mut offline = false;
    let mut backend_arg: Option<String> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--offline" => offline = true,
            "--help" | "-h" => {
                println!("Usage: {} [backend-url] [--offline]", args[0]);
                println!("Config file: {}", Config::config_path().display());
                return Ok(());
            }
            url if !url.starts_with('-') => backend_arg = Some(url.to_string()),
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Usage: {} [backend-url] [--offline]", args[0]);
                process::exit(1);
            }
        }
    }

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    init_logging()?;

    let backend_url = if offline {
        None
    } else {
        backend_arg.or_else(|| config.backend_url.clone())
    };
    let source: Arc<dyn AnswerSource> = match &backend_url {
        Some(url) => Arc::new(HttpAnswerSource::new(url.clone())),
        None => Arc::new(ScriptedAnswerSource::with_delay(DEMO_LATENCY)),
    };
    log::info!(
        "starting with {} source",
        if backend_url.is_some() { "http" } else { "scripted" }
    );

    let mut app = App::new(
        source,
        Theme::from_choice(config.theme),
        config.reveal_interval(),
    );
    if let Some(id) = &config.default_scripture {
        match find_scripture(id) {
            Some(scripture) => app.enter_chat(scripture),
            None => log::warn!("default_scripture {id:?} not found in the catalog"),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            app.handle_key(key);
        }

        app.on_tick(Instant::now());
    }
}

/// Logging goes to a file because the terminal belongs to the UI. Enabled
/// only when `RUST_LOG` is set.
fn init_logging() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = env::temp_dir().join("versewise.log");
    let file = std::fs::File::create(&path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
