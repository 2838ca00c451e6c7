//! Form Builder TUI - schema-driven forms in the terminal
//!
//! Renders a declarative form schema as terminal inputs, validates on
//! submit, and prints the submitted values as JSON on exit.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::{App, SubmissionLog};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::FormSchema;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_builder_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load()?;
    let schema = load_schema(&config)?;
    tracing::info!(fields = schema.fields.len(), "schema loaded");

    let submissions = SubmissionLog::default();
    let mut app = App::new(schema, Box::new(submissions.clone()), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    for values in submissions.entries() {
        println!("{}", serde_json::to_string_pretty(&values)?);
    }
    tracing::info!(submitted = app.form.is_submitted(), "exiting");

    Ok(())
}

/// Schema from the command line, then the config file, then the built-in form
fn load_schema(config: &TuiConfig) -> Result<FormSchema> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.schema_path.clone());

    match path {
        Some(path) => FormSchema::load(&path)
            .with_context(|| format!("could not use schema {}", path.display())),
        None => Ok(FormSchema::application_form()),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while the spinner is animating (16ms = ~60fps)
        let poll_duration = if app.form.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C works in every phase
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key, Instant::now());
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
