use folio_rs::{actions, app, config, content, event, export, logging, ui};

use anyhow::Result;
use app::AppState;
use clap::Parser;
use config::{load_config, CliArgs};
use content::Content;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_rs::PageRenderer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    tracing::debug!(?config, "configuration loaded");

    if args.print {
        let renderer = PageRenderer::new(Content::portfolio());
        print!("{}", export::to_text(&renderer.render(args.mode), config.icons));
        return Ok(());
    }

    let mut app = AppState::new(config, Content::portfolio());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    tracing::info!("folio stopped");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app, app.tick_rate())? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
