use crate::app::{AppMode, AppState};
use crate::export;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,

    // Theme
    ToggleMode,

    // Scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // Clipboard
    YankPage,

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    app.clear_message();

    match action {
        Action::Quit => {
            tracing::info!("quit requested");
            app.running = false;
        }
        Action::ToggleMode => toggle_mode(app),
        Action::ScrollUp => app.scroll_by(-1),
        Action::ScrollDown => app.scroll_by(1),
        Action::PageUp => app.scroll_by(-page_step(app)),
        Action::PageDown => app.scroll_by(page_step(app)),
        Action::ScrollTop => app.scroll_to_top(),
        Action::ScrollBottom => app.scroll_to_bottom(),
        Action::YankPage => yank_page(app),
        Action::ShowHelp => app.mode = AppMode::Help,
        Action::CloseHelp => app.mode = AppMode::Normal,
    }

    Ok(())
}

fn page_step(app: &AppState) -> i32 {
    app.viewport_height.saturating_sub(1).max(1) as i32
}

pub fn toggle_mode(app: &mut AppState) {
    let mode = app.renderer.toggle_mode();
    app.set_message(format!("Switched to {} mode", mode.name()));
}

/// Copies the page as plain text. The text is kept on the app even when the
/// system clipboard is unavailable.
pub fn yank_page(app: &mut AppState) {
    let text = export::to_text(&app.renderer.render_current(), app.config.icons);

    let copied = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(text.clone()));
    match copied {
        Ok(()) => {
            tracing::info!(bytes = text.len(), "page copied to clipboard");
            app.set_message("Copied page text to clipboard.");
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            app.set_message("Clipboard unavailable, page text kept internally.");
        }
    }
    app.clipboard = Some(text);
}
