use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Duration;

/// Waits up to `timeout` for input and maps it to an action.
pub fn handle_events(app: &AppState, timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => None,
        });
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match app.mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Theme
        (Char('t'), KeyModifiers::NONE) | (Char(' '), KeyModifiers::NONE) => {
            Some(Action::ToggleMode)
        }

        // Scrolling
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::ScrollDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::ScrollUp),
        (PageDown, _) | (Char('f'), KeyModifiers::CONTROL) => Some(Action::PageDown),
        (PageUp, _) | (Char('b'), KeyModifiers::CONTROL) => Some(Action::PageUp),
        (Char('g'), KeyModifiers::NONE) | (Home, _) => Some(Action::ScrollTop),
        (Char('G'), KeyModifiers::SHIFT) | (Char('G'), KeyModifiers::NONE) | (End, _) => {
            Some(Action::ScrollBottom)
        }

        // Clipboard
        (Char('y'), KeyModifiers::NONE) => Some(Action::YankPage),

        // Help
        (Char('?'), KeyModifiers::NONE) | (Char('?'), KeyModifiers::SHIFT) => {
            Some(Action::ShowHelp)
        }

        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

pub fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = app
                .toggle_area
                .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
            (hit && app.mode == AppMode::Normal).then_some(Action::ToggleMode)
        }
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        _ => None,
    }
}
