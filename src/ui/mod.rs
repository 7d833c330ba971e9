use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub mod backdrop;
pub mod help;
pub mod page_view;
pub mod status_line;
pub mod text;


use help::{centered_rect, HelpRenderer};
use page_view::PageView;
use status_line::StatusLineRenderer;

pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 3;
const HELP_WIDTH: u16 = 44;
const HELP_HEIGHT: u16 = 22;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size);
        app.toggle_area = None;
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    let page_area = chunks[0];

    let tree = app.renderer.render_current();
    let orbs = app.ambient.sample(app.elapsed());
    backdrop::paint(frame.buffer_mut(), page_area, &tree, &orbs);

    let view = PageView::build(&tree, page_area.width, app.config.icons);
    app.set_viewport(page_area.height, view.height());
    view.blit(frame.buffer_mut(), page_area, app.scroll);
    app.toggle_area = view.toggle_on_screen(page_area, app.scroll);

    if app.mode == AppMode::Help {
        HelpRenderer::render(frame, centered_rect(HELP_WIDTH, HELP_HEIGHT, page_area));
    }

    StatusLineRenderer::render(frame, app, chunks[1]);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Terminal too small")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
