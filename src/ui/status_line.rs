use crate::app::{AppMode, AppState};
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "t theme · j/k scroll · y copy · ? help · q quit";

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub fn get_content_and_style(app: &AppState) -> (String, Style) {
        let mode = app.display_mode();
        let palette = Palette::for_mode(mode);
        let base = Style::default()
            .fg(palette.text.into())
            .bg(palette.surface.rgb.into());

        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(palette.award_text.into())
                .bg(palette.award.rgb.into())
                .add_modifier(Modifier::BOLD);
            return (format!(" {}", msg), style);
        }

        let content = match app.mode {
            AppMode::Help => " Press ESC or q to close help".to_string(),
            AppMode::Normal => {
                let mut line = format!(" {} | {}", mode.name(), HINTS);
                if let Some(percent) = app.scroll_percent() {
                    line.push_str(&format!(" | {}%", percent));
                }
                line
            }
        };
        (content, base)
    }
}
