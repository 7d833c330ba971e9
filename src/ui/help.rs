use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Theme:",
        items: &[
            ("t/␣", "Toggle light/dark"),
            ("M1 ", "Click the toggle button"),
        ],
    },
    HelpSection {
        title: "Scrolling:",
        items: &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("⇟/⇞", "Page down/up"),
            ("g  ", "Go to top"),
            ("G  ", "Go to bottom"),
        ],
    },
    HelpSection {
        title: "Other:",
        items: &[("y  ", "Copy page as text"), ("?  ", "Help"), ("q  ", "Quit")],
    },
];

pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    pub fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                "folio Help",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )]));

            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}

/// A rectangle of at most `width` x `height`, centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
