mod common;

use common::buffer_text;
use folio_rs::actions::{execute_action, Action};
use folio_rs::event::{handle_key_event, handle_mouse_event};
use folio_rs::model::IconStyle;
use folio_rs::{ui, AppConfig, AppState, Content, DisplayMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

fn app_with(icons: IconStyle) -> AppState {
    let config = AppConfig {
        ambient: false,
        icons,
        ..AppConfig::default()
    };
    AppState::new(config, Content::portfolio())
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut AppState) -> String {
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_first_paint_is_light() {
    let mut app = app_with(IconStyle::Ascii);
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    let screen = draw(&mut terminal, &mut app);

    assert_eq!(app.display_mode(), DisplayMode::Light);
    assert!(screen.contains("Samuel Michnik"));
    assert!(screen.contains("Software Developer | Web Technologies Specialist"));
    assert!(screen.contains(" C "), "moon toggle shown in light mode");
    for title in ["ClarityAI", "MoodBot", "Ingredibud"] {
        assert!(screen.contains(title), "missing card {}", title);
    }
}

#[test]
fn test_key_toggle_round_trip() {
    let mut app = app_with(IconStyle::Ascii);
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    draw(&mut terminal, &mut app);

    let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
    let action = handle_key_event(&app, key).expect("t is bound");
    execute_action(action, &mut app).unwrap();
    let screen = draw(&mut terminal, &mut app);
    assert_eq!(app.display_mode(), DisplayMode::Dark);
    assert!(screen.contains("Switched to dark mode"));

    execute_action(action, &mut app).unwrap();
    draw(&mut terminal, &mut app);
    assert_eq!(app.display_mode(), DisplayMode::Light);
}

#[test]
fn test_click_toggle_button_after_draw() {
    let mut app = app_with(IconStyle::Unicode);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    draw(&mut terminal, &mut app);

    let area = app.toggle_area.expect("toggle drawn");
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + 1,
        row: area.y,
        modifiers: KeyModifiers::NONE,
    };
    let action = handle_mouse_event(&app, click).expect("click hits toggle");
    execute_action(action, &mut app).unwrap();
    assert_eq!(app.display_mode(), DisplayMode::Dark);
}

#[test]
fn test_skills_visible_after_scrolling_to_bottom() {
    let mut app = app_with(IconStyle::None);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let top = draw(&mut terminal, &mut app);
    assert!(!top.contains("Technical Expertise"));

    execute_action(Action::ScrollBottom, &mut app).unwrap();
    let bottom = draw(&mut terminal, &mut app);
    assert!(bottom.contains("Technical Expertise"));
    for label in ["Next.js", "React", "OpenAI", "Vercel", "Stripe", "Discord", "Node.js"] {
        assert!(bottom.contains(label), "missing skill {}", label);
    }
}

#[test]
fn test_quit_stops_app() {
    let mut app = app_with(IconStyle::Unicode);
    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    let action = handle_key_event(&app, key).unwrap();
    execute_action(action, &mut app).unwrap();
    assert!(!app.running);
}
