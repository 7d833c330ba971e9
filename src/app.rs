use crate::ambient::Ambient;
use crate::config::AppConfig;
use crate::content::Content;
use crate::model::DisplayMode;
use crate::page::PageRenderer;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub renderer: PageRenderer,
    pub config: AppConfig,
    pub ambient: Ambient,
    pub started: Instant,

    // Viewport state, refreshed on every draw
    pub scroll: u16,
    pub page_height: u16,
    pub viewport_height: u16,
    pub toggle_area: Option<Rect>,

    // Message for status line
    pub message: Option<String>,

    // Last text copied with yank
    pub clipboard: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, content: Content) -> Self {
        let ambient = match config.orb_count() {
            0 => Ambient::disabled(),
            count => Ambient::generate(count, &mut rand::rng()),
        };
        tracing::debug!(orbs = ambient.orbs.len(), "ambient background generated");

        Self {
            running: true,
            mode: AppMode::Normal,
            renderer: PageRenderer::new(content),
            config,
            ambient,
            started: Instant::now(),
            scroll: 0,
            page_height: 0,
            viewport_height: 24,
            toggle_area: None,
            message: None,
            clipboard: None,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.renderer.mode()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.tick_rate_ms)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn set_viewport(&mut self, viewport_height: u16, page_height: u16) {
        self.viewport_height = viewport_height;
        self.page_height = page_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// How far down the page the viewport is, `None` when everything fits.
    pub fn scroll_percent(&self) -> Option<u16> {
        let max = self.max_scroll();
        if max == 0 {
            None
        } else {
            Some((self.scroll as u32 * 100 / max as u32) as u16)
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
