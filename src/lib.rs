pub mod ambient;
pub mod app;
pub mod config;
pub mod content;
pub mod export;
pub mod logging;
pub mod model;
pub mod page;
pub mod theme;
pub mod tree;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use config::AppConfig;
pub use content::Content;
pub use model::{DisplayMode, ProjectEntry, SkillEntry};
pub use page::PageRenderer;
pub use tree::VisualTree;
