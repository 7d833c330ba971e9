use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Light/dark theme flag. Every process starts in `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

/// How icon references are turned into terminal glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
    None,
}

/// Opaque reference to an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    NextJs,
    React,
    OpenAi,
    Vercel,
    Stripe,
    Discord,
    NodeJs,
    GitHub,
    LinkedIn,
    Sun,
    Moon,
    Trophy,
}

impl IconRef {
    /// Resolves the glyph for the given style. `None` means the glyph is
    /// unavailable and the caller renders around the gap.
    pub fn glyph(self, style: IconStyle) -> Option<&'static str> {
        match style {
            IconStyle::None => None,
            IconStyle::Unicode => Some(match self {
                IconRef::NextJs => "Ⓝ",
                IconRef::React => "⚛",
                IconRef::OpenAi => "✺",
                IconRef::Vercel => "▲",
                IconRef::Stripe => "$",
                IconRef::Discord => "☏",
                IconRef::NodeJs => "⬢",
                IconRef::GitHub => "⎇",
                IconRef::LinkedIn => "in",
                IconRef::Sun => "☀",
                IconRef::Moon => "☾",
                IconRef::Trophy => "🏆",
            }),
            IconStyle::Ascii => Some(match self {
                IconRef::NextJs => "N",
                IconRef::React => "(*)",
                IconRef::OpenAi => "AI",
                IconRef::Vercel => "/\\",
                IconRef::Stripe => "$",
                IconRef::Discord => "#",
                IconRef::NodeJs => "JS",
                IconRef::GitHub => "gh",
                IconRef::LinkedIn => "in",
                IconRef::Sun => "*",
                IconRef::Moon => "C",
                IconRef::Trophy => "#1",
            }),
        }
    }

    /// Human readable name, used where a missing glyph would leave nothing.
    pub fn name(self) -> &'static str {
        match self {
            IconRef::NextJs => "Next.js",
            IconRef::React => "React",
            IconRef::OpenAi => "OpenAI",
            IconRef::Vercel => "Vercel",
            IconRef::Stripe => "Stripe",
            IconRef::Discord => "Discord",
            IconRef::NodeJs => "Node.js",
            IconRef::GitHub => "GitHub",
            IconRef::LinkedIn => "LinkedIn",
            IconRef::Sun => "Sun",
            IconRef::Moon => "Moon",
            IconRef::Trophy => "Trophy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub is_award: bool,
}

impl ProjectEntry {
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            features: features.into_iter().map(Into::into).collect(),
            is_award: false,
        }
    }

    pub fn award(mut self) -> Self {
        self.is_award = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: String,
    pub icon: IconRef,
}

impl SkillEntry {
    pub fn new(label: impl Into<String>, icon: IconRef) -> Self {
        Self {
            label: label.into(),
            icon,
        }
    }
}

/// Hero section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub socials: Vec<IconRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_light() {
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_project_entry_defaults_to_no_award() {
        let entry = ProjectEntry::new("X", "Y", ["a", "b"]);
        assert!(!entry.is_award);
        assert_eq!(entry.features, vec!["a".to_string(), "b".to_string()]);
        assert!(entry.award().is_award);
    }

    #[test]
    fn test_glyph_resolution_by_style() {
        assert_eq!(IconRef::Moon.glyph(IconStyle::Unicode), Some("☾"));
        assert_eq!(IconRef::Moon.glyph(IconStyle::Ascii), Some("C"));
        assert_eq!(IconRef::React.glyph(IconStyle::None), None);
    }

    #[test]
    fn test_every_icon_has_a_glyph_in_ascii() {
        let icons = [
            IconRef::NextJs,
            IconRef::React,
            IconRef::OpenAi,
            IconRef::Vercel,
            IconRef::Stripe,
            IconRef::Discord,
            IconRef::NodeJs,
            IconRef::GitHub,
            IconRef::LinkedIn,
            IconRef::Sun,
            IconRef::Moon,
            IconRef::Trophy,
        ];
        for icon in icons {
            assert!(icon.glyph(IconStyle::Ascii).is_some(), "{:?}", icon);
        }
    }
}
