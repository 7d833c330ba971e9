use crate::model::{DisplayMode, IconRef};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// Linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// A colour with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Fill {
    pub const fn solid(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub const fn translucent(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    /// Composites this fill over an opaque backdrop colour.
    pub fn over(self, backdrop: Rgb) -> Rgb {
        backdrop.lerp(self.rgb, self.alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }

    pub fn at(self, t: f32) -> Rgb {
        self.from.lerp(self.to, t)
    }

    pub fn midpoint(self) -> Rgb {
        self.at(0.5)
    }
}

/// Colour tokens for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Gradient,
    pub orb: Fill,
    pub surface: Fill,
    pub text: Rgb,
    pub muted: Rgb,
    pub hero_text: Rgb,
    pub name: Gradient,
    pub toggle: Fill,
    pub toggle_icon: IconRef,
    pub award: Fill,
    pub award_text: Rgb,
}

const BACKDROP_OPACITY: f32 = 0.1;
const SURFACE_OPACITY: f32 = 0.9;

pub const LIGHT: Palette = Palette {
    background: Gradient::new(Rgb(0x6B, 0x46, 0xC1), Rgb(0x31, 0x82, 0xCE)),
    orb: Fill::translucent(Rgb::WHITE, BACKDROP_OPACITY),
    surface: Fill::translucent(Rgb::WHITE, SURFACE_OPACITY),
    text: Rgb(0x1A, 0x20, 0x2C),
    muted: Rgb(0x4A, 0x55, 0x68),
    hero_text: Rgb::WHITE,
    name: Gradient::new(Rgb::WHITE, Rgb(0xE2, 0xE8, 0xF0)),
    toggle: Fill::solid(Rgb::WHITE),
    toggle_icon: IconRef::Moon,
    award: Fill::solid(Rgb(0xFE, 0xFC, 0xBF)),
    award_text: Rgb(0x74, 0x42, 0x10),
};

pub const DARK: Palette = Palette {
    background: Gradient::new(Rgb(0x1A, 0x36, 0x5D), Rgb(0x2D, 0x37, 0x48)),
    orb: Fill::translucent(Rgb(0x31, 0x82, 0xCE), BACKDROP_OPACITY),
    surface: Fill::translucent(Rgb(0x2D, 0x37, 0x48), SURFACE_OPACITY),
    text: Rgb(0xED, 0xF2, 0xF7),
    muted: Rgb(0xCB, 0xD5, 0xE0),
    hero_text: Rgb(0xCB, 0xD5, 0xE0),
    name: Gradient::new(Rgb(0x90, 0xCD, 0xF4), Rgb(0x63, 0xB3, 0xED)),
    toggle: Fill::solid(Rgb(0x2D, 0x37, 0x48)),
    toggle_icon: IconRef::Sun,
    award: Fill::solid(Rgb(0x5F, 0x37, 0x0E)),
    award_text: Rgb(0xFA, 0xF0, 0x89),
};

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> &'static Palette {
        match mode {
            DisplayMode::Light => &LIGHT,
            DisplayMode::Dark => &DARK,
        }
    }
}
