//! Material colours.
//! Each material has a base HSL colour; a cell's jitter nudges lightness and
//! saturation so neighbouring grains don't look identical.

use crate::domain::Material;
use macroquad::color::{Color, hsl_to_rgb};

/// Base colour in degrees / percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

pub const fn base_color(material: Material) -> Option<Hsl> {
    match material {
        Material::Empty => None,
        Material::Sand => Some(Hsl { h: 48.0, s: 85.0, l: 55.0 }),
        Material::Water => Some(Hsl { h: 210.0, s: 75.0, l: 58.0 }),
        Material::Stone => Some(Hsl { h: 220.0, s: 5.0, l: 55.0 }),
    }
}

/// Base colour perturbed by jitter; lightness stays in [25, 75]
pub fn shade(material: Material, jitter: f32) -> Option<Hsl> {
    base_color(material).map(|base| Hsl {
        h: base.h,
        s: (base.s + jitter * 0.5).clamp(0.0, 100.0),
        l: (base.l + jitter).clamp(25.0, 75.0),
    })
}

pub fn to_color(hsl: Hsl) -> Color {
    hsl_to_rgb(hsl.h / 360.0, hsl.s / 100.0, hsl.l / 100.0)
}

/// RGBA bytes for a cell. Empty cells are fully transparent.
pub fn cell_rgba(material: Material, jitter: f32) -> [u8; 4] {
    match shade(material, jitter) {
        Some(hsl) => to_color(hsl).into(),
        None => [0, 0, 0, 0],
    }
}

/// Swatch colour for UI, without jitter
pub fn swatch(material: Material) -> Option<Color> {
    base_color(material).map(to_color)
}

/// Light or dark page background
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::from_rgba(8, 8, 16, 255),
            Theme::Light => Color::from_rgba(232, 232, 232, 255),
        }
    }

    pub fn panel(self) -> Color {
        match self {
            Theme::Dark => Color::from_rgba(30, 30, 30, 255),
            Theme::Light => Color::from_rgba(205, 205, 210, 255),
        }
    }

    pub fn text(self) -> Color {
        match self {
            Theme::Dark => Color::from_rgba(230, 230, 230, 255),
            Theme::Light => Color::from_rgba(25, 25, 30, 255),
        }
    }

    pub fn muted_text(self) -> Color {
        match self {
            Theme::Dark => Color::from_rgba(150, 150, 150, 255),
            Theme::Light => Color::from_rgba(90, 90, 100, 255),
        }
    }
}
