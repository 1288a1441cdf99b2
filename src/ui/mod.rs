mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height, Color};
use crate::domain::Material;
use crate::rendering::swatch;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
const BUTTON_SPACING: f32 = 40.0;
const BUTTONS_TOP: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(Material),
    Clear,
    ToggleTheme,
}

/// Panel actions in display order
pub fn actions() -> Vec<Action> {
    Material::ALL
        .into_iter()
        .map(Action::Select)
        .chain([Action::Clear, Action::ToggleTheme])
        .collect()
}

fn label(action: Action) -> &'static str {
    match action {
        Action::Select(material) => material.name(),
        Action::Clear => "Clear",
        Action::ToggleTheme => "Theme",
    }
}

/// Create panel buttons, highlighting the active material.
/// Buttons line up with `actions()` by index.
pub fn create_buttons(active: Material) -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    actions()
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let y = BUTTONS_TOP + i as f32 * BUTTON_SPACING;
            let btn = Button::new(px, y, width, BUTTON_HEIGHT, label(action));
            match action {
                Action::Select(material) => {
                    let fill = swatch(material).unwrap_or(Color::from_rgba(90, 90, 100, 255));
                    btn.with_color(fill).with_selected(material == active)
                }
                Action::Clear => btn.with_color(Color::from_rgba(190, 50, 50, 255)),
                Action::ToggleTheme => btn,
            }
        })
        .collect()
}
