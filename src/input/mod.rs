use macroquad::prelude::*;
use crate::application::{FrameDriver, Simulation, Viewport};
use crate::domain::{Material, config::{MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS}};
use crate::rendering::Theme;
use crate::ui::{Action, Button, actions};

/// Translate mouse state into pointer intent.
/// Touch input reaches us as emulated mouse events.
pub fn handle_pointer(sim: &mut Simulation, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let over_grid = viewport.contains(mouse_pos.0, mouse_pos.1);
    let (gx, gy) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1);

    // Press before release: both can arrive in one frame on a quick tap
    if is_mouse_button_pressed(MouseButton::Left) && over_grid {
        sim.pointer_down(gx, gy);
    } else if over_grid {
        sim.pointer_move(gx, gy);
    } else if sim.is_painting() {
        // Dragging off the grid ends the stroke
        sim.pointer_up();
    }

    if is_mouse_button_released(MouseButton::Left) {
        sim.pointer_up();
    }
}

/// Step brush radius within the UI range
fn nudge_radius(sim: &mut Simulation, delta: i32) {
    let radius = (sim.brush_radius() as i32 + delta)
        .clamp(MIN_BRUSH_RADIUS as i32, MAX_BRUSH_RADIUS as i32);
    sim.set_brush_radius(radius as u32);
}

/// Apply one panel or keyboard action
pub fn apply_action(action: Action, sim: &mut Simulation, theme: &mut Theme) {
    match action {
        Action::Select(material) => sim.set_active_material(material),
        Action::Clear => sim.clear(),
        Action::ToggleTheme => *theme = theme.toggled(),
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: &mut Simulation, driver: &mut FrameDriver, theme: &mut Theme) {
    let bindings: [(KeyCode, Action); 6] = [
        (KeyCode::Key1, Action::Select(Material::Sand)),
        (KeyCode::Key2, Action::Select(Material::Water)),
        (KeyCode::Key3, Action::Select(Material::Stone)),
        (KeyCode::E, Action::Select(Material::Empty)),
        (KeyCode::C, Action::Clear),
        (KeyCode::T, Action::ToggleTheme),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply_action(*action, sim, theme));

    if is_key_pressed(KeyCode::LeftBracket) {
        nudge_radius(sim, -1);
    }
    if is_key_pressed(KeyCode::RightBracket) {
        nudge_radius(sim, 1);
    }
    if is_key_pressed(KeyCode::Space) {
        driver.toggle();
    }
}

/// Process panel button clicks. Buttons line up with `actions()`.
pub fn process_button_clicks(
    sim: &mut Simulation,
    theme: &mut Theme,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .zip(actions())
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .for_each(|(_, action)| apply_action(action, sim, theme));
}
