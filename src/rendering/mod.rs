use macroquad::prelude::*;
use crate::domain::{Grid, Material};
use crate::application::{FrameDriver, Simulation, Viewport};
use crate::ui::{Button, panel_x, PANEL_WIDTH};

mod palette;
mod buffer;

pub use palette::{Hsl, Theme, base_color, cell_rgba, shade, swatch};
pub use buffer::PixelBuffer;

/// Receives the grid once per frame after the tick
pub trait FrameSink {
    fn present(&mut self, grid: &Grid);
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// GPU copy of the pixel buffer, sampled with nearest filtering so each
/// cell stays a crisp square when scaled
pub struct GridTexture {
    texture: Texture2D,
}

impl GridTexture {
    pub fn new(buffer: &PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        let texture = Texture2D::from_rgba8(width as u16, height as u16, buffer.bytes());
        texture.set_filter(FilterMode::Nearest);
        Self { texture }
    }

    pub fn upload(&self, buffer: &PixelBuffer) {
        let (width, height) = buffer.dimensions();
        self.texture.update_from_bytes(width as u32, height as u32, buffer.bytes());
    }
}

/// Draw the grid texture scaled by the viewport, with a border
pub fn draw_frame(texture: &GridTexture, viewport: &Viewport, theme: Theme) {
    let (width, height) = viewport.screen_size();
    draw_rectangle_lines(
        viewport.origin_x - 2.0,
        viewport.origin_y - 2.0,
        width + 4.0,
        height + 4.0,
        4.0,
        theme.muted_text(),
    );
    draw_texture_ex(
        &texture.texture,
        viewport.origin_x,
        viewport.origin_y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(width, height)),
            ..Default::default()
        },
    );
}

/// Outline of the brush disk under the cursor
pub fn draw_brush_outline(viewport: &Viewport, radius: u32, mouse_pos: (f32, f32), theme: Theme) {
    if !viewport.contains(mouse_pos.0, mouse_pos.1) {
        return;
    }
    let (gx, gy) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1);
    let (sx, sy) = viewport.grid_to_screen(gx as usize, gy as usize);
    let half = viewport.scale / 2.0;
    let r = (radius as f32 + 0.5) * viewport.scale;
    draw_circle_lines(sx + half, sy + half, r, 1.0, theme.muted_text());
}

/// Draw control panel background
fn draw_panel_background(theme: Theme) {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), theme.panel());
}

/// Draw the control panel with buttons, stats, legend and key help
pub fn draw_controls(
    sim: &Simulation,
    driver: &FrameDriver,
    buttons: &[Button],
    theme: Theme,
    mouse_pos: (f32, f32),
) {
    draw_panel_background(theme);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let text = theme.text();
    let muted = theme.muted_text();

    draw_text("FALLING SAND", px, 24.0, 22.0, text);

    let brush = format!("Brush: {} ({})", sim.active_material().name(), sim.brush_radius());
    draw_text(&brush, px, 300.0, 16.0, text);

    let (gw, gh) = sim.grid().dimensions();
    let stats = [
        format!("Grid: {}x{}", gw, gh),
        format!("Particles: {}", format_number(sim.population())),
        format!("Tick: {}", sim.ticks()),
        format!("Moved: {}", sim.last_report().map_or(0, |r| r.moved)),
        format!("Sweep: {:.2}ms | FPS: {}", driver.last_tick_ms, get_fps()),
    ];
    stats.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 325.0 + i as f32 * 16.0, 14.0, muted);
    });

    let (status, status_color) = if driver.is_running() {
        ("Running", Color::from_rgba(0, 200, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 410.0, 16.0, status_color);

    // Legend
    let legend_y = 440.0;
    for (i, material) in [Material::Sand, Material::Water, Material::Stone].into_iter().enumerate() {
        let y = legend_y + i as f32 * 20.0;
        if let Some(color) = swatch(material) {
            draw_rectangle(px, y - 10.0, 12.0, 12.0, color);
        }
        draw_text(material.description(), px + 18.0, y, 13.0, muted);
    }

    let help = [
        "Keys:",
        "1 Sand  2 Water  3 Stone",
        "E Erase  C Clear  T Theme",
        "[ ] Brush size",
        "Space Pause",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        let color = if i == 0 { text } else { muted };
        draw_text(line, px, 520.0 + i as f32 * 15.0, 13.0, color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(19_200), "19.2K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
