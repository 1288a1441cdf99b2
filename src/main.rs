use macroquad::prelude::*;
use falling_sand::{
    FrameDriver, PixelBuffer, SimConfig, Simulation, Theme, Viewport,
    domain::config::CELL_SIZE,
    rendering::{self, GridTexture},
    ui, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Sand".to_owned(),
        window_width: 1020,
        window_height: 640,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimConfig::from_env();
    match config.seed {
        Some(seed) => log::info!("Falling sand starting with seed {}", seed),
        None => log::info!("Falling sand starting with random seed"),
    }

    let mut sim = Simulation::new(config);
    let mut driver = FrameDriver::new();
    let mut theme = Theme::default();

    let (width, height) = sim.grid().dimensions();
    let mut viewport = Viewport::new(width, height, CELL_SIZE);
    let mut pixels = PixelBuffer::new(width, height);
    let texture = GridTexture::new(&pixels);

    loop {
        let mouse_pos = mouse_position();

        // Keep the grid centred in whatever space the panel leaves
        viewport.fit(ui::grid_area_width(), ui::grid_area_height(), 1.0);

        let buttons = ui::create_buttons(sim.active_material());
        input::process_button_clicks(&mut sim, &mut theme, &buttons, mouse_pos);
        input::process_keyboard_input(&mut sim, &mut driver, &mut theme);
        input::handle_pointer(&mut sim, &viewport, mouse_pos);

        // Brush, sweep, rasterize
        driver.frame(&mut sim, &mut pixels);
        texture.upload(&pixels);

        clear_background(theme.background());
        rendering::draw_frame(&texture, &viewport, theme);
        rendering::draw_brush_outline(&viewport, sim.brush_radius(), mouse_pos, theme);

        let buttons = ui::create_buttons(sim.active_material());
        rendering::draw_controls(&sim, &driver, &buttons, theme, mouse_pos);

        next_frame().await;
    }
}
