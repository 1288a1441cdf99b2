/// Viewport maps between screen pixels and grid cells.
/// The grid is drawn at a uniform scale with its top-left at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Screen pixels per grid cell
    pub scale: f32,
    grid_width: usize,
    grid_height: usize,
}

impl Viewport {
    pub fn new(grid_width: usize, grid_height: usize, scale: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale,
            grid_width,
            grid_height,
        }
    }

    /// Largest whole-pixel scale (at least `min_scale`) that fits the area,
    /// centred inside it
    pub fn fit(&mut self, area_width: f32, area_height: f32, min_scale: f32) {
        let fit_x = area_width / self.grid_width as f32;
        let fit_y = area_height / self.grid_height as f32;
        self.scale = fit_x.min(fit_y).floor().max(min_scale);
        let (width, height) = self.screen_size();
        self.origin_x = ((area_width - width) / 2.0).max(0.0).floor();
        self.origin_y = ((area_height - height) / 2.0).max(0.0).floor();
    }

    /// Size of the drawn grid in screen pixels
    pub fn screen_size(&self) -> (f32, f32) {
        (
            self.grid_width as f32 * self.scale,
            self.grid_height as f32 * self.scale,
        )
    }

    /// Check if a screen point lies over the grid
    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        let (width, height) = self.screen_size();
        screen_x >= self.origin_x
            && screen_y >= self.origin_y
            && screen_x < self.origin_x + width
            && screen_y < self.origin_y + height
    }

    /// Convert screen coordinates to grid coordinates, clamped to the grid
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let grid_x = ((screen_x - self.origin_x) / self.scale).floor() as i32;
        let grid_y = ((screen_y - self.origin_y) / self.scale).floor() as i32;
        (
            grid_x.clamp(0, self.grid_width as i32 - 1),
            grid_y.clamp(0, self.grid_height as i32 - 1),
        )
    }

    /// Convert grid coordinates to the screen position of the cell's corner
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (
            grid_x as f32 * self.scale + self.origin_x,
            grid_y as f32 * self.scale + self.origin_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_cell_corner() {
        let mut viewport = Viewport::new(160, 120, 5.0);
        viewport.origin_x = 10.0;
        viewport.origin_y = 20.0;
        let (sx, sy) = viewport.grid_to_screen(7, 3);
        assert_eq!(viewport.screen_to_grid(sx + 2.0, sy + 2.0), (7, 3));
    }

    #[test]
    fn test_screen_to_grid_clamps() {
        let viewport = Viewport::new(160, 120, 5.0);
        assert_eq!(viewport.screen_to_grid(-40.0, -1.0), (0, 0));
        assert_eq!(viewport.screen_to_grid(5000.0, 5000.0), (159, 119));
    }

    #[test]
    fn test_contains() {
        let viewport = Viewport::new(10, 10, 4.0);
        assert!(viewport.contains(0.0, 0.0));
        assert!(viewport.contains(39.9, 39.9));
        assert!(!viewport.contains(40.0, 10.0));
        assert!(!viewport.contains(-0.1, 10.0));
    }

    #[test]
    fn test_fit_centres_grid() {
        let mut viewport = Viewport::new(160, 120, 1.0);
        viewport.fit(820.0, 700.0, 1.0);
        assert_eq!(viewport.scale, 5.0);
        assert_eq!(viewport.origin_x, 10.0);
        assert_eq!(viewport.origin_y, 50.0);
    }

    #[test]
    fn test_fit_respects_min_scale() {
        let mut viewport = Viewport::new(160, 120, 5.0);
        viewport.fit(100.0, 100.0, 2.0);
        assert_eq!(viewport.scale, 2.0);
        assert_eq!((viewport.origin_x, viewport.origin_y), (0.0, 0.0));
    }
}
