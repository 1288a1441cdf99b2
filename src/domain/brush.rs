use super::{Cell, Grid, Material, config::MIN_BRUSH_RADIUS, grid::fresh_jitter};
use rand::{Rng, RngCore};

/// Sparse circular stamp.
/// Each call touches a random subset of the cells inside the disk, so holding
/// the pointer fills the area over several ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    radius: u32,
    material: Material,
    /// Chance of leaving an in-disk cell untouched
    skip_probability: f64,
    /// Half-width of jitter assigned to painted cells
    jitter: f32,
}

impl Brush {
    pub fn new(radius: u32, material: Material, skip_probability: f64, jitter: f32) -> Self {
        Self {
            radius: radius.max(MIN_BRUSH_RADIUS),
            material,
            skip_probability: skip_probability.clamp(0.0, 1.0),
            jitter,
        }
    }

    pub const fn radius(&self) -> u32 {
        self.radius
    }

    pub const fn material(&self) -> Material {
        self.material
    }

    /// Set radius, never below one cell
    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius.max(MIN_BRUSH_RADIUS);
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Offsets (dx, dy) inside the filled disk dx² + dy² ≤ r²
    pub fn disk(&self) -> impl Iterator<Item = (i32, i32)> {
        let r = self.radius as i64;
        (-r..=r)
            .flat_map(move |dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(move |&(dx, dy)| dx * dx + dy * dy <= r * r)
            .map(|(dx, dy)| (dx as i32, dy as i32))
    }

    /// Absolute cells of the disk centred at (cx, cy), clipped to a
    /// width × height grid before the distance test
    pub fn cells(&self, cx: i32, cy: i32, width: usize, height: usize) -> impl Iterator<Item = (i32, i32)> {
        let r = self.radius as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        let (w, h) = (width as i64, height as i64);
        let (dy_min, dy_max) = ((-r).max(-cy), r.min(h - 1 - cy));
        let (dx_min, dx_max) = ((-r).max(-cx), r.min(w - 1 - cx));
        (dy_min..=dy_max)
            .flat_map(move |dy| (dx_min..=dx_max).map(move |dx| (dx, dy)))
            .filter(move |&(dx, dy)| dx * dx + dy * dy <= r * r)
            .map(move |(dx, dy)| ((cx + dx) as i32, (cy + dy) as i32))
    }

    /// Stamp the brush centred at (cx, cy). Returns the number of cells written.
    ///
    /// Erasing clears whatever is there. Placing only fills empty cells.
    pub fn paint(&self, grid: &mut Grid, cx: i32, cy: i32, rng: &mut dyn RngCore) -> usize {
        let (width, height) = grid.dimensions();
        let mut written = 0;
        for (x, y) in self.cells(cx, cy, width, height) {
            if rng.random::<f64>() < self.skip_probability {
                continue;
            }

            if self.material.is_empty() {
                if let Some(cell) = grid.get(x, y) {
                    grid.set(x, y, Cell { material: Material::Empty, immobile: false, ..cell });
                    written += 1;
                }
            } else if grid.is(x, y, Material::Empty) {
                let jitter = fresh_jitter(rng, self.jitter);
                grid.set(x, y, Cell::new(self.material, jitter));
                written += 1;
            }
        }
        written
    }
}
