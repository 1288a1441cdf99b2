use super::Material;
use rand::{Rng, RngCore};

/// Full state of one cell, copied out of / into the grid store.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Cell {
    pub material: Material,
    /// Set once a stone has failed to move; meaningless for other materials
    pub immobile: bool,
    /// Render-time colour variance, fixed when the cell is created
    pub jitter: f32,
}

impl Cell {
    pub const fn new(material: Material, jitter: f32) -> Self {
        Self { material, immobile: false, jitter }
    }
}

/// Draw a jitter value uniformly from [-half_width, +half_width)
pub fn fresh_jitter<R: RngCore + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half_width
}

/// Grid stores material, immobility and jitter in parallel arrays.
/// Every mutator touches all three so a cell is never half-updated.
pub struct Grid {
    width: usize,
    height: usize,
    materials: Vec<Material>,
    immobile: Vec<bool>,
    jitter: Vec<f32>,
}

impl Grid {
    /// Create an all-empty grid with fresh jitter per cell
    pub fn new<R: RngCore + ?Sized>(width: usize, height: usize, rng: &mut R, jitter: f32) -> Self {
        let len = width * height;
        let mut grid = Self {
            width,
            height,
            materials: vec![Material::Empty; len],
            immobile: vec![false; len],
            jitter: vec![0.0; len],
        };
        grid.reset(rng, jitter);
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Convert 2D coordinates to 1D index. Caller checks bounds.
    const fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.in_bounds(x, y).then(|| {
            let idx = self.index(x, y);
            Cell {
                material: self.materials[idx],
                immobile: self.immobile[idx],
                jitter: self.jitter[idx],
            }
        })
    }

    /// Material at position, `None` outside the grid
    pub fn material_at(&self, x: i32, y: i32) -> Option<Material> {
        self.in_bounds(x, y).then(|| self.materials[self.index(x, y)])
    }

    /// True only for in-bounds cells holding `material`
    pub fn is(&self, x: i32, y: i32, material: Material) -> bool {
        self.material_at(x, y) == Some(material)
    }

    /// Overwrite a cell; out-of-bounds writes are ignored.
    /// Empty cells never keep the immobile flag.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.materials[idx] = cell.material;
        self.immobile[idx] = cell.immobile && !cell.material.is_empty();
        self.jitter[idx] = cell.jitter;
    }

    /// Mark a non-empty cell as settled
    pub fn mark_immobile(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.immobile[idx] = !self.materials[idx].is_empty();
        }
    }

    /// Copy the full cell at `src` into `dst`, leaving `src` empty.
    /// The source keeps its jitter; only material and flag are cleared.
    pub fn move_cell(&mut self, src: (i32, i32), dst: (i32, i32)) {
        debug_assert!(self.in_bounds(src.0, src.1) && self.in_bounds(dst.0, dst.1));
        let from = self.index(src.0, src.1);
        let to = self.index(dst.0, dst.1);
        self.materials[to] = self.materials[from];
        self.immobile[to] = self.immobile[from];
        self.jitter[to] = self.jitter[from];
        self.materials[from] = Material::Empty;
        self.immobile[from] = false;
    }

    /// Exchange the full state of two cells
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        debug_assert!(self.in_bounds(a.0, a.1) && self.in_bounds(b.0, b.1));
        let i = self.index(a.0, a.1);
        let j = self.index(b.0, b.1);
        self.materials.swap(i, j);
        self.immobile.swap(i, j);
        self.jitter.swap(i, j);
    }

    /// Reinitialize every cell to empty with fresh jitter
    pub fn reset<R: RngCore + ?Sized>(&mut self, rng: &mut R, jitter: f32) {
        self.materials.fill(Material::Empty);
        self.immobile.fill(false);
        self.jitter.iter_mut().for_each(|j| *j = fresh_jitter(rng, jitter));
    }

    /// Number of non-empty cells
    pub fn population(&self) -> usize {
        self.materials.iter().filter(|m| !m.is_empty()).count()
    }

    /// Row slices of materials and jitter, for renderers
    pub fn row(&self, y: usize) -> (&[Material], &[f32]) {
        let start = y * self.width;
        let end = start + self.width;
        (&self.materials[start..end], &self.jitter[start..end])
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let idx = y * self.width + x;
                let cell = Cell {
                    material: self.materials[idx],
                    immobile: self.immobile[idx],
                    jitter: self.jitter[idx],
                };
                (x, y, cell)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn grid(width: usize, height: usize) -> Grid {
        let mut rng = Pcg32::seed_from_u64(1);
        Grid::new(width, height, &mut rng, 10.0)
    }

    #[test]
    fn test_new_grid_is_empty_with_bounded_jitter() {
        let grid = grid(16, 8);
        assert_eq!(grid.population(), 0);
        for (_, _, cell) in grid.iter_cells() {
            assert_eq!(cell.material, Material::Empty);
            assert!(!cell.immobile);
            assert!(cell.jitter >= -10.0 && cell.jitter <= 10.0);
        }
    }

    #[test]
    fn test_bounds() {
        let grid = grid(4, 3);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 3));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.material_at(0, -1), None);
    }

    #[test]
    fn test_out_of_bounds_set_is_ignored() {
        let mut grid = grid(4, 3);
        grid.set(-1, 0, Cell::new(Material::Sand, 0.0));
        grid.set(0, 3, Cell::new(Material::Sand, 0.0));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_empty_never_immobile() {
        let mut grid = grid(4, 3);
        grid.set(1, 1, Cell { material: Material::Empty, immobile: true, jitter: 0.0 });
        assert!(!grid.get(1, 1).unwrap().immobile);
        grid.mark_immobile(1, 1);
        assert!(!grid.get(1, 1).unwrap().immobile);
    }

    #[test]
    fn test_move_carries_full_cell() {
        let mut grid = grid(4, 3);
        grid.set(1, 0, Cell { material: Material::Stone, immobile: true, jitter: 3.5 });
        grid.move_cell((1, 0), (1, 2));

        let moved = grid.get(1, 2).unwrap();
        assert_eq!(moved, Cell { material: Material::Stone, immobile: true, jitter: 3.5 });

        let source = grid.get(1, 0).unwrap();
        assert_eq!(source.material, Material::Empty);
        assert!(!source.immobile);
    }

    #[test]
    fn test_swap_exchanges_full_cells() {
        let mut grid = grid(4, 3);
        let sand = Cell::new(Material::Sand, -2.0);
        let water = Cell::new(Material::Water, 6.0);
        grid.set(0, 0, sand);
        grid.set(0, 1, water);
        grid.swap((0, 0), (0, 1));
        assert_eq!(grid.get(0, 0), Some(water));
        assert_eq!(grid.get(0, 1), Some(sand));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut grid = grid(4, 3);
        let mut rng = Pcg32::seed_from_u64(2);
        grid.set(0, 0, Cell { material: Material::Stone, immobile: true, jitter: 1.0 });
        grid.set(2, 1, Cell::new(Material::Water, 1.0));
        grid.reset(&mut rng, 10.0);
        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, _, c)| !c.immobile));
    }

    #[test]
    fn test_row_slices() {
        let mut grid = grid(3, 2);
        grid.set(2, 1, Cell::new(Material::Water, 4.0));
        let (materials, jitter) = grid.row(1);
        assert_eq!(materials, &[Material::Empty, Material::Empty, Material::Water]);
        assert_eq!(jitter[2], 4.0);
    }
}
