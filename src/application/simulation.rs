use crate::domain::{Brush, Grid, Material, SimConfig, SweepReport, sweep};
use super::intent::PointerIntent;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Simulation owns the grid and everything that mutates it.
/// Input only updates the pointer intent; the grid changes inside `tick`
/// and `clear`.
pub struct Simulation<R: RngCore = Pcg32> {
    grid: Grid,
    brush: Brush,
    intent: PointerIntent,
    rng: R,
    config: SimConfig,
    ticks: u64,
    last_report: Option<SweepReport>,
}

impl Simulation<Pcg32> {
    /// Create a simulation seeded from the config, or from the thread RNG
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RngCore> Simulation<R> {
    /// Create a simulation driven by the given random source
    pub fn with_rng(config: SimConfig, mut rng: R) -> Self {
        let grid = Grid::new(config.width, config.height, &mut rng, config.init_jitter);
        let brush = Brush::new(
            config.brush_radius,
            config.material,
            config.brush_skip_probability,
            config.paint_jitter,
        );
        Self {
            grid,
            brush,
            intent: PointerIntent::default(),
            rng,
            config,
            ticks: 0,
            last_report: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_material(&self) -> Material {
        self.brush.material()
    }

    pub fn brush_radius(&self) -> u32 {
        self.brush.radius()
    }

    /// Ticks since start or the last clear
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_painting(&self) -> bool {
        self.intent.held
    }

    pub fn intent(&self) -> PointerIntent {
        self.intent
    }

    pub fn last_report(&self) -> Option<SweepReport> {
        self.last_report
    }

    pub fn set_active_material(&mut self, material: Material) {
        if material != self.brush.material() {
            log::info!("Active material: {}", material.name());
        }
        self.brush.set_material(material);
    }

    /// Set brush radius, clamped to at least one cell
    pub fn set_brush_radius(&mut self, radius: u32) {
        self.brush.set_radius(radius);
        log::debug!("Brush radius: {}", self.brush.radius());
    }

    /// Start painting at a grid coordinate. Off-grid presses are ignored.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if self.grid.in_bounds(x, y) {
            self.intent.press(x, y);
        }
    }

    /// Track the pointer. Off-grid positions are ignored.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if self.grid.in_bounds(x, y) {
            self.intent.track(x, y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.intent.release();
    }

    /// Replace the local intent with one sampled from a shared buffer.
    /// Out-of-range targets are dropped; a pending clear is applied now.
    pub fn apply_intent(&mut self, intent: PointerIntent) {
        if intent.clear_requested {
            self.clear();
        }
        let target = intent.target.filter(|&(x, y)| self.grid.in_bounds(x, y));
        self.intent = PointerIntent {
            target: target.or(self.intent.target),
            held: intent.held && target.is_some(),
            tap: intent.tap && target.is_some(),
            clear_requested: false,
        };
    }

    /// Reset every cell to empty with fresh jitter
    pub fn clear(&mut self) {
        self.grid.reset(&mut self.rng, self.config.init_jitter);
        self.ticks = 0;
        self.last_report = None;
        log::info!("Grid cleared");
    }

    /// Advance one step: stamp the brush if held or tapped, then sweep the grid
    pub fn tick(&mut self) {
        if let Some((x, y)) = self.intent.paint_target() {
            self.brush.paint(&mut self.grid, x, y, &mut self.rng);
        }
        self.intent.end_tick();

        let report = sweep(&mut self.grid, &mut self.rng);
        self.ticks += 1;
        self.last_report = Some(report);
        log::trace!("Tick {}: {:?}, {} moved", self.ticks, report.order, report.moved);
    }
}
