//! Simulation constants and tunables.
//!
//! Grid size and display scale are fixed for a run. The brush sparsity and
//! jitter magnitudes are "feel" values, kept on [`SimConfig`] so tests and
//! hosts can override them.

use super::Material;

pub const GRID_WIDTH: usize = 160;
pub const GRID_HEIGHT: usize = 120;

/// Display pixels per grid cell at scale 1
pub const CELL_SIZE: f32 = 5.0;

pub const DEFAULT_BRUSH_RADIUS: u32 = 4;
pub const MIN_BRUSH_RADIUS: u32 = 1;
/// Upper bound offered by the UI; the core itself only enforces the minimum
pub const MAX_BRUSH_RADIUS: u32 = 12;

pub const DEFAULT_MATERIAL: Material = Material::Sand;

/// Environment variable the host reads for a reproducible seed
pub const SEED_ENV_VAR: &str = "FALLING_SAND_SEED";

/// Runtime configuration for a simulation instance
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Chance that a cell inside the brush disk is left untouched per stamp
    pub brush_skip_probability: f64,
    /// Half-width of the jitter range assigned on grid init/reset
    pub init_jitter: f32,
    /// Half-width of the jitter range assigned to freshly painted cells
    pub paint_jitter: f32,
    pub brush_radius: u32,
    pub material: Material,
    /// Fixed RNG seed, `None` seeds from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            brush_skip_probability: 0.75,
            init_jitter: 10.0,
            paint_jitter: 12.5,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            material: DEFAULT_MATERIAL,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Override grid dimensions (builder pattern)
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the brush skip probability, clamped to [0, 1]
    pub fn with_brush_skip(mut self, probability: f64) -> Self {
        self.brush_skip_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Default config, seeded from `FALLING_SAND_SEED` when it parses as u64
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => config.with_seed(seed),
                Err(_) => {
                    log::warn!("Ignoring {}={:?}: not a u64", SEED_ENV_VAR, raw);
                    config
                }
            },
            Err(_) => config,
        }
    }
}
