mod material;
mod grid;
pub mod config;
pub mod rules;
pub mod sweep;
mod brush;

pub use material::Material;
pub use grid::{Cell, Grid, fresh_jitter};
pub use config::SimConfig;
pub use rules::{MaterialRule, SandRule, WaterRule, StoneRule, rule_for, step_cell};
pub use sweep::{ScanOrder, SweepReport, sweep, sweep_with_order};
pub use brush::Brush;
