// Domain layer - Grid store, materials, rules, sweep, brush
pub mod domain;

// Application layer - Simulation state, input intent, frame driving
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Brush, Cell, Grid, Material, SimConfig};
pub use application::{FrameDriver, SharedIntent, Simulation, Viewport};
pub use rendering::{FrameSink, PixelBuffer, Theme};
