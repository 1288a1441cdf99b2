mod simulation;
mod viewport;
pub mod intent;
pub mod driver;

pub use simulation::Simulation;
pub use viewport::Viewport;
pub use intent::{PointerIntent, SharedIntent};
pub use driver::FrameDriver;
