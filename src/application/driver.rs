use super::{Simulation, intent::SharedIntent};
use crate::rendering::FrameSink;
use rand::RngCore;

/// FrameDriver runs one simulation step and one present per host frame.
/// Stopping only takes effect between frames, so a sweep is never cut short.
pub struct FrameDriver {
    running: bool,
    frames: u64,
    shared_intent: Option<SharedIntent>,
    pub last_tick_ms: f32,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
            shared_intent: None,
            last_tick_ms: 0.0,
        }
    }

    /// Sample pointer intent from a shared buffer at the start of each frame
    pub fn with_shared_intent(mut self, intent: SharedIntent) -> Self {
        self.shared_intent = Some(intent);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Simulation paused at frame {}", self.frames);
        }
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.running {
            log::info!("Simulation resumed");
        }
        self.running = true;
    }

    pub fn toggle(&mut self) {
        if self.running { self.stop() } else { self.resume() }
    }

    /// Apply input, tick, then present. Presents without ticking while stopped.
    /// Returns true if the simulation advanced.
    pub fn frame<R: RngCore>(&mut self, sim: &mut Simulation<R>, sink: &mut impl FrameSink) -> bool {
        if let Some(shared) = &self.shared_intent {
            sim.apply_intent(shared.sample());
        }

        let advanced = self.running;
        if advanced {
            let start = std::time::Instant::now();
            sim.tick();
            self.last_tick_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.frames += 1;
        }

        sink.present(sim.grid());
        advanced
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
