/// Fixed timestep scheduling for the simulation
///
/// Frame time is handed in by the caller (a window event loop, or a headless
/// driver feeding synthetic frames), and the scheduler answers how many fixed
/// simulation ticks to run. Every state machine and physics step sees exactly
/// `FIXED_TIMESTEP` per tick, which keeps attack timing frame-accurate.
use std::time::Duration;

/// Target simulation rate (60 ticks per second)
pub const TICKS_PER_SECOND: u32 = 60;

/// Duration of one simulation tick in seconds
pub const FIXED_TIMESTEP: f32 = 1.0 / TICKS_PER_SECOND as f32;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Convert a frame count to seconds at the fixed simulation rate
pub fn frames_to_secs(frames: u32) -> f32 {
    frames as f32 * FIXED_TIMESTEP
}

/// Fixed-step tick scheduler
#[derive(Debug)]
pub struct TickScheduler {
    /// Frame time not yet consumed by a tick
    accumulator: Duration,

    /// Whether the simulation is paused
    paused: bool,

    /// Total frames handed to the scheduler
    frame_count: u64,

    /// Total ticks handed out
    tick_count: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Feed one frame's worth of elapsed time, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop whatever could not be caught up instead of carrying a backlog
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Simulation fell behind, dropping {:?} of frame time",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Interpolation alpha for rendering between ticks
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
