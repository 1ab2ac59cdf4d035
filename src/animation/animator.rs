// src/animation/animator.rs
//
// Fixed-interval tick source. Frame time goes in, whole ticks come out while running.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Animator {
    running: bool,
    interval: Duration,
    pending: Duration,
    first_frame: bool,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
            pending: Duration::ZERO,
            first_frame: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.pending = Duration::ZERO;
            self.first_frame = true;
        }
    }

    /// Stops immediately. Any partially elapsed interval is dropped.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = Duration::ZERO;
        self.first_frame = false;
    }

    /// Number of ticks due after `dt` of frame time.
    /// The first frame after `start` always yields exactly one tick, whatever
    /// time passed while idle.
    pub fn due_ticks(&mut self, dt: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        if self.first_frame {
            self.first_frame = false;
            return 1;
        }

        self.pending += dt;
        let ticks = self.pending.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.pending -= self.interval * ticks;
        ticks
    }
}
