// src/animation/state.rs
//
// Per-node progress. A node rests at a checkpoint (0 or 1) and, once started,
// walks scale toward the other checkpoint one tick at a time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub scale: f32,
    pub direction: f32,  // -1, 0 or 1
    pub checkpoint: f32, // scale at the start of the current leg
    step_size: f32,
}

impl AnimationState {
    pub fn new(step_size: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            checkpoint: 0.0,
            step_size,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }

    /// Advances one tick. Returns true when this tick completed the leg,
    /// in which case `on_complete` was called with the new checkpoint.
    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) -> bool {
        self.scale += self.step_size * self.direction;
        if (self.scale - self.checkpoint).abs() > 1.0 {
            self.scale = self.checkpoint + self.direction;
            self.direction = 0.0;
            self.checkpoint = self.scale;
            on_complete(self.checkpoint);
            return true;
        }
        false
    }

    /// Starts a leg away from the current checkpoint. Ignored mid-leg.
    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) -> bool {
        if self.is_animating() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.checkpoint;
        on_start();
        true
    }
}
