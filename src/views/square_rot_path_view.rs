// src/views/square_rot_path_view.rs
//
// The surface: owns the node chain and its animator, forwards draw and tap events.

use nannou::prelude::*;
use std::time::Duration;

use crate::animation::{Animator, SquareRotPath};
use crate::config::{Settings, Style};

pub struct SquareRotPathView {
    path: SquareRotPath,
    animator: Animator,
    style: Style,
}

impl SquareRotPathView {
    pub fn new(settings: &Settings) -> Self {
        Self {
            path: SquareRotPath::new(settings.timing.step_size),
            animator: Animator::new(settings.timing.delay),
            style: settings.style,
        }
    }

    pub fn path(&self) -> &SquareRotPath {
        &self.path
    }

    pub fn tick_interval(&self) -> Duration {
        self.animator.interval()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Clears the surface and draws the current node.
    pub fn render(&self, draw: &Draw, bounds: Rect) {
        draw.background().color(self.style.background);
        self.path.draw(draw, bounds, &self.style);
    }

    /// Starts the current node's next leg. Returns false if one is already running.
    pub fn handle_tap(&mut self) -> bool {
        let animator = &mut self.animator;
        let started = self.path.start_updating(|| animator.start());
        if started {
            log::debug!("tap started node {}", self.path.current_index());
        }
        started
    }

    /// Feeds elapsed frame time to the animator and steps the chain once per due tick.
    /// Returns true if a leg completed during this call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let ticks = self.animator.due_ticks(dt);
        for _ in 0..ticks {
            let animator = &mut self.animator;
            if self.path.update(|_| animator.stop()) {
                return true;
            }
        }
        false
    }
}
