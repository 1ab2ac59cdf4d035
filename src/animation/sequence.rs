// src/animation/sequence.rs
//
// The fixed chain of shape nodes. Only the current node animates and draws;
// when its leg completes the chain moves one node along, bouncing at either end.

use nannou::prelude::*;

use super::AnimationState;
use crate::config::{Style, PALETTE_SIZE};
use crate::draw::square_rot_path;

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
}

impl Node {
    pub fn new(index: usize, step_size: f32) -> Self {
        Self {
            index,
            state: AnimationState::new(step_size),
        }
    }

    pub fn next(&self) -> Option<usize> {
        (self.index + 1 < PALETTE_SIZE).then_some(self.index + 1)
    }

    pub fn prev(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Neighbor in `dir`, or this node after calling `on_boundary` when there is none.
    pub fn get_next<F: FnOnce()>(&self, dir: i32, on_boundary: F) -> usize {
        let neighbor = if dir > 0 { self.next() } else { self.prev() };
        neighbor.unwrap_or_else(|| {
            on_boundary();
            self.index
        })
    }

    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) -> bool {
        self.state.update(on_complete)
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) -> bool {
        self.state.start_updating(on_start)
    }

    pub fn draw(&self, draw: &Draw, rect: Rect, style: &Style) {
        square_rot_path::draw_square_rot_path(
            draw,
            rect,
            self.state.scale,
            style.palette.color(self.index),
            style,
        );
    }
}

pub struct SquareRotPath {
    nodes: [Node; PALETTE_SIZE],
    current: usize,
    direction: i32,
}

impl SquareRotPath {
    pub fn new(step_size: f32) -> Self {
        Self {
            nodes: std::array::from_fn(|i| Node::new(i, step_size)),
            current: 0,
            direction: 1,
        }
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn draw(&self, draw: &Draw, rect: Rect, style: &Style) {
        self.current().draw(draw, rect, style);
    }

    /// Advances the current node one tick. On completion the chain moves to the
    /// neighboring node before `on_complete` is called with the finished checkpoint.
    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) -> bool {
        let mut finished = None;
        if !self.nodes[self.current].update(|checkpoint| finished = Some(checkpoint)) {
            return false;
        }

        let from = self.current;
        let mut at_boundary = false;
        self.current = self.nodes[from].get_next(self.direction, || at_boundary = true);
        if at_boundary {
            self.direction = -self.direction;
        }
        log::debug!(
            "node {} finished, now on node {} heading {:+}",
            from,
            self.current,
            self.direction
        );

        if let Some(checkpoint) = finished {
            on_complete(checkpoint);
        }
        true
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) -> bool {
        self.nodes[self.current].start_updating(on_start)
    }
}
