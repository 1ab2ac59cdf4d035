// src/draw/mod.rs
// The shape drawing module

pub mod square_rot_path;

pub use square_rot_path::{draw_square_rot_path, ShapeGeometry};

use nannou::color::Rgb8;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb8,
    pub stroke_weight: f32,
}
