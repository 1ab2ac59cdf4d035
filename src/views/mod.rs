// src/views/mod.rs

pub mod square_rot_path_view;

pub use square_rot_path_view::SquareRotPathView;
