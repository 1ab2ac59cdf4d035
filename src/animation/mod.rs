pub mod animator;
pub mod scale;
pub mod sequence;
pub mod state;

pub use animator::Animator;
pub use scale::{divide_scale, inverse, max_scale, sinify, PARTS};
pub use sequence::{Node, SquareRotPath};
pub use state::AnimationState;
