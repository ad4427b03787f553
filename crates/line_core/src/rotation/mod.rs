pub mod engine;
pub mod queue;
pub mod state;


pub use engine::{Line, RotationEngine};
pub use state::RotationState;
