pub mod ai;
pub mod ball;
pub mod input;
pub mod scoring;

pub use ai::*;
pub use ball::*;
pub use input::*;
pub use scoring::*;
