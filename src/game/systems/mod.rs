pub mod movement;
pub mod encounter;
pub mod render;

pub use movement::*;
pub use encounter::*;
pub use render::*;
