pub mod event;
mod number;
pub mod payload;

pub use event::*;
pub use payload::*;
