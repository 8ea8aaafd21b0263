pub mod entity;
pub mod participant;
pub mod position;
pub mod team;

pub use entity::*;
pub use participant::*;
pub use position::*;
pub use team::*;
