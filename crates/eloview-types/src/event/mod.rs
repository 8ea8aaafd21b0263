pub mod baseview;
pub mod event;
pub mod payload;

pub use baseview::*;
pub use event::*;
pub use payload::*;
