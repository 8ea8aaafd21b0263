pub mod capture;
pub mod domain;
pub mod event;
pub mod match_detail;
pub mod tables;

pub use capture::{ELO_TYPE_HERO, EloEvent, EloPayload};
pub use domain::*;
pub use event::*;
pub use match_detail::*;
pub use tables::*;
