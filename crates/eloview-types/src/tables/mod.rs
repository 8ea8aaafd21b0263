//! Static name → domain id tables.
//!
//! The capture tool names objects after their in-game asset names. These
//! tables translate those names into ids that are stable across matches.
//! All tables are read-only constants.

pub mod buildings;
pub mod monsters;
pub mod spells;
pub mod wards;

pub use buildings::*;
pub use monsters::*;
pub use spells::*;
pub use wards::*;
