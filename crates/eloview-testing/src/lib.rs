//! Testing infrastructure for eloview integration tests.
//!
//! - `MatchFixture`: a synthetic match whose capture log and match detail agree
//! - `TestWorld`: an isolated directory holding fixture files

pub mod fixtures;
pub mod world;

pub use fixtures::MatchFixture;
pub use world::TestWorld;
