//! Plain data types shared by the flock crates.
//!
//! Behavior lives in `flock_core`; this crate only carries the shapes.

pub mod data;

pub use data::direction::{Direction, ParseDirectionError};
pub use data::duck::{Duck, Identity, Species};
