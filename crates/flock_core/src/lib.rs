//! # Flock Core
//!
//! A flock of ducks behind one aggregate interface.
//!
//! Callers fill a [`Flock`] with members, then migrate it as a group. The
//! flock tracks its own position and path length, and forwards each leg to
//! every member so their individual flight logs stay in step.
//!
//! ## Example
//!
//! ```
//! use flock_core::{Direction, Duck, Flock};
//!
//! let mut flock: Flock<Duck> = Flock::new();
//! flock.fill(3).unwrap();
//! flock.migrate(Direction::North, 10.0).unwrap();
//! flock.migrate(Direction::East, 5.0).unwrap();
//!
//! assert_eq!(flock.position_x(), 5.0);
//! assert_eq!(flock.total_distance(), 15.0);
//! assert_eq!(flock.line_distance_from_start(), 11.18);
//! ```

/// Configuration loaded from `flock.toml`
pub mod config;
/// Error types and result alias
pub mod error;
/// The flock aggregate
pub mod flock;
/// Tracing subscriber setup
pub mod logging;
/// Member capability trait and the stock duck implementation
pub mod member;
/// Display rounding helpers
pub mod rounding;
/// Serializable read-out of a flock
pub mod snapshot;

pub use config::{AppConfig, FlockConfig, LoggingConfig};
pub use error::{FlockError, Result};
pub use flock::{Flock, FlockState};
pub use flock_data::{Direction, Duck, Identity, Species};
pub use logging::init_logging;
pub use member::{random_duck, FlockMember};
pub use snapshot::FlockSnapshot;
