pub mod config {
    pub use flock_core::config::*;
}
pub mod error {
    pub use flock_core::error::*;
}
pub mod flock {
    pub use flock_core::flock::*;
    pub use flock_core::snapshot::FlockSnapshot;
}
pub mod member {
    pub use flock_core::member::*;
}
pub mod state {
    pub use flock_data::*;
}
