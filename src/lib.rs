pub mod app;
pub mod model;

pub use crate::app::App;
pub use crate::model::flock::Flock;
