pub mod direction;
pub mod duck;
