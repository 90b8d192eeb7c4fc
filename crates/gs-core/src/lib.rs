pub mod camera;
pub mod error;

mod tests;
