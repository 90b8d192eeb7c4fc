pub mod gfx;
pub mod gradient;

mod tests;
