pub mod keys;
pub mod render;
