pub mod generator;
pub mod grid;
pub mod helpers;
pub mod z_index;

// Re-export main types
pub use generator::{HelperError, HelperGenerator};
pub use helpers::{Helper, HELPERS};
