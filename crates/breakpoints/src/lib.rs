pub mod expander;
pub mod media;

// Re-export main types
pub use expander::{BreakpointExpander, GeneratedRule};
pub use media::{render_media_blocks, ScopedRule};
