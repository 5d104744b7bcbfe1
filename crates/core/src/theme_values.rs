//! Built-in Shell design tokens, used when a configuration omits a section.

use phf::phf_ordered_map;

/// Root font size in px.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Breakpoint name → px. Order is the `all` iteration order.
pub static BREAKPOINTS: phf::OrderedMap<&'static str, u32> = phf_ordered_map! {
    "palm" => 719,
    "lap" => 720,
    "desk" => 1024,
    "wall" => 1440,
};

/// Default z-index layer value.
pub enum DefaultLayer {
    Index(i64),
    Nested(&'static [(&'static str, i64)]),
}

/// z-index layer name → value
pub static Z_LAYERS: phf::OrderedMap<&'static str, DefaultLayer> = phf_ordered_map! {
    "base" => DefaultLayer::Index(1),
    "header" => DefaultLayer::Index(3),
    "dropdown" => DefaultLayer::Index(5),
    "modal" => DefaultLayer::Index(10),
    "modal-elements" => DefaultLayer::Nested(&[("overlay", 0), ("content", 1), ("close-button", 2)]),
};

pub const GRID_COLUMNS: u32 = 12;

/// Largest column count a grid may be configured with.
pub const MAX_GRID_COLUMNS: u32 = 100;

/// Gutter between grid columns in px.
pub const GRID_GUTTER: f64 = 24.0;
