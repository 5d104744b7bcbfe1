pub mod emit;
pub mod ir;

// Re-export main functions
pub use emit::{emit_css, emit_css_with, emit_rules, EmitOptions};
pub use ir::{create_qualified_rule, create_stylesheet, create_swc_declaration, ClassRule};

// Re-export SWC CSS types
pub use swc_css_ast::Stylesheet;
