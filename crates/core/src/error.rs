//! Error kinds raised while converting units, resolving tokens and reading
//! breakpoint requests.
//!
//! Every variant is fatal for the stylesheet being generated: callers are
//! expected to fix the configuration rather than recover.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// A unit function received something that is not a number.
    #[error("{function}: `{value}` is not a number")]
    InvalidArgument { function: &'static str, value: String },

    /// A breakpoint name has no entry in the breakpoint map.
    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    /// A z-index layer (or one of its nested layers) is not configured.
    #[error("unknown z-index layer `{}`", display_layer(.layer, .nested.as_deref()))]
    UnknownZLayer {
        layer: String,
        nested: Option<String>,
    },

    /// A nested z-index layer was looked up without naming the nested key.
    #[error("z-index layer `{0}` is a nested map; a nested layer name is required")]
    NestedZLayer(String),

    /// A breakpoint request has a shape that cannot be expanded.
    #[error("invalid breakpoint descriptor: {0}")]
    InvalidDescriptor(String),
}

fn display_layer(layer: &str, nested: Option<&str>) -> String {
    match nested {
        Some(nested) => format!("{}.{}", layer, nested),
        None => layer.to_string(),
    }
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
