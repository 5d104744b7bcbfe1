pub mod config;
pub mod descriptor;
pub mod error;
pub mod loader;
pub mod resolve;
pub mod theme_values;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use config::{BreakpointMap, GridSettings, HelperSettings, ShellConfig, ZIndexMap, ZLayer};
pub use descriptor::{Breakpoint, BreakpointRequest, Descriptor};
pub use error::{Result, ShellError};
pub use loader::{load_config_from_json, ConfigError};
pub use resolve::{resolve_breakpoint, resolve_z_index};
pub use types::{Declaration, Limit, Number, Unit, Value};
pub use units::{strip_unit, to_em, to_rem};
