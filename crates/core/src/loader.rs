use crate::config::{BreakpointMap, GridSettings, HelperSettings, ShellConfig, ZIndexMap};
use crate::descriptor::BreakpointRequest;
use crate::theme_values::MAX_GRID_COLUMNS;
use crate::types::{Number, Unit, Value};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base font size must be a positive number, got `{0}`")]
    InvalidBaseFontSize(String),

    #[error("breakpoint `{name}` must be a non-negative pixel value, got `{value}`")]
    InvalidBreakpoint { name: String, value: String },

    #[error("grid columns must be between 1 and {max}, got {0}", max = MAX_GRID_COLUMNS)]
    InvalidGridColumns(u32),

    #[error("grid gutter must be a pixel value, got `{0}`")]
    InvalidGutter(String),
}

/// A number, or a string such as `"16px"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn into_value(self) -> Value {
        match self {
            RawNumber::Number(n) => Value::from(n),
            RawNumber::Text(s) => Value::from(s.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGrid {
    enabled: Option<bool>,
    columns: Option<u32>,
    gutter: Option<RawNumber>,
    breakpoints: Option<BreakpointRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    base_font_size: Option<RawNumber>,
    breakpoints: Option<IndexMap<String, RawNumber>>,
    z_layers: Option<ZIndexMap>,
    helpers: Option<HelperSettings>,
    grid: Option<RawGrid>,
}

/// Loads a Shell configuration from a JSON string.
///
/// Missing sections fall back to the built-in tokens.
///
/// ```json
/// {
///   "base_font_size": "16px",
///   "breakpoints": { "palm": 719, "lap": 720, "desk": 1024 },
///   "z_layers": { "header": 3, "modal-elements": { "close-button": 1 } },
///   "helpers": { "responsive": true, "breakpoints": ["lap", "desk"] },
///   "grid": { "columns": 12, "gutter": "24px", "breakpoints": "all" }
/// }
/// ```
pub fn load_config_from_json(json_str: &str) -> Result<ShellConfig, ConfigError> {
    let raw: RawConfig = serde_json::from_str(json_str)?;
    let mut config = ShellConfig::default();

    if let Some(size) = raw.base_font_size {
        let size = size.into_value();
        config.base_font_size = positive_px(&size)
            .ok_or_else(|| ConfigError::InvalidBaseFontSize(size.to_string()))?;
    }

    if let Some(breakpoints) = raw.breakpoints {
        config.breakpoints = load_breakpoints(breakpoints)?;
    }

    if let Some(z_layers) = raw.z_layers {
        config.z_layers = z_layers;
    }

    if let Some(helpers) = raw.helpers {
        config.helpers = helpers;
    }

    if let Some(grid) = raw.grid {
        config.grid = load_grid(grid, config.grid)?;
    }

    tracing::debug!(
        breakpoints = config.breakpoints.len(),
        z_layers = config.z_layers.len(),
        base_font_size = %config.base_font_size,
        "loaded shell config"
    );

    Ok(config)
}

fn load_breakpoints(raw: IndexMap<String, RawNumber>) -> Result<BreakpointMap, ConfigError> {
    let mut map = BreakpointMap::new();
    for (name, value) in raw {
        let value = value.into_value();
        match pixel_magnitude(&value) {
            Some(px) if px >= 0.0 => map.insert(name, px),
            _ => {
                return Err(ConfigError::InvalidBreakpoint {
                    name,
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(map)
}

fn load_grid(raw: RawGrid, defaults: GridSettings) -> Result<GridSettings, ConfigError> {
    let columns = raw.columns.unwrap_or(defaults.columns);
    if !(1..=MAX_GRID_COLUMNS).contains(&columns) {
        return Err(ConfigError::InvalidGridColumns(columns));
    }

    let gutter = match raw.gutter {
        Some(gutter) => {
            let value = gutter.into_value();
            match pixel_magnitude(&value) {
                Some(px) if px >= 0.0 => Number::px(px),
                _ => return Err(ConfigError::InvalidGutter(value.to_string())),
            }
        }
        None => defaults.gutter,
    };

    Ok(GridSettings {
        enabled: raw.enabled.unwrap_or(defaults.enabled),
        columns,
        gutter,
        breakpoints: raw.breakpoints.unwrap_or(defaults.breakpoints),
    })
}

/// Magnitude of a unitless or `px` number.
fn pixel_magnitude(value: &Value) -> Option<f64> {
    match value.as_number()? {
        Number { value, unit: None } | Number { value, unit: Some(Unit::Px) } => Some(*value),
        _ => None,
    }
}

fn positive_px(value: &Value) -> Option<Number> {
    pixel_magnitude(value)
        .filter(|px| *px > 0.0)
        .map(Number::px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZLayer;
    use crate::descriptor::Descriptor;
    use crate::types::Limit;

    #[test]
    fn test_load_full_config() {
        let json = r#"{
            "base_font_size": "20px",
            "breakpoints": { "palm": 599, "lap": "600px", "desk": 1000 },
            "z_layers": { "header": 3, "modal-elements": { "close-button": 1 } },
            "helpers": { "responsive": false },
            "grid": { "columns": 6, "gutter": "30px", "breakpoints": ["lap", "max"] }
        }"#;

        let config = load_config_from_json(json).unwrap();

        assert_eq!(config.base_font_size, Number::px(20.0));
        let names: Vec<&str> = config.breakpoints.names().collect();
        assert_eq!(names, vec!["palm", "lap", "desk"]);
        assert_eq!(config.breakpoints.get("lap"), Some(600.0));
        assert_eq!(config.z_layers.get("header"), Some(&ZLayer::Index(3)));
        assert_eq!(config.z("modal-elements", Some("close-button")).unwrap(), 1);
        assert!(config.helpers.enabled);
        assert!(!config.helpers.responsive);
        assert_eq!(config.grid.columns, 6);
        assert_eq!(config.grid.gutter, Number::px(30.0));
        assert_eq!(
            config.grid.breakpoints,
            BreakpointRequest::single(Descriptor::named("lap").with_limit(Limit::Max))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_invalid_base_font_size() {
        let err = load_config_from_json(r#"{ "base_font_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseFontSize(_)));

        let err = load_config_from_json(r#"{ "base_font_size": "large" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseFontSize(_)));
    }

    #[test]
    fn test_invalid_breakpoint() {
        let err = load_config_from_json(r#"{ "breakpoints": { "lap": "wide" } }"#).unwrap_err();
        match err {
            ConfigError::InvalidBreakpoint { name, value } => {
                assert_eq!(name, "lap");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(load_config_from_json(r#"{ "breakpoints": { "lap": "45em" } }"#).is_err());
    }

    #[test]
    fn test_invalid_grid() {
        assert!(matches!(
            load_config_from_json(r#"{ "grid": { "columns": 0 } }"#),
            Err(ConfigError::InvalidGridColumns(0))
        ));
        assert!(matches!(
            load_config_from_json(r#"{ "grid": { "columns": 4000000000 } }"#),
            Err(ConfigError::InvalidGridColumns(4000000000))
        ));
        assert_eq!(
            load_config_from_json(r#"{ "grid": { "columns": 100 } }"#)
                .unwrap()
                .grid
                .columns,
            100
        );
        assert!(matches!(
            load_config_from_json(r#"{ "grid": { "breakpoints": ["all", 900] } }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_misspelled_nested_keys_are_rejected() {
        assert!(matches!(
            load_config_from_json(r#"{ "grid": { "colums": 6 } }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            load_config_from_json(r#"{ "helpers": { "responsiv": false } }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(load_config_from_json("invalid json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            load_config_from_json(r#"{ "colours": {} }"#),
            Err(ConfigError::Json(_))
        ));
    }
}
