use crate::descriptor::BreakpointRequest;
use crate::error::Result;
use crate::resolve::{resolve_breakpoint, resolve_z_index};
use crate::theme_values::{self, DefaultLayer};
use crate::types::{Number, Value};
use crate::units::{to_em, to_rem};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered breakpoint name → px map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakpointMap {
    map: IndexMap<String, f64>,
}

impl BreakpointMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, px: f64) {
        self.map.insert(name.into(), px);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.map.get(name).copied()
    }

    /// Breakpoint names in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for BreakpointMap {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A z-index layer: a plain index, or one level of nested sub-layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZLayer {
    Index(i64),
    Nested(IndexMap<String, i64>),
}

/// Ordered z-index layer map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZIndexMap {
    map: IndexMap<String, ZLayer>,
}

impl ZIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, layer: impl Into<String>, value: ZLayer) {
        self.map.insert(layer.into(), value);
    }

    pub fn get(&self, layer: &str) -> Option<&ZLayer> {
        self.map.get(layer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZLayer)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ZLayer)> for ZIndexMap {
    fn from_iter<T: IntoIterator<Item = (S, ZLayer)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Helper class switches
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperSettings {
    pub enabled: bool,
    /// Also emit `-from-<bp>` / `-up-to-<bp>` variants
    pub responsive: bool,
    pub breakpoints: BreakpointRequest,
}

impl Default for HelperSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            responsive: true,
            breakpoints: BreakpointRequest::All(None),
        }
    }
}

/// Grid switches
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub enabled: bool,
    pub columns: u32,
    /// Gutter between columns, in px
    pub gutter: Number,
    pub breakpoints: BreakpointRequest,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            columns: theme_values::GRID_COLUMNS,
            gutter: Number::px(theme_values::GRID_GUTTER),
            breakpoints: BreakpointRequest::All(None),
        }
    }
}

/// Shell configuration
///
/// Built once (from defaults or [`crate::loader::load_config_from_json`]) and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub base_font_size: Number,
    pub breakpoints: BreakpointMap,
    pub z_layers: ZIndexMap,
    pub helpers: HelperSettings,
    pub grid: GridSettings,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            base_font_size: Number::px(theme_values::BASE_FONT_SIZE),
            breakpoints: default_breakpoints(),
            z_layers: default_z_layers(),
            helpers: HelperSettings::default(),
            grid: GridSettings::default(),
        }
    }
}

impl ShellConfig {
    /// `value` in em, relative to the base font size.
    pub fn em(&self, value: &Value) -> Result<Number> {
        to_em(value, &Value::Number(self.base_font_size.clone()))
    }

    /// `value` in rem.
    pub fn rem(&self, value: &Value) -> Result<Number> {
        to_rem(value, &self.base_font_size)
    }

    /// Breakpoint `name` in em.
    pub fn bp(&self, name: &str) -> Result<Number> {
        resolve_breakpoint(&self.breakpoints, name)
    }

    /// z-index of `layer` (or `layer.nested`).
    pub fn z(&self, layer: &str, nested: Option<&str>) -> Result<i64> {
        resolve_z_index(&self.z_layers, layer, nested)
    }
}

pub fn default_breakpoints() -> BreakpointMap {
    theme_values::BREAKPOINTS
        .entries()
        .map(|(name, px)| (*name, f64::from(*px)))
        .collect()
}

pub fn default_z_layers() -> ZIndexMap {
    theme_values::Z_LAYERS
        .entries()
        .map(|(name, layer)| {
            let layer = match layer {
                DefaultLayer::Index(i) => ZLayer::Index(*i),
                DefaultLayer::Nested(entries) => ZLayer::Nested(
                    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                ),
            };
            (*name, layer)
        })
        .collect()
}
