//! Symbolic token lookup: breakpoint names and z-index layers.

use crate::config::{BreakpointMap, ZIndexMap, ZLayer};
use crate::error::{Result, ShellError};
use crate::types::{Number, Value};
use crate::units::{to_em, BREAKPOINT_CONTEXT};

/// Resolves a breakpoint name to its em value (16px context).
pub fn resolve_breakpoint(breakpoints: &BreakpointMap, name: &str) -> Result<Number> {
    let px = breakpoints
        .get(name)
        .ok_or_else(|| ShellError::UnknownBreakpoint(name.to_string()))?;
    to_em(&Value::from(px), &Value::from(BREAKPOINT_CONTEXT))
}

/// Resolves a z-index layer, optionally one level deep.
pub fn resolve_z_index(layers: &ZIndexMap, layer: &str, nested: Option<&str>) -> Result<i64> {
    let unknown = || ShellError::UnknownZLayer {
        layer: layer.to_string(),
        nested: nested.map(str::to_string),
    };

    match (layers.get(layer).ok_or_else(unknown)?, nested) {
        (ZLayer::Index(index), None) => Ok(*index),
        (ZLayer::Nested(_), None) => Err(ShellError::NestedZLayer(layer.to_string())),
        (ZLayer::Nested(inner), Some(key)) => inner.get(key).copied().ok_or_else(unknown),
        (ZLayer::Index(_), Some(_)) => Err(unknown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> ZIndexMap {
        [
            ("header", ZLayer::Index(3)),
            (
                "modal-elements",
                ZLayer::Nested([("close-button".to_string(), 1)].into_iter().collect()),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_breakpoint() {
        let map: BreakpointMap = [("lap", 720.0), ("desk", 1024.0)].into_iter().collect();
        for (name, px) in map.iter() {
            let expected = to_em(&Value::from(px), &Value::from(16.0)).unwrap();
            assert_eq!(resolve_breakpoint(&map, name).unwrap(), expected);
        }
        assert_eq!(resolve_breakpoint(&map, "lap").unwrap().to_string(), "45em");
    }

    #[test]
    fn test_unknown_breakpoint() {
        let map: BreakpointMap = [("lap", 720.0)].into_iter().collect();
        assert_eq!(
            resolve_breakpoint(&map, "nonexistent").unwrap_err(),
            ShellError::UnknownBreakpoint("nonexistent".to_string())
        );
    }

    #[test]
    fn test_resolve_z_index() {
        let layers = layers();
        assert_eq!(resolve_z_index(&layers, "header", None).unwrap(), 3);
        assert_eq!(
            resolve_z_index(&layers, "modal-elements", Some("close-button")).unwrap(),
            1
        );
    }

    #[test]
    fn test_unknown_z_layers() {
        let layers = layers();
        assert!(matches!(
            resolve_z_index(&layers, "footer", None),
            Err(ShellError::UnknownZLayer { nested: None, .. })
        ));
        assert!(matches!(
            resolve_z_index(&layers, "modal-elements", Some("title")),
            Err(ShellError::UnknownZLayer { nested: Some(_), .. })
        ));
        assert!(matches!(
            resolve_z_index(&layers, "header", Some("logo")),
            Err(ShellError::UnknownZLayer { .. })
        ));
    }

    #[test]
    fn test_nested_layer_needs_key() {
        assert_eq!(
            resolve_z_index(&layers(), "modal-elements", None).unwrap_err(),
            ShellError::NestedZLayer("modal-elements".to_string())
        );
    }
}
