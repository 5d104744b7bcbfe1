//! z-index layers as custom properties on `:root`.

use shell_core::{Declaration, Result, ShellConfig, ZLayer};

/// `--z-<layer>` / `--z-<layer>-<nested>` declarations, in layer order.
pub fn z_index_properties(config: &ShellConfig) -> Result<Vec<Declaration>> {
    let mut declarations = Vec::new();
    for (layer, value) in config.z_layers.iter() {
        match value {
            ZLayer::Index(_) => {
                let z = config.z(layer, None)?;
                declarations.push(Declaration::new(format!("--z-{}", layer), z.to_string()));
            }
            ZLayer::Nested(nested) => {
                for key in nested.keys() {
                    let z = config.z(layer, Some(key.as_str()))?;
                    declarations.push(Declaration::new(
                        format!("--z-{}-{}", layer, key),
                        z.to_string(),
                    ));
                }
            }
        }
    }
    Ok(declarations)
}

/// Renders the `:root` block. Empty when there are no layers.
pub fn render_root(declarations: &[Declaration], indent: &str) -> String {
    let mut css = String::new();
    if declarations.is_empty() {
        return css;
    }
    css.push_str(":root {\n");
    for decl in declarations {
        css.push_str(&format!("{}{}: {};\n", indent, decl.property, decl.value));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shell_core::ZIndexMap;

    #[test]
    fn test_z_index_properties() {
        let mut config = ShellConfig::default();
        config.z_layers = [
            ("header", ZLayer::Index(3)),
            (
                "modal-elements",
                ZLayer::Nested([("close-button".to_string(), 1)].into_iter().collect()),
            ),
        ]
        .into_iter()
        .collect::<ZIndexMap>();

        let declarations = z_index_properties(&config).unwrap();
        assert_eq!(
            render_root(&declarations, "  "),
            ":root {\n  --z-header: 3;\n  --z-modal-elements-close-button: 1;\n}\n"
        );
    }

    #[test]
    fn test_no_layers() {
        let mut config = ShellConfig::default();
        config.z_layers = ZIndexMap::new();
        let declarations = z_index_properties(&config).unwrap();
        assert_eq!(render_root(&declarations, "  "), "");
    }
}
