use crate::grid;
use crate::helpers::HELPERS;
use crate::z_index::{render_root, z_index_properties};
use shell_breakpoints::{render_media_blocks, BreakpointExpander, ScopedRule};
use shell_core::{ShellConfig, ShellError};
use shell_css::{emit_rules, ClassRule};
use thiserror::Error;

const INDENT: &str = "  ";

#[derive(Debug, Error)]
pub enum HelperError {
    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("failed to emit CSS: {0}")]
    Emit(#[from] std::fmt::Error),
}

/// Shell 样式表生成器
///
/// Output order:
/// 1. helper and grid base rules
/// 2. `:root` z-index properties
/// 3. helper breakpoint variants
/// 4. grid breakpoint variants
pub struct HelperGenerator<'a> {
    config: &'a ShellConfig,
}

impl<'a> HelperGenerator<'a> {
    pub fn new(config: &'a ShellConfig) -> Self {
        Self { config }
    }

    pub fn base_rules(&self) -> Result<Vec<ClassRule>, HelperError> {
        let mut rules = Vec::new();
        if self.config.helpers.enabled {
            rules.extend(
                HELPERS
                    .iter()
                    .map(|helper| ClassRule::new(helper.selector(), helper.declarations())),
            );
        }
        if self.config.grid.enabled {
            rules.extend(grid::base_rules(self.config)?);
        }
        Ok(rules)
    }

    /// Helper variants for the configured helper breakpoints.
    pub fn helper_variants(&self) -> Result<Vec<ScopedRule>, HelperError> {
        let helpers = &self.config.helpers;
        if !helpers.enabled || !helpers.responsive {
            return Ok(Vec::new());
        }

        let expander = BreakpointExpander::new(&self.config.breakpoints);
        let mut rules = Vec::new();
        for helper in HELPERS {
            rules.extend(expander.apply(
                &helper.selector(),
                &helpers.breakpoints,
                &helper.declarations(),
            )?);
        }
        Ok(rules)
    }

    pub fn grid_variants(&self) -> Result<Vec<ScopedRule>, HelperError> {
        if !self.config.grid.enabled {
            return Ok(Vec::new());
        }
        Ok(grid::responsive_rules(self.config)?)
    }

    /// Generates the whole stylesheet.
    pub fn generate(&self) -> Result<String, HelperError> {
        let base = self.base_rules()?;
        let root = render_root(&z_index_properties(self.config)?, INDENT);
        let helper_variants = self.helper_variants()?;
        let grid_variants = self.grid_variants()?;

        tracing::debug!(
            base = base.len(),
            helper_variants = helper_variants.len(),
            grid_variants = grid_variants.len(),
            "generating stylesheet"
        );

        let sections = [
            emit_rules(&base)?,
            root,
            render_media_blocks(&helper_variants, INDENT),
            render_media_blocks(&grid_variants, INDENT),
        ];

        Ok(sections
            .iter()
            .map(|section| section.trim_end())
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_everything() {
        let mut config = ShellConfig::default();
        config.helpers.enabled = false;
        config.grid.enabled = false;

        let generator = HelperGenerator::new(&config);
        assert!(generator.base_rules().unwrap().is_empty());
        assert!(generator.helper_variants().unwrap().is_empty());
        assert!(generator.grid_variants().unwrap().is_empty());
    }

    #[test]
    fn test_non_responsive_helpers() {
        let mut config = ShellConfig::default();
        config.helpers.responsive = false;

        let generator = HelperGenerator::new(&config);
        assert_eq!(generator.base_rules().unwrap()[0].class_name, ".h-hide-visually");
        assert!(generator.helper_variants().unwrap().is_empty());
    }

    #[test]
    fn test_helper_variants_per_breakpoint() {
        let config = ShellConfig::default();
        let variants = HelperGenerator::new(&config).helper_variants().unwrap();

        assert_eq!(variants.len(), HELPERS.len() * config.breakpoints.len());
        assert_eq!(variants[0].rule.selector, ".h-hide-visually-up-to-palm");
        assert_eq!(variants[1].rule.selector, ".h-hide-visually-from-lap");
    }

    #[test]
    fn test_unknown_breakpoint_is_fatal() {
        let mut config = ShellConfig::default();
        config.helpers.breakpoints = "lap, tablet".parse().unwrap();

        let err = HelperGenerator::new(&config).generate().unwrap_err();
        assert!(matches!(
            err,
            HelperError::Shell(ShellError::UnknownBreakpoint(ref name)) if name == "tablet"
        ));
    }
}
