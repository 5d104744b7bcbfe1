//! Grid classes: `.g-row`, `.g-col` and `.g-col-<n>-of-<columns>` widths.

use shell_breakpoints::{BreakpointExpander, ScopedRule};
use shell_core::types::format_magnitude;
use shell_core::{Declaration, GridSettings, Number, Result, ShellConfig, Value};
use shell_css::ClassRule;

/// `.g-col-3-of-12`
pub fn column_class(span: u32, columns: u32) -> String {
    format!(".g-col-{}-of-{}", span, columns)
}

/// Percentage width of `span` out of `columns`.
pub fn column_width(span: u32, columns: u32) -> String {
    format!("{}%", format_magnitude(f64::from(span) / f64::from(columns) * 100.0))
}

fn half_gutter(config: &ShellConfig) -> Result<Number> {
    let half = Number::px(config.grid.gutter.value / 2.0);
    config.rem(&Value::Number(half))
}

/// Row and column base rules, then one width rule per span.
pub fn base_rules(config: &ShellConfig) -> Result<Vec<ClassRule>> {
    let grid = &config.grid;
    let half = half_gutter(config)?;
    let negative = Number {
        value: -half.value,
        unit: half.unit.clone(),
    };

    let mut rules = vec![
        ClassRule::new(
            ".g-row",
            vec![
                Declaration::new("display", "flex"),
                Declaration::new("flex-wrap", "wrap"),
                Declaration::new("margin-left", negative.to_string()),
                Declaration::new("margin-right", negative.to_string()),
            ],
        ),
        ClassRule::new(
            ".g-col",
            vec![
                Declaration::new("box-sizing", "border-box"),
                Declaration::new("width", "100%"),
                Declaration::new("padding-left", half.to_string()),
                Declaration::new("padding-right", half.to_string()),
            ],
        ),
    ];

    rules.extend(spans(grid).map(|span| {
        ClassRule::new(
            column_class(span, grid.columns),
            vec![Declaration::new("width", column_width(span, grid.columns))],
        )
    }));

    Ok(rules)
}

/// Breakpoint variants of every width rule, grouped by span.
pub fn responsive_rules(config: &ShellConfig) -> Result<Vec<ScopedRule>> {
    let grid = &config.grid;
    let expander = BreakpointExpander::new(&config.breakpoints);

    let mut rules = Vec::new();
    for span in spans(grid) {
        let width = vec![Declaration::new("width", column_width(span, grid.columns))];
        rules.extend(expander.apply(&column_class(span, grid.columns), &grid.breakpoints, &width)?);
    }
    Ok(rules)
}

fn spans(grid: &GridSettings) -> impl Iterator<Item = u32> {
    1..=grid.columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell_core::{BreakpointRequest, ShellError};

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(6, 12), "50%");
        assert_eq!(column_width(1, 12), "8.3333333333%");
        assert_eq!(column_width(12, 12), "100%");
        assert_eq!(column_width(1, 3), "33.3333333333%");
    }

    #[test]
    fn test_base_rules() {
        let config = ShellConfig::default();
        let rules = base_rules(&config).unwrap();

        assert_eq!(rules.len(), 2 + 12);
        assert_eq!(rules[0].class_name, ".g-row");
        assert!(rules[0]
            .declarations
            .contains(&Declaration::new("margin-left", "-0.75rem")));
        assert!(rules[1]
            .declarations
            .contains(&Declaration::new("padding-left", "0.75rem")));
        assert_eq!(rules[2].class_name, ".g-col-1-of-12");
        assert_eq!(rules[13].class_name, ".g-col-12-of-12");
    }

    #[test]
    fn test_responsive_rules() {
        let mut config = ShellConfig::default();
        config.grid.columns = 2;
        config.grid.breakpoints = "lap, desk".parse().unwrap();

        let rules = responsive_rules(&config).unwrap();
        let selectors: Vec<&str> = rules.iter().map(|r| r.rule.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec![
                ".g-col-1-of-2-from-lap",
                ".g-col-1-of-2-from-desk",
                ".g-col-2-of-2-from-lap",
                ".g-col-2-of-2-from-desk",
            ]
        );
        assert_eq!(rules[0].declarations, vec![Declaration::new("width", "50%")]);
    }

    #[test]
    fn test_responsive_rules_unknown_breakpoint() {
        let mut config = ShellConfig::default();
        config.grid.breakpoints = BreakpointRequest::single("tablet".parse().unwrap());
        assert_eq!(
            responsive_rules(&config).unwrap_err(),
            ShellError::UnknownBreakpoint("tablet".to_string())
        );
    }
}
