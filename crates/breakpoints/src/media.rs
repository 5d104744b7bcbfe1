use crate::expander::GeneratedRule;
use shell_core::Declaration;

/// A generated rule together with the declarations scoped inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedRule {
    pub rule: GeneratedRule,
    pub declarations: Vec<Declaration>,
}

impl ScopedRule {
    pub fn new(rule: GeneratedRule, declarations: Vec<Declaration>) -> Self {
        Self { rule, declarations }
    }

    /// Renders the rule as a media block.
    ///
    /// ```css
    /// @media (min-width: 45em) {
    ///   .h-hide-from-lap {
    ///     display: none;
    ///   }
    /// }
    /// ```
    ///
    /// A rule without declarations renders as an empty string.
    pub fn to_css(&self, indent: &str) -> String {
        let mut css = String::new();
        if self.declarations.is_empty() {
            return css;
        }

        css.push_str(&format!("{} {{\n", self.rule.at_rule()));
        css.push_str(&format!("{}{} {{\n", indent, self.rule.selector));
        for decl in &self.declarations {
            css.push_str(&format!(
                "{}{}{}: {};\n",
                indent, indent, decl.property, decl.value
            ));
        }
        css.push_str(&format!("{}}}\n", indent));
        css.push_str("}\n");
        css
    }
}

/// Renders scoped rules in order, separated by blank lines.
pub fn render_media_blocks(rules: &[ScopedRule], indent: &str) -> String {
    rules
        .iter()
        .map(|rule| rule.to_css(indent))
        .filter(|css| !css.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
