//! Breakpoint expansion (`apply-at-breakpoints`).
//!
//! A base selector plus a breakpoint request becomes one media-scoped rule per
//! requested breakpoint, in request order:
//!
//! - `.h-hide` + `lap` → `@media (min-width: 45em)` / `.h-hide-from-lap`
//! - `.h-hide` + `400 max` → `@media (max-width: 25em)` / `.h-hide-up-to-400`
//! - `.h-hide` + `palm` → always `max-width` / `.h-hide-up-to-palm`

use crate::media::ScopedRule;
use shell_core::descriptor::{Breakpoint, BreakpointRequest, Descriptor};
use shell_core::units::BREAKPOINT_CONTEXT;
use shell_core::{
    resolve_breakpoint, strip_unit, to_em, BreakpointMap, Declaration, Limit, Number, Result,
    Value,
};

/// One expanded breakpoint: where it applies and which class it generates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRule {
    pub limit: Limit,
    /// Resolved threshold, in em
    pub value: Number,
    /// Media condition, e.g. `(min-width: 45em)`
    pub media: String,
    /// Generated selector, e.g. `.h-hide-from-lap`
    pub selector: String,
}

impl GeneratedRule {
    /// `@media (min-width: 45em)`
    pub fn at_rule(&self) -> String {
        format!("@media {}", self.media)
    }
}

/// Expands breakpoint requests against a breakpoint map.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointExpander<'a> {
    breakpoints: &'a BreakpointMap,
}

impl<'a> BreakpointExpander<'a> {
    pub fn new(breakpoints: &'a BreakpointMap) -> Self {
        Self { breakpoints }
    }

    /// Expands `request` for `base_selector`.
    ///
    /// Fails on the first unknown breakpoint name; nothing is returned for the
    /// descriptors that did resolve.
    pub fn expand(
        &self,
        base_selector: &str,
        request: &BreakpointRequest,
    ) -> Result<Vec<GeneratedRule>> {
        self.descriptors(request)
            .iter()
            .map(|descriptor| self.expand_descriptor(base_selector, descriptor))
            .collect()
    }

    /// Expands a single descriptor.
    pub fn expand_descriptor(
        &self,
        base_selector: &str,
        descriptor: &Descriptor,
    ) -> Result<GeneratedRule> {
        let limit = descriptor.effective_limit();

        let value = match &descriptor.breakpoint {
            Breakpoint::Named(name) => resolve_breakpoint(self.breakpoints, name)?,
            Breakpoint::Numeric(n) => to_em(
                &strip_unit(&Value::Number(n.clone())),
                &Value::from(BREAKPOINT_CONTEXT),
            )?,
        };

        let rule = GeneratedRule {
            limit,
            media: format!("({}-width: {})", limit, value),
            selector: format!("{}-{}-{}", base_selector, limit.label(), descriptor.token()),
            value,
        };

        tracing::trace!(selector = %rule.selector, media = %rule.media, "expanded breakpoint");

        Ok(rule)
    }

    /// Places the same declarations inside every generated rule.
    pub fn apply(
        &self,
        base_selector: &str,
        request: &BreakpointRequest,
        declarations: &[Declaration],
    ) -> Result<Vec<ScopedRule>> {
        self.apply_with(base_selector, request, |_| declarations.to_vec())
    }

    /// Places caller-built declarations inside each generated rule.
    pub fn apply_with<F>(
        &self,
        base_selector: &str,
        request: &BreakpointRequest,
        mut declarations: F,
    ) -> Result<Vec<ScopedRule>>
    where
        F: FnMut(&GeneratedRule) -> Vec<Declaration>,
    {
        let rules = self.expand(base_selector, request)?;
        Ok(rules
            .into_iter()
            .map(|rule| {
                let decls = declarations(&rule);
                ScopedRule::new(rule, decls)
            })
            .collect())
    }

    /// `All` becomes one named descriptor per map entry, in map order.
    fn descriptors(&self, request: &BreakpointRequest) -> Vec<Descriptor> {
        match request {
            BreakpointRequest::All(limit) => self
                .breakpoints
                .names()
                .map(|name| {
                    let descriptor = Descriptor::named(name);
                    match limit {
                        Some(limit) => descriptor.with_limit(*limit),
                        None => descriptor,
                    }
                })
                .collect(),
            BreakpointRequest::List(list) => list.clone(),
        }
    }
}
