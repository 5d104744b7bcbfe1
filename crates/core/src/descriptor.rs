//! Breakpoint descriptors and requests.
//!
//! A request names the breakpoints a rule should be generated for. The loose
//! shapes accepted from configuration are normalized here:
//!
//! - `"all"` → every configured breakpoint
//! - `"lap"` / `900` → a single descriptor
//! - `["lap", "max"]` → a single descriptor with a limit (not two descriptors)
//! - `["lap", ["desk", "max"], 900]` → a list

use crate::error::{Result, ShellError};
use crate::types::{Limit, Number, Unit, Value};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;
use std::fmt;
use std::str::FromStr;

/// Reserved token for "every breakpoint in the map".
pub const ALL: &str = "all";

/// Breakpoint whose range is bounded from above, so it is always `max`.
pub const PALM: &str = "palm";

#[derive(Debug, Clone, PartialEq)]
pub enum Breakpoint {
    Named(String),
    Numeric(Number),
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakpoint::Named(name) => f.write_str(name),
            Breakpoint::Numeric(n) => n.fmt(f),
        }
    }
}

/// One requested breakpoint plus its (optional) limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub breakpoint: Breakpoint,
    pub limit: Option<Limit>,
}

impl Descriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            breakpoint: Breakpoint::Named(name.into()),
            limit: None,
        }
    }

    pub fn numeric(value: Number) -> Self {
        Self {
            breakpoint: Breakpoint::Numeric(value),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The limit this descriptor expands with. `palm` is always `max`.
    pub fn effective_limit(&self) -> Limit {
        match &self.breakpoint {
            Breakpoint::Named(name) if name == PALM => Limit::Max,
            _ => self.limit.unwrap_or_default(),
        }
    }

    /// Token used in generated class names (`lap`, `900`).
    pub fn token(&self) -> String {
        self.breakpoint.to_string()
    }

    fn from_scalar(token: &str) -> Result<Self> {
        if token == ALL {
            return Err(ShellError::InvalidDescriptor(
                "`all` cannot be combined with other breakpoints".to_string(),
            ));
        }
        if token.is_empty() {
            return Err(ShellError::InvalidDescriptor(
                "empty breakpoint name".to_string(),
            ));
        }
        match Value::from(token) {
            // only width units are numbers; `2xl` is a name
            Value::Number(n)
                if matches!(n.unit, None | Some(Unit::Px | Unit::Em | Unit::Rem)) =>
            {
                Ok(Self::numeric(n))
            }
            _ => Ok(Self::named(token)),
        }
    }

    fn from_json(json: &Json) -> Result<Self> {
        match json {
            Json::String(s) => Self::from_scalar(s),
            Json::Number(n) => n
                .as_f64()
                .map(|v| Self::numeric(Number::unitless(v)))
                .ok_or_else(|| ShellError::InvalidDescriptor(format!("bad number {}", n))),
            Json::Array(items) => match items.as_slice() {
                [bp, Json::String(limit)] => {
                    let limit = Limit::parse(limit).ok_or_else(|| {
                        ShellError::InvalidDescriptor(format!("unknown limit `{}`", limit))
                    })?;
                    Ok(Self::from_json(bp)?.with_limit(limit))
                }
                _ => Err(ShellError::InvalidDescriptor(format!(
                    "expected [breakpoint, limit], got {}",
                    json
                ))),
            },
            other => Err(ShellError::InvalidDescriptor(format!(
                "unsupported breakpoint {}",
                other
            ))),
        }
    }
}

impl FromStr for Descriptor {
    type Err = ShellError;

    /// `"lap"`, `"900"`, `"400 max"`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let token = parts
            .next()
            .ok_or_else(|| ShellError::InvalidDescriptor("empty breakpoint".to_string()))?;
        let descriptor = Self::from_scalar(token)?;
        match (parts.next(), parts.next()) {
            (None, _) => Ok(descriptor),
            (Some(limit), None) => match Limit::parse(limit) {
                Some(limit) => Ok(descriptor.with_limit(limit)),
                None => Err(ShellError::InvalidDescriptor(format!(
                    "unknown limit `{}`",
                    limit
                ))),
            },
            (Some(_), Some(_)) => Err(ShellError::InvalidDescriptor(format!(
                "too many parts in `{}`",
                s
            ))),
        }
    }
}

/// The breakpoints a rule is generated for.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakpointRequest {
    /// Every breakpoint in the map, in map order.
    All(Option<Limit>),
    List(Vec<Descriptor>),
}

impl Default for BreakpointRequest {
    fn default() -> Self {
        BreakpointRequest::All(None)
    }
}

impl BreakpointRequest {
    pub fn single(descriptor: Descriptor) -> Self {
        BreakpointRequest::List(vec![descriptor])
    }

    /// Builds a request from its JSON form.
    pub fn from_json(json: &Json) -> Result<Self> {
        match json {
            Json::String(s) if s == ALL => Ok(BreakpointRequest::All(None)),
            Json::Array(items) => match items.as_slice() {
                [Json::String(all), Json::String(limit)] if all == ALL => {
                    match Limit::parse(limit) {
                        Some(limit) => Ok(BreakpointRequest::All(Some(limit))),
                        None => Err(ShellError::InvalidDescriptor(
                            "`all` cannot be combined with other breakpoints".to_string(),
                        )),
                    }
                }
                // a lone (breakpoint, limit) pair
                [_, Json::String(limit)] if Limit::parse(limit).is_some() => {
                    Ok(Self::single(Descriptor::from_json(json)?))
                }
                _ => items
                    .iter()
                    .map(Descriptor::from_json)
                    .collect::<Result<Vec<_>>>()
                    .map(BreakpointRequest::List),
            },
            other => Ok(Self::single(Descriptor::from_json(other)?)),
        }
    }
}

impl FromStr for BreakpointRequest {
    type Err = ShellError;

    /// `"all"`, `"all max"`, `"lap"`, `"lap, 900 max, desk"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(rest) = trimmed.strip_prefix(ALL) {
            let rest = rest.trim();
            if rest.is_empty() {
                return Ok(BreakpointRequest::All(None));
            }
            if let Some(limit) = Limit::parse(rest) {
                return Ok(BreakpointRequest::All(Some(limit)));
            }
        }
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Descriptor::from_str)
            .collect::<Result<Vec<_>>>()
            .map(BreakpointRequest::List)
    }
}

impl<'de> Deserialize<'de> for BreakpointRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        BreakpointRequest::from_json(&json).map_err(serde::de::Error::custom)
    }
}
