use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name, e.g. `"display"`
    pub property: String,
    /// Property value, e.g. `"none"`
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Unit tag carried by a [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Percent,
    Other(String),
}

impl Unit {
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Other(unit) => unit,
        }
    }

    fn parse(unit: &str) -> Self {
        match unit {
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "%" => Unit::Percent,
            other => Unit::Other(other.to_string()),
        }
    }
}

/// A numeric magnitude with an optional unit, e.g. `16px`, `45em`, `900`.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Number {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self { value, unit: None }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_magnitude(self.value))?;
        if let Some(unit) = &self.unit {
            f.write_str(unit.as_str())?;
        }
        Ok(())
    }
}

/// Formats a magnitude with at most ten fractional digits and no trailing zeros.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.10}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Any value a token can hold: a number, or some other CSS text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Number),
    Ident(String),
}

impl Value {
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            Value::Ident(_) => None,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::unitless(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        parse_value(s)
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_value(s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => n.fmt(f),
            Value::Ident(s) => f.write_str(s),
        }
    }
}

/// Parses a value string, e.g. `"16px"`, `"1.5rem"`, `"900"` or `"auto"`.
fn parse_value(s: &str) -> Value {
    let trimmed = s.trim();
    match split_dimension(trimmed) {
        Some((num, unit)) => match num.parse::<f64>() {
            Ok(value) if value.is_finite() => Value::Number(Number {
                value,
                unit: (!unit.is_empty()).then(|| Unit::parse(unit)),
            }),
            _ => Value::Ident(trimmed.to_string()),
        },
        None => Value::Ident(trimmed.to_string()),
    }
}

/// Splits `"12.5px"` into `("12.5", "px")`. The unit part may be empty.
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let (num, unit) = s.split_at(end);
    if !num.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if unit.is_empty() || unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((num, unit))
    } else {
        None
    }
}

/// Whether a breakpoint rule applies at-or-above or at-or-below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    #[default]
    Min,
    Max,
}

impl Limit {
    pub fn as_str(self) -> &'static str {
        match self {
            Limit::Min => "min",
            Limit::Max => "max",
        }
    }

    /// Label used inside generated class names.
    pub fn label(self) -> &'static str {
        match self {
            Limit::Min => "from",
            Limit::Max => "up-to",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "min" => Some(Limit::Min),
            "max" => Some(Limit::Max),
            _ => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_values() {
        assert_eq!(Value::from("16px"), Value::Number(Number::px(16.0)));
        assert_eq!(
            Value::from("1.5rem"),
            Value::Number(Number::new(1.5, Unit::Rem))
        );
        assert_eq!(Value::from("900"), Value::Number(Number::unitless(900.0)));
        assert_eq!(
            Value::from("50%"),
            Value::Number(Number::new(50.0, Unit::Percent))
        );
        assert_eq!(
            Value::from("-2vw"),
            Value::Number(Number::new(-2.0, Unit::Other("vw".to_string())))
        );
    }

    #[test]
    fn test_parse_idents() {
        assert_eq!(Value::from("abc"), Value::Ident("abc".to_string()));
        assert_eq!(Value::from("auto"), Value::Ident("auto".to_string()));
        assert_eq!(
            Value::from("rect(0 0 0 0)"),
            Value::Ident("rect(0 0 0 0)".to_string())
        );
        assert_eq!(Value::from("-"), Value::Ident("-".to_string()));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::new(45.0, Unit::Em).to_string(), "45em");
        assert_eq!(Number::new(44.9375, Unit::Em).to_string(), "44.9375em");
        assert_eq!(Number::new(1.0 / 3.0, Unit::Rem).to_string(), "0.3333333333rem");
        assert_eq!(Number::unitless(900.0).to_string(), "900");
        assert_eq!(Number::new(-0.0, Unit::Px).to_string(), "0px");
        assert_eq!(Number::new(-0.00000000001, Unit::Px).to_string(), "0px");
        assert_eq!(Number::unitless(1200.0).to_string(), "1200");
    }

    #[test]
    fn test_large_magnitudes_keep_ten_digits() {
        assert_eq!(format_magnitude(1e300), format!("{:.0}", 1e300));
        assert!(!format_magnitude(1e300).contains("inf"));
        let printed = format_magnitude(123456789.123456789123);
        let fraction = printed.split('.').nth(1).unwrap_or("");
        assert!(fraction.len() <= 10);
    }

    #[test]
    fn test_limit_labels() {
        assert_eq!(Limit::default(), Limit::Min);
        assert_eq!(Limit::Min.label(), "from");
        assert_eq!(Limit::Max.label(), "up-to");
        assert_eq!(Limit::parse("max"), Some(Limit::Max));
        assert_eq!(Limit::parse("maximum"), None);
    }
}
