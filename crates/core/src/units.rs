//! Pixel → relative unit conversion.
//!
//! - `strip_unit(16px)` → `16`
//! - `to_em(24px, 16px)` → `1.5em`
//! - `to_rem(8px, 16px)` → `0.5rem`

use crate::error::{Result, ShellError};
use crate::types::{Number, Unit, Value};

/// Context breakpoints are converted against, independent of the page's
/// runtime font size.
pub const BREAKPOINT_CONTEXT: f64 = 16.0;

/// Drops the unit of a number. Non-numeric values are returned unchanged.
pub fn strip_unit(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(Number::unitless(n.value)),
        Value::Ident(_) => value.clone(),
    }
}

/// Converts `value` to `em` relative to `context` (the 1em font size).
pub fn to_em(value: &Value, context: &Value) -> Result<Number> {
    let ratio = relative("to_em", value, context)?;
    Ok(Number::new(ratio, Unit::Em))
}

/// Converts `value` to `rem` relative to the root font size.
pub fn to_rem(value: &Value, base_font_size: &Number) -> Result<Number> {
    let ratio = relative("to_rem", value, &Value::Number(base_font_size.clone()))?;
    Ok(Number::new(ratio, Unit::Rem))
}

/// `strip_unit(value) / strip_unit(context)`, both required to be numbers.
fn relative(function: &'static str, value: &Value, context: &Value) -> Result<f64> {
    let value = magnitude(function, value)?;
    let context = magnitude(function, context)?;
    if context == 0.0 {
        return Err(ShellError::InvalidArgument {
            function,
            value: "0 (context)".to_string(),
        });
    }
    let ratio = value / context;
    if !ratio.is_finite() {
        return Err(ShellError::InvalidArgument {
            function,
            value: format!("{} / {}", value, context),
        });
    }
    Ok(ratio)
}

fn magnitude(function: &'static str, value: &Value) -> Result<f64> {
    match strip_unit(value) {
        Value::Number(n) => Ok(n.value),
        Value::Ident(s) => Err(ShellError::InvalidArgument { function, value: s }),
    }
}
