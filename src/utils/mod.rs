//! Shared utilities and error types

pub mod error;

pub use error::{BoxscopeError, Result};

/// Format a number the way a script engine prints it: no trailing `.0`,
/// negative zero shown as `0`, and exponent notation (`1e+21`, `1.5e-7`)
/// outside `[1e-6, 1e21)` in magnitude.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{}", value)
}

/// One decimal place, rounding an exact tie away from zero like
/// `Number.prototype.toFixed(1)`.
///
/// Only values that are an odd number of quarters sit exactly halfway
/// between two tenths; everything else formats with the usual rounding.
pub fn to_fixed_1(value: f64) -> String {
    let exact_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if exact_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
