//! Numeric token validation.
//!
//! A token is usable iff the *whole* trimmed token parses as a finite
//! `f64`. Prefix parsing would let garbage like `12px` through, so it is
//! rejected outright. Negative values are accepted.

/// Pure predicate used everywhere numeric input is accepted. Never panics.
#[must_use]
pub fn is_valid_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// Parses a trimmed token into a finite `f64`, or `None`.
///
/// `f64::from_str` accepts `inf`/`NaN` spellings; those are non-finite and
/// rejected here.
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value)
}
