//! Default checks installed into every new [`crate::Validator`].
//!
//! - `required` - not absent, null or empty
//! - `min:n`, `max:n`, `between:lo,hi` - numeric bound if the value is a
//!   finite number, otherwise a bound on its length in characters
//! - `email` - RFC 822 address syntax (no DNS lookups)

use std::{cmp::Ordering, str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

use crate::{evaluator::EvalContext, registry::CheckRegistry, value::Value};

/// Install the default checks (and their derived variants).
pub fn install(registry: &mut CheckRegistry) {
    registry.register("required", required);
    registry.register("min", min);
    registry.register("max", max);
    registry.register("between", between);
    registry.register("email", email);
}

/// A number as read from a value or a parameter.
///
/// Compared exactly when both sides fit a `Decimal`, approximately otherwise.
#[derive(Debug, Clone, Copy)]
struct Number {
    approx: f64,
    exact: Option<Decimal>,
}

impl Number {
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let approx = text.parse::<f64>().ok().filter(|n| n.is_finite())?;
        let exact = Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok();
        Some(Number { approx, exact })
    }

    fn from_len(len: usize) -> Self {
        Number {
            approx: len as f64,
            exact: Some(Decimal::from(len)),
        }
    }

    fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self.exact, other.exact) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.approx.partial_cmp(&other.approx),
        }
    }
}

/// The quantity a bound check compares: the number itself, or the length.
fn magnitude(value: &Value) -> Option<Number> {
    match value {
        Value::Integer(n) => Some(Number {
            approx: *n as f64,
            exact: Some(Decimal::from(*n)),
        }),
        // Shortest round-trip text, so 0.1 stays 0.1 rather than its binary expansion.
        Value::Float(n) => Number::parse(&n.to_string()),
        Value::String(s) => Number::parse(s).or_else(|| Some(Number::from_len(s.chars().count()))),
        Value::Absent | Value::Null | Value::Boolean(_) => None,
    }
}

fn bound(params: &[&str], index: usize) -> Option<Number> {
    params.get(index).and_then(|p| Number::parse(p))
}

fn at_least(value: &Number, limit: &Number) -> bool {
    matches!(value.compare(limit), Some(Ordering::Greater | Ordering::Equal))
}

fn at_most(value: &Number, limit: &Number) -> bool {
    matches!(value.compare(limit), Some(Ordering::Less | Ordering::Equal))
}

pub fn required(_: &EvalContext, value: &Value, _: &[&str]) -> bool {
    !value.is_blank()
}

pub fn min(_: &EvalContext, value: &Value, params: &[&str]) -> bool {
    match (magnitude(value), bound(params, 0)) {
        (Some(v), Some(lo)) => at_least(&v, &lo),
        _ => false,
    }
}

pub fn max(_: &EvalContext, value: &Value, params: &[&str]) -> bool {
    match (magnitude(value), bound(params, 0)) {
        (Some(v), Some(hi)) => at_most(&v, &hi),
        _ => false,
    }
}

pub fn between(_: &EvalContext, value: &Value, params: &[&str]) -> bool {
    match (magnitude(value), bound(params, 0), bound(params, 1)) {
        (Some(v), Some(lo), Some(hi)) => at_least(&v, &lo) && at_most(&v, &hi),
        _ => false,
    }
}

// RFC 822 addr-spec: local part of atoms or quoted strings, domain of atoms
// or domain literals, joined by dots.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let atom = r"[^\x00-\x20\x22\x28\x29\x2c\x2e\x3a-\x3c\x3e\x40\x5b-\x5d\x7f-\xff]+";
    let quoted = r"\x22(?:[^\x0d\x22\x5c\x80-\xff]|\x5c[\x00-\x7f])*\x22";
    let literal = r"\x5b(?:[^\x0d\x5b-\x5d\x80-\xff]|\x5c[\x00-\x7f])*\x5d";
    let word = format!("(?:{atom}|{quoted})");
    let sub_domain = format!("(?:{atom}|{literal})");
    let pattern = format!(r"^{word}(?:\x2e{word})*\x40{sub_domain}(?:\x2e{sub_domain})*$");
    Regex::new(&pattern).expect("email pattern is valid")
});

pub fn email(_: &EvalContext, value: &Value, _: &[&str]) -> bool {
    match value {
        Value::String(s) => EMAIL.is_match(s),
        _ => false,
    }
}
