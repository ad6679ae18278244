//! Rule expression parser
//!
//! Expressions are comma separated tokens: `required`, `min=N`, `max=N`,
//! `len=N` and `oneof=a,b,...`. `oneof` takes the rest of the expression as
//! its value list, so it has to be the last token.

use super::types::{Constraint, RuleExpression};

/// Parse a rule expression, returning the reason on failure
pub fn parse(source: &str) -> Result<RuleExpression, String> {
    let mut constraints: Vec<Constraint> = Vec::new();
    let mut tokens = source.split(',');

    while let Some(raw) = tokens.next() {
        let token = raw.trim();
        if token.is_empty() {
            return Err(format!("empty token in '{}'", source));
        }

        let (name, arg) = match token.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (token, None),
        };

        let constraint = match (name, arg) {
            ("required", None) => Constraint::Required,
            ("required", Some(_)) => return Err("required takes no argument".to_string()),
            ("min", Some(arg)) => Constraint::Min(parse_count(name, arg)?),
            ("max", Some(arg)) => Constraint::Max(parse_count(name, arg)?),
            ("len", Some(arg)) => Constraint::Len(parse_count(name, arg)?),
            ("min" | "max" | "len", None) => {
                return Err(format!("{} requires a numeric argument", name));
            }
            ("oneof", Some(first)) => {
                let mut values: Vec<String> = Vec::new();
                for value in std::iter::once(first).chain(tokens.by_ref().map(str::trim)) {
                    if value.is_empty() {
                        return Err("oneof values must not be empty".to_string());
                    }
                    if !values.iter().any(|v| v == value) {
                        values.push(value.to_string());
                    }
                }
                Constraint::OneOf(values)
            }
            ("oneof", None) => return Err("oneof requires at least one value".to_string()),
            _ => return Err(format!("unknown constraint '{}'", name)),
        };

        if constraints.iter().any(|c| c.tag() == constraint.tag()) {
            return Err(format!("constraint '{}' given more than once", constraint.tag()));
        }
        constraints.push(constraint);
    }

    check_bounds(&constraints)?;

    Ok(RuleExpression {
        source: source.trim().to_string(),
        constraints,
    })
}

fn parse_count(name: &str, arg: &str) -> Result<usize, String> {
    let invalid = || format!("{} argument '{}' is not a non-negative integer", name, arg);
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    arg.parse::<usize>().map_err(|_| invalid())
}

/// Reject size bounds that no value can satisfy
fn check_bounds(constraints: &[Constraint]) -> Result<(), String> {
    let bound = |tag: &str| {
        constraints.iter().find_map(|c| match c {
            Constraint::Min(n) | Constraint::Max(n) | Constraint::Len(n) if c.tag() == tag => Some(*n),
            _ => None,
        })
    };
    let (min, max, len) = (bound("min"), bound("max"), bound("len"));

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(format!("min={} is greater than max={}", min, max));
        }
    }
    if let (Some(len), Some(min)) = (len, min) {
        if len < min {
            return Err(format!("len={} is less than min={}", len, min));
        }
    }
    if let (Some(len), Some(max)) = (len, max) {
        if len > max {
            return Err(format!("len={} is greater than max={}", len, max));
        }
    }

    Ok(())
}
