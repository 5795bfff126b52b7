//! Variable interpolation for strings
//!
//! Replaces `${name}` references with argument values, falling back to the
//! process environment.

use crate::error::{InterpolationError, InterpolationResult};
use crate::runner::Arguments;
use regex::{Captures, Regex};
use std::env;
use std::sync::OnceLock;

/// Maximum number of nested substitution passes
const MAX_PASSES: usize = 16;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

fn lookup(name: &str, arguments: &Arguments) -> Option<String> {
    arguments
        .get_string(name)
        .or_else(|| env::var(name).ok())
}

/// Interpolate variables in a string
///
/// Values may themselves contain references, which are resolved on the next
/// pass. Unknown references are left as they are.
pub fn interpolate(s: &str, arguments: &Arguments) -> InterpolationResult<String> {
    let mut current = s.to_string();

    for _ in 0..MAX_PASSES {
        let next = pattern()
            .replace_all(&current, |caps: &Captures| {
                lookup(&caps[1], arguments).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned();

        if next == current {
            return Ok(next);
        }
        current = next;
    }

    Err(InterpolationError::RecursiveInterpolation)
}

/// Interpolate, failing on the first reference that cannot be resolved
pub fn interpolate_strict(s: &str, arguments: &Arguments) -> InterpolationResult<String> {
    let result = interpolate(s, arguments)?;

    if let Some(caps) = pattern().captures(&result) {
        return Err(InterpolationError::UndefinedVariable(caps[1].to_string()));
    }

    Ok(result)
}
