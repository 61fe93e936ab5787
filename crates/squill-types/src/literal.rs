//! Numeric literal classification
//!
//! A numeric literal is `Integer` exactly when its decimal value has no
//! fractional remainder once the exponent is applied: `1.50e2` is 150
//! (Integer), `1.5e1` is 15.0 with one uncancelled fractional digit kept
//! at parse level (Real), `150e-2` is 1.50 (Real).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{TypeDescriptor, TypeError, TypeResult};

/// `digits ('.' digits)? (('e'|'E') ('+'|'-')? digits)?`
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:[eE]([+-]?\d+))?$").expect("numeric literal pattern")
});

/// Classify a numeric literal lexeme as `Integer` or `Real`.
///
/// The lexeme was already validated by the lexer; one that does not match
/// the numeric grammar is an internal defect, not user input to tolerate.
pub fn classify_numeric_literal(lexeme: &str) -> TypeResult<TypeDescriptor> {
    let captures =
        NUMERIC_LITERAL
            .captures(lexeme)
            .ok_or_else(|| TypeError::MalformedNumericLiteral {
                lexeme: lexeme.to_string(),
            })?;
    let fractional_digits = captures.get(2).map_or(0, |m| m.as_str().len() as i64);
    let exponent: i64 = captures.get(3).map_or(Ok(0), |m| m.as_str().parse()).map_err(|_| {
        // Only an exponent too large for i64 can fail here.
        TypeError::MalformedNumericLiteral {
            lexeme: lexeme.to_string(),
        }
    })?;

    if (fractional_digits - exponent).max(0) == 0 {
        Ok(TypeDescriptor::Integer)
    } else {
        Ok(TypeDescriptor::Real)
    }
}
