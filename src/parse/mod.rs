//! Parsing of user-entered angles and numbers
//!
//! Text is never handed to a general evaluator. It is tokenized into numbers,
//! `pi`, the four operators and parentheses, converted to RPN and folded on
//! a stack of `f64`, so the worst a hostile input can do is fail to parse.
//!
//! Unit rules for [`parse_angle`]:
//! - a trailing `°`, `deg` or `degrees` means degrees
//! - a trailing `rad` or `radians` means radians
//! - otherwise input mentioning `pi`/`π` is radians and anything else degrees

pub mod errors;
mod rpn;
mod token;

pub use errors::{ParseError, Result};

use crate::angle::Angle;

/// Unit suffixes, longest first so `radians` is not read as `rad` + `ians`
const DEGREE_SUFFIXES: [&str; 3] = ["degrees", "deg", "°"];
const RADIAN_SUFFIXES: [&str; 2] = ["radians", "rad"];

/// Evaluates an arithmetic expression over numbers and `pi`
///
/// # Examples
///
/// ```rust
/// use precalc_guide::parse::evaluate_expression;
///
/// let quarter = evaluate_expression("pi/4").unwrap();
/// assert!((quarter - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// assert!(evaluate_expression("pi/0").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let tokens = token::tokenize(text)?;
    let value = rpn::evaluate_tokens(&tokens)?;
    log::debug!("evaluated {text:?} to {value}");
    Ok(value)
}

/// Parses a plain number, also accepting simple arithmetic such as `1/2`
pub fn parse_number(text: &str) -> Result<f64> {
    evaluate_expression(text)
}

/// Parses an angle such as `45`, `pi/4`, `3π/4`, `-30°` or `1.2 rad`
pub fn parse_angle(text: &str) -> Result<Angle> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let lowered = trimmed.to_lowercase();
    let (body, forced_degrees) = match strip_any_suffix(&lowered, &DEGREE_SUFFIXES) {
        Some(body) => (body, Some(true)),
        None => match strip_any_suffix(&lowered, &RADIAN_SUFFIXES) {
            Some(body) => (body, Some(false)),
            None => (lowered.as_str(), None),
        },
    };

    let mentions_pi = body.contains("pi") || body.contains('π');
    let value = evaluate_expression(body)?;

    let angle = if forced_degrees.unwrap_or(!mentions_pi) {
        Angle::from_degrees(value)
    } else {
        Angle::from_radians(value)
    };
    log::debug!("parsed angle {trimmed:?} as {angle:?}");
    Ok(angle)
}

fn strip_any_suffix<'a>(text: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .map(str::trim_end)
}
