//! Evaluation of the six trigonometric functions with explicit singularities
//!
//! `tan` and `sec` divide by `cos`, `csc` and `cot` divide by `sin`. Whenever
//! the divisor is within [`TOLERANCE`](crate::constants::TOLERANCE) of zero
//! the result is [`TrigValue::Undefined`] instead of a huge finite number, so
//! `tan(π/2)` reads "undefined" even though `cos(π/2)` is `6.1e-17` in
//! floating point.

use std::fmt;

use serde::Serialize;

use crate::constants::is_negligible;

pub mod equation;
pub mod inverse;

pub use equation::{solve_equation, TrigFunction};
pub use inverse::{inverse, InverseTrigResult};

/// A trigonometric value that may be undefined at a singularity
///
/// Serializes as a JSON number, or `null` when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrigValue {
    Defined(f64),
    Undefined,
}

impl TrigValue {
    /// The finite value, if defined
    pub fn value(&self) -> Option<f64> {
        match *self {
            TrigValue::Defined(v) => Some(v),
            TrigValue::Undefined => None,
        }
    }

    /// True at a singularity of the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use precalc_guide::trig::evaluate;
    ///
    /// let at_zero = evaluate(0.0);
    /// assert!(at_zero.cot.is_undefined());
    /// assert!(!at_zero.tan.is_undefined());
    /// ```
    pub fn is_undefined(&self) -> bool {
        matches!(self, TrigValue::Undefined)
    }
}

impl fmt::Display for TrigValue {
    /// Honours the formatter precision: `format!("{:.6}", value)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TrigValue::Defined(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
            TrigValue::Undefined => f.write_str("undefined"),
        }
    }
}

/// The six trigonometric functions of one angle
///
/// `sin` and `cos` are total, the other four carry their own singularities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrigResult {
    pub sin: f64,
    pub cos: f64,
    pub tan: TrigValue,
    pub csc: TrigValue,
    pub sec: TrigValue,
    pub cot: TrigValue,
}

impl TrigResult {
    /// Function name and value pairs in the conventional display order
    pub fn entries(&self) -> [(&'static str, TrigValue); 6] {
        [
            ("sin", TrigValue::Defined(self.sin)),
            ("cos", TrigValue::Defined(self.cos)),
            ("tan", self.tan),
            ("csc", self.csc),
            ("sec", self.sec),
            ("cot", self.cot),
        ]
    }
}

/// Evaluates sin, cos, tan, csc, sec and cot at `radians`
///
/// # Examples
///
/// ```rust
/// use precalc_guide::trig::{evaluate, TrigValue};
///
/// let result = evaluate(std::f64::consts::FRAC_PI_2);
/// assert_eq!(result.tan, TrigValue::Undefined);
/// assert_eq!(result.sec, TrigValue::Undefined);
/// assert!(!result.csc.is_undefined());
/// ```
pub fn evaluate(radians: f64) -> TrigResult {
    let s = radians.sin();
    let c = radians.cos();

    let (tan, sec) = if is_negligible(c) {
        (TrigValue::Undefined, TrigValue::Undefined)
    } else {
        (TrigValue::Defined(s / c), TrigValue::Defined(1.0 / c))
    };

    let (csc, cot) = if is_negligible(s) {
        (TrigValue::Undefined, TrigValue::Undefined)
    } else if is_negligible(c) {
        // cot is exactly zero where cos vanishes, not a rounding residue
        (TrigValue::Defined(1.0 / s), TrigValue::Defined(0.0))
    } else {
        (TrigValue::Defined(1.0 / s), TrigValue::Defined(c / s))
    };

    TrigResult {
        sin: s,
        cos: c,
        tan,
        csc,
        sec,
        cot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_evaluate_zero() {
        let r = evaluate(0.0);
        assert_eq!(r.sin, 0.0);
        assert_eq!(r.cos, 1.0);
        assert_eq!(r.tan, TrigValue::Defined(0.0));
        assert_eq!(r.csc, TrigValue::Undefined);
        assert_eq!(r.sec, TrigValue::Defined(1.0));
        assert_eq!(r.cot, TrigValue::Undefined);
    }

    #[test]
    fn test_evaluate_quarter_turn() {
        let r = evaluate(PI / 2.0);
        assert_eq!(r.sin, 1.0);
        assert_abs_diff_eq!(r.cos, 0.0, epsilon = 1e-15);
        assert!(r.tan.is_undefined());
        assert!(r.sec.is_undefined());
        assert_eq!(r.csc, TrigValue::Defined(1.0));
        assert_abs_diff_eq!(r.cot.value().unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_evaluate_half_turn() {
        let r = evaluate(PI);
        assert_abs_diff_eq!(r.sin, 0.0, epsilon = 1e-15);
        assert_eq!(r.cos, -1.0);
        assert_abs_diff_eq!(r.tan.value().unwrap(), 0.0, epsilon = 1e-15);
        assert!(r.csc.is_undefined());
        assert_eq!(r.sec, TrigValue::Defined(-1.0));
        assert!(r.cot.is_undefined());
    }

    #[test]
    fn test_near_singularity_is_undefined() {
        let r = evaluate(PI / 2.0 + 1e-12);
        assert!(r.tan.is_undefined());
        assert!(r.sec.is_undefined());

        let r = evaluate(-PI + 1e-12);
        assert!(r.csc.is_undefined());
        assert!(r.cot.is_undefined());
    }

    #[test]
    fn test_tan_is_quotient() {
        let r = evaluate(PI / 3.0);
        assert_abs_diff_eq!(r.tan.value().unwrap(), 3f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(r.sec.value().unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.csc.value().unwrap(), 2.0 / 3f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(r.cot.value().unwrap(), 1.0 / 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.6}", TrigValue::Defined(0.5)), "0.500000");
        assert_eq!(format!("{:.6}", TrigValue::Undefined), "undefined");
        assert_eq!(TrigValue::Defined(2.0).to_string(), "2");
    }

    #[test]
    fn test_serializes_undefined_as_null() {
        let json = serde_json::to_value(evaluate(0.0)).unwrap();
        assert!(json["csc"].is_null());
        assert!(json["cot"].is_null());
        assert_eq!(json["sec"], serde_json::json!(1.0));
        assert_eq!(json["cos"], serde_json::json!(1.0));
    }

    #[test]
    fn test_entries_order() {
        let names: Vec<&str> = evaluate(1.0).entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["sin", "cos", "tan", "csc", "sec", "cot"]);
    }
}
