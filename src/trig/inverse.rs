//! Principal values of the inverse trigonometric functions

use serde::Serialize;

use super::TrigValue;

/// arcsin, arccos and arctan of a single input, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InverseTrigResult {
    /// Range [-π/2, π/2], undefined outside [-1, 1]
    pub arcsin: TrigValue,
    /// Range [0, π], undefined outside [-1, 1]
    pub arccos: TrigValue,
    /// Range (-π/2, π/2), defined everywhere
    pub arctan: f64,
}

/// Evaluates the three principal inverse functions at `x`
pub fn inverse(x: f64) -> InverseTrigResult {
    let (arcsin, arccos) = if (-1.0..=1.0).contains(&x) {
        (TrigValue::Defined(x.asin()), TrigValue::Defined(x.acos()))
    } else {
        (TrigValue::Undefined, TrigValue::Undefined)
    };

    InverseTrigResult {
        arcsin,
        arccos,
        arctan: x.atan(),
    }
}
