//! Solutions of `f(x) = k` on one period [0, 2π)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::constants::{is_negligible, TAU};

/// The three functions the equation solver understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    /// Applies the function to `x` in radians
    pub fn apply(self, x: f64) -> f64 {
        match self {
            TrigFunction::Sin => x.sin(),
            TrigFunction::Cos => x.cos(),
            TrigFunction::Tan => x.tan(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrigFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin" | "sine" => Ok(TrigFunction::Sin),
            "cos" | "cosine" => Ok(TrigFunction::Cos),
            "tan" | "tangent" => Ok(TrigFunction::Tan),
            other => Err(format!("unknown function '{other}'")),
        }
    }
}

/// All `x` in [0, 2π) with `function(x) = k`, ascending
///
/// Empty when `|k| > 1` for sine or cosine.
pub fn solve_equation(function: TrigFunction, k: f64) -> Vec<f64> {
    let candidates = match function {
        TrigFunction::Sin if (-1.0..=1.0).contains(&k) => {
            let x = k.asin();
            vec![x, PI - x]
        }
        TrigFunction::Cos if (-1.0..=1.0).contains(&k) => {
            let x = k.acos();
            vec![x, TAU - x]
        }
        TrigFunction::Tan => {
            let x = k.atan();
            vec![x, x + PI]
        }
        _ => Vec::new(),
    };

    let mut solutions: Vec<f64> = candidates.into_iter().map(normalize).collect();
    solutions.sort_by(f64::total_cmp);
    solutions.dedup_by(|a, b| is_negligible(*a - *b));
    solutions
}

/// Maps into [0, 2π), folding values within tolerance of 2π back to 0
fn normalize(x: f64) -> f64 {
    let r = x.rem_euclid(TAU);
    if is_negligible(r - TAU) {
        0.0
    } else {
        r
    }
}
