//! Triangle solving with the law of sines and the law of cosines
//!
//! Vertices are `A`, `B`, `C` with opposite sides `a`, `b`, `c`. Angles are
//! taken and returned in degrees since that is how the guide prompts for them.
//! The ambiguous SSA case is not solved.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{DEG2RAD, RAD2DEG};

/// Reasons a set of measurements does not describe a triangle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangleError {
    #[error("side {name} must be positive, got {value}")]
    NonPositiveSide { name: char, value: f64 },

    #[error("angle {name} must be strictly between 0° and 180°, got {value}°")]
    InvalidAngle { name: char, value: f64 },

    #[error("sides {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("angles {alpha}° and {beta}° leave nothing for the third angle")]
    AngleSumTooLarge { alpha: f64, beta: f64 },

    /// Intermediate products overflowed, e.g. squaring a side near `1e200`
    #[error("measurements are too large to solve in floating point")]
    OutOfRange,
}

/// A fully solved triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    /// Side lengths `[a, b, c]`
    pub sides: [f64; 3],
    /// Angles `[A, B, C]` in degrees
    pub angles_deg: [f64; 3],
}

impl Triangle {
    /// Area as ½·a·b·sin C
    pub fn area(&self) -> f64 {
        let [a, b, _] = self.sides;
        0.5 * a * b * (self.angles_deg[2] * DEG2RAD).sin()
    }

    pub fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

fn check_side(name: char, value: f64) -> Result<(), TriangleError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TriangleError::NonPositiveSide { name, value })
    }
}

fn check_angle(name: char, value: f64) -> Result<(), TriangleError> {
    if value > 0.0 && value < 180.0 {
        Ok(())
    } else {
        Err(TriangleError::InvalidAngle { name, value })
    }
}

/// Rejects solutions with a non-finite side, angle or area
fn finite(triangle: Triangle) -> Result<Triangle, TriangleError> {
    let all_finite = triangle
        .sides
        .iter()
        .chain(triangle.angles_deg.iter())
        .all(|v| v.is_finite());
    if all_finite && triangle.area().is_finite() {
        Ok(triangle)
    } else {
        log::debug!("triangle solution overflowed: {triangle:?}");
        Err(TriangleError::OutOfRange)
    }
}

/// Angle opposite `opposite` from the law of cosines, in degrees
fn angle_from_sides(opposite: f64, adjacent1: f64, adjacent2: f64) -> f64 {
    let cos = (adjacent1 * adjacent1 + adjacent2 * adjacent2 - opposite * opposite)
        / (2.0 * adjacent1 * adjacent2);
    // rounding can push degenerate-but-valid inputs slightly outside [-1, 1]
    cos.clamp(-1.0, 1.0).acos() * RAD2DEG
}

/// Three sides: every angle from the law of cosines
pub fn solve_sss(a: f64, b: f64, c: f64) -> Result<Triangle, TriangleError> {
    check_side('a', a)?;
    check_side('b', b)?;
    check_side('c', c)?;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(TriangleError::TriangleInequality { a, b, c });
    }

    let alpha = angle_from_sides(a, b, c);
    let beta = angle_from_sides(b, a, c);
    let gamma = 180.0 - alpha - beta;

    finite(Triangle {
        sides: [a, b, c],
        angles_deg: [alpha, beta, gamma],
    })
}

/// Two sides and the included angle `C`: `c` from the law of cosines, then
/// the smaller remaining angle from the law of sines
pub fn solve_sas(a: f64, b: f64, gamma_deg: f64) -> Result<Triangle, TriangleError> {
    check_side('a', a)?;
    check_side('b', b)?;
    check_angle('C', gamma_deg)?;

    let gamma = gamma_deg * DEG2RAD;
    let c = (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt();

    // the angle opposite the shorter side is acute, so asin is unambiguous
    let (alpha, beta) = if a <= b {
        let alpha = (a * gamma.sin() / c).clamp(-1.0, 1.0).asin() * RAD2DEG;
        (alpha, 180.0 - gamma_deg - alpha)
    } else {
        let beta = (b * gamma.sin() / c).clamp(-1.0, 1.0).asin() * RAD2DEG;
        (180.0 - gamma_deg - beta, beta)
    };

    finite(Triangle {
        sides: [a, b, c],
        angles_deg: [alpha, beta, gamma_deg],
    })
}

/// Two angles and the included side `c`: the third angle from the angle
/// sum, the other sides from the law of sines
pub fn solve_asa(alpha_deg: f64, beta_deg: f64, c: f64) -> Result<Triangle, TriangleError> {
    check_angle('A', alpha_deg)?;
    check_angle('B', beta_deg)?;
    check_side('c', c)?;

    let gamma_deg = 180.0 - alpha_deg - beta_deg;
    if gamma_deg <= 0.0 {
        return Err(TriangleError::AngleSumTooLarge {
            alpha: alpha_deg,
            beta: beta_deg,
        });
    }

    let ratio = c / (gamma_deg * DEG2RAD).sin();
    let a = ratio * (alpha_deg * DEG2RAD).sin();
    let b = ratio * (beta_deg * DEG2RAD).sin();

    finite(Triangle {
        sides: [a, b, c],
        angles_deg: [alpha_deg, beta_deg, gamma_deg],
    })
}
