//! Display of radian values as simple rational multiples of π
//!
//! The rationalizer is a bounded brute-force search, not a general rational
//! reconstruction. Denominators 1 through 12 cover every multiple of 30° and
//! 45° on the unit circle, which is all the guide ever needs to name exactly.
//!
//! Order of checks for a radian value `r`:
//!
//! 1. `|r| < 1e-10` renders `0`
//! 2. `|r ∓ π| < 1e-10` renders `π` / `-π`
//! 3. `r/π` within tolerance of an integer `k` renders `kπ`
//! 4. the first `n/d` with `|r/π - n/d| < 1e-10`, searching `d = 1..=12`
//!    ascending and, for each `d`, `n = -12..=12` ascending
//! 5. otherwise `r/π` to four decimals followed by `π`
//!
//! Step 4 fixes the tie-break: the smallest denominator wins, then the most
//! negative numerator. Two distinct fractions with denominators up to 12 differ
//! by at least 1/132, so only equal-valued fractions (`1/2` and `2/4`) can ever
//! tie, and the ascending denominator order always reports the reduced one.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::constants::{is_negligible, MAX_DENOMINATOR, MAX_NUMERATOR, TOLERANCE};

/// Result of searching for a fraction `numerator/denominator` such that the
/// input equals `numerator/denominator · π` within tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RationalAngleApproximation {
    /// Numerator of the multiple of π (sign carried here)
    pub numerator: i64,
    /// Denominator of the multiple of π, always at least 1
    pub denominator: i64,
    /// False when no fraction in the search space matched
    pub matched: bool,
}

impl RationalAngleApproximation {
    /// An exact match `numerator/denominator · π`
    pub fn exact(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
            matched: true,
        }
    }

    /// The "nothing found" record
    pub fn unmatched() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
            matched: false,
        }
    }

    /// Value of the fraction as a multiple of π, `None` when unmatched
    pub fn as_multiple_of_pi(&self) -> Option<f64> {
        self.matched
            .then(|| self.numerator as f64 / self.denominator as f64)
    }

    /// Reconstructed radian value, `None` when unmatched
    pub fn to_radians(&self) -> Option<f64> {
        self.as_multiple_of_pi().map(|m| m * PI)
    }
}

impl fmt::Display for RationalAngleApproximation {
    /// Writes `0`, `π`, `-π`, `nπ`, `π/d`, `-π/d` or `nπ/d`.
    ///
    /// Unmatched approximations render as `?`; use [`rationalize`] to get the
    /// decimal fallback instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.matched {
            return f.write_str("?");
        }
        let coefficient = match self.numerator {
            0 => return f.write_str("0"),
            1 => String::new(),
            -1 => "-".to_string(),
            n => n.to_string(),
        };
        if self.denominator == 1 {
            write!(f, "{coefficient}π")
        } else {
            write!(f, "{coefficient}π/{}", self.denominator)
        }
    }
}

/// Searches for a simple fraction of π matching `radians`
///
/// Integer multiples of π are matched for any magnitude; proper fractions are
/// only found within the fixed search space (denominator ≤ 12, |numerator| ≤ 12).
pub fn approximate(radians: f64) -> RationalAngleApproximation {
    if is_negligible(radians) {
        return RationalAngleApproximation::exact(0, 1);
    }
    if is_negligible(radians - PI) {
        return RationalAngleApproximation::exact(1, 1);
    }
    if is_negligible(radians + PI) {
        return RationalAngleApproximation::exact(-1, 1);
    }

    let frac = radians / PI;
    let nearest = frac.round();
    // beyond ±2^63 the multiple no longer fits the i64 record
    if is_negligible(frac - nearest) && nearest.abs() < i64::MAX as f64 {
        return RationalAngleApproximation::exact(nearest as i64, 1);
    }

    search_fraction(frac).unwrap_or_else(|| {
        log::trace!("no fraction of π within {TOLERANCE:e} of {frac}");
        RationalAngleApproximation::unmatched()
    })
}

/// First `n/d` (smallest `d`, then smallest `n`) within tolerance of `frac`
fn search_fraction(frac: f64) -> Option<RationalAngleApproximation> {
    (1..=MAX_DENOMINATOR)
        .flat_map(|d| (-MAX_NUMERATOR..=MAX_NUMERATOR).map(move |n| (n, d)))
        .find(|&(n, d)| (frac - n as f64 / d as f64).abs() < TOLERANCE)
        .map(|(n, d)| RationalAngleApproximation::exact(n, d))
}

/// Formats `radians` as the shortest canonical multiple of π
///
/// Falls back to the multiple of π with four decimals (`0.3183π`) when no
/// simple fraction matches. Integer multiples of any size print every
/// integer digit, never a saturated or decimal form.
///
/// # Arguments
///
/// * `radians` - Angle in radians
///
/// # Returns
///
/// The π-notation string, e.g. `5π/6`
///
/// # Examples
///
/// ```rust
/// use precalc_guide::angle::rationalize;
/// use std::f64::consts::PI;
///
/// assert_eq!(rationalize(PI / 6.0), "π/6");
/// assert_eq!(rationalize(-2.0 * PI), "-2π");
/// assert_eq!(rationalize(1.0), "0.3183π");
/// ```
pub fn rationalize(radians: f64) -> String {
    let approximation = approximate(radians);
    if approximation.matched {
        return approximation.to_string();
    }

    let frac = radians / PI;
    let nearest = frac.round();
    if frac.is_finite() && is_whole(frac, nearest) {
        format!("{nearest:.0}π")
    } else {
        format!("{frac:.4}π")
    }
}

/// True when `frac` is an integer up to rounding in `radians / π`
///
/// Covers multiples too large for [`RationalAngleApproximation`] and those
/// whose spacing between adjacent floats already exceeds the tolerance.
fn is_whole(frac: f64, nearest: f64) -> bool {
    let slack = TOLERANCE.max(4.0 * f64::EPSILON * frac.abs());
    (frac - nearest).abs() <= slack
}
