//! # Angle Representation Module
//!
//! Angles keep the unit they were entered in. A value typed as `45` stays
//! `45°` and a value typed as `pi/4` stays radians; conversion only happens
//! when explicitly requested via `to_degrees()` or `to_radians()`.
//!
//! The [`rational`] submodule turns a radian value into π notation for
//! display (`3π/4`), see [`rationalize`].
//!
//! ## Examples
//!
//! ```rust
//! use precalc_guide::angle::{Angle, AngleFormat};
//!
//! let angle_deg = Angle::from_degrees(135.0);
//! assert_eq!(angle_deg.to_degrees(), 135.0);
//! assert_eq!(angle_deg.pi_notation(), "3π/4");
//!
//! let angle_rad = Angle::from_radians(std::f64::consts::PI / 4.0);
//! assert!(matches!(angle_rad.format(), AngleFormat::Radians(_)));
//! ```

use std::fmt;

use crate::constants::{DEG2RAD, RAD2DEG, TAU};

pub mod rational;

pub use rational::{approximate, rationalize, RationalAngleApproximation};

/// Unit an angle value was provided in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angle that remembers the unit it was entered in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use precalc_guide::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    ///
    /// # Arguments
    ///
    /// * `radians` - Angle value in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use precalc_guide::angle::Angle;
    /// use std::f64::consts::PI;
    ///
    /// let angle = Angle::from_radians(3.0 * PI / 4.0);
    /// assert!(!angle.is_degrees());
    /// assert_eq!(angle.to_string(), "3π/4");
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Creates an angle from a multiple of π
    ///
    /// # Arguments
    ///
    /// * `multiple` - Coefficient of π, e.g. `0.5` for π/2
    pub fn from_pi_multiple(multiple: f64) -> Self {
        Self::from_radians(multiple * std::f64::consts::PI)
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was entered in degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was entered in radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// True when the angle was entered in degrees
    pub fn is_degrees(&self) -> bool {
        matches!(self.angle, AngleFormat::Degrees(_))
    }

    /// The radian value written as a multiple of π
    ///
    /// # Returns
    ///
    /// `π/6`-style text, or a four-decimal multiple such as `0.3183π`
    pub fn pi_notation(&self) -> String {
        rationalize(self.to_radians())
    }

    /// Coterminal angle in [0, 2π), kept in the original unit
    ///
    /// # Examples
    ///
    /// ```rust
    /// use precalc_guide::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-90.0).normalized().to_degrees(), 270.0);
    /// assert_eq!(Angle::from_degrees(720.0).normalized().to_degrees(), 0.0);
    /// ```
    pub fn normalized(&self) -> Self {
        match self.angle {
            AngleFormat::Degrees(deg) => Self::from_degrees(deg.rem_euclid(360.0)),
            AngleFormat::Radians(rad) => Self::from_radians(rad.rem_euclid(TAU)),
        }
    }
}

impl fmt::Display for Angle {
    /// Degrees print as `45°`, radians in π notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle {
            AngleFormat::Degrees(deg) => write!(f, "{deg}°"),
            AngleFormat::Radians(rad) => f.write_str(&rationalize(rad)),
        }
    }
}
