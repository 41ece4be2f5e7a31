//! Precalc Guide: an interactive precalculus guide centred on trigonometry
//!
//! The numeric core is two small pure components:
//!
//! - [`angle::rationalize`] writes a radian value as a simple multiple of π
//!   (`5π/6`), falling back to a decimal multiple (`0.3183π`)
//! - [`trig::evaluate`] computes the six trigonometric functions, reporting
//!   tan/sec/csc/cot as undefined at their singularities
//!
//! Around them sit the angle-expression parser, a triangle solver, text-mode
//! plots, the static lesson content and the menu-driven [`guide::Guide`].

use std::path::PathBuf;

use thiserror::Error;

pub mod angle;
pub mod config;
pub mod constants;
pub mod content;
pub mod guide;
pub mod parse;
pub mod plot;
pub mod triangle;
pub mod trig;

// Re-export commonly used types
pub use angle::{rationalize, Angle, RationalAngleApproximation};
pub use config::GuideConfig;
pub use guide::Guide;
pub use trig::{evaluate, TrigResult, TrigValue};

/// Main error type for the precalc_guide library
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("Invalid input: {0}")]
    Parse(#[from] parse::ParseError),

    #[error("Invalid triangle: {0}")]
    Triangle(#[from] triangle::TriangleError),

    #[error("Cannot read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input stream closed while waiting for an answer
    #[error("Input closed")]
    EndOfInput,
}

/// Result type for precalc_guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
