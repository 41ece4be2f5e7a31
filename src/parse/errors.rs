//! Error types for angle and number input parsing

use thiserror::Error;

/// Reasons user-entered text could not be turned into a number or angle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Nothing but whitespace was entered
    #[error("empty input")]
    EmptyInput,

    /// A character outside the accepted alphabet
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Character index in the input
        position: usize,
    },

    /// Identifier that is not `pi`
    #[error("unknown name '{0}' (only 'pi' is allowed)")]
    UnknownName(String),

    /// A numeric literal that does not parse, e.g. `1.2.3`
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Unbalanced `(` or `)`
    #[error("mismatched parentheses")]
    MismatchedParens,

    /// An operator without enough operands, e.g. `pi/`
    #[error("missing operand")]
    MissingOperand,

    /// Two values without an operator between them, e.g. `2 3`
    #[error("missing operator")]
    MissingOperator,

    #[error("division by zero")]
    DivisionByZero,

    /// The expression evaluated to NaN or infinity
    #[error("result is not a finite number")]
    NonFinite,
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
