//! Error types.

use core::fmt;

/// Result type with the `crypto-multiprecision` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The result of an arithmetic operation does not fit in the destination width.
    Overflow,

    /// Division or reduction by zero.
    DivByZero,

    /// Modulus rejected by a reduction engine (zero, or even / too small for Montgomery).
    InvalidModulus,

    /// The value has no inverse modulo the given modulus.
    NotInvertible,

    /// The value is not a quadratic residue modulo the given modulus.
    NoSquareRoot,

    /// A string could not be parsed as an integer.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => f.write_str("arithmetic overflow"),
            Error::DivByZero => f.write_str("division by zero"),
            Error::InvalidModulus => f.write_str("invalid modulus"),
            Error::NotInvertible => f.write_str("value is not invertible"),
            Error::NoSquareRoot => f.write_str("value is not a quadratic residue"),
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

/// The failure result for hexadecimal and decimal parsing operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseError {
    /// The input was not a well-formed numeric string.
    InvalidInput,

    /// The value cannot be contained in this data type.
    OutsideRange,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::OutsideRange => write!(f, "exceeded maximum width"),
        }
    }
}

impl core::error::Error for ParseError {}
