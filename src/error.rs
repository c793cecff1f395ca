use core::fmt::{self, Display};

/// Failure kinds shared by every container in this crate.
///
/// Containers never retry or recover on their own: an operation either succeeds or
/// returns one of these variants to the caller.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Error {
    /// A handle was out of the valid `1..n` range, or a precondition on an argument
    /// was violated (e.g. linking a non-canonical `DjSets` element, inserting a
    /// duplicate key).
    InvalidArgument,

    /// An allocation could not be satisfied: `expand`/`resize` ran out of room, or
    /// a hash table insert produced a handle that doesn't fit the fingerprint's
    /// packed index width.
    OutOfSpace,

    /// An `is_consistent` audit found a violated internal invariant. Only raised
    /// by the debug-only consistency checkers, never by normal operation.
    Inconsistent,

    /// Malformed textual input during a `from_str`/parse call.
    InputFormat,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidArgument => "invalid argument: handle out of range or precondition violated",
            Error::OutOfSpace => "out of space: allocation request could not be satisfied",
            Error::Inconsistent => "internal invariant violated",
            Error::InputFormat => "malformed textual input",
        };
        write!(f, "{}", msg)
    }
}

#[cfg(test)]
impl std::error::Error for Error {}

/// Convenience alias: every fallible operation in this crate returns this.
pub type Result<T> = core::result::Result<T, Error>;
