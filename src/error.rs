//! Error types shared by every core in this crate.

use std::fmt;

/// Errors that can occur across the ternary, transition, Kamea, figurate,
/// and group cores.
#[derive(Debug)]
pub enum Error {
    /// A character outside the expected alphabet appeared at `position`.
    InvalidDigit {
        /// Name of the operation that encountered the error.
        function: &'static str,
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A value was required but the input was empty.
    EmptyInput {
        /// Name of the operation that encountered the error.
        function: &'static str,
    },

    /// A `-` sign appeared somewhere other than position 0.
    BadSignPosition {
        /// Name of the operation that encountered the error.
        function: &'static str,
        /// Byte offset of the misplaced sign.
        position: usize,
    },

    /// A transition map did not cover all nine digit pairs.
    IncompleteMap {
        /// The pairs missing from the map, as `(a, b)` digit tuples.
        missing: Vec<(u8, u8)>,
    },

    /// A signed ternary string was passed to an operator defined only on
    /// non-negative strings.
    NegativeInput {
        /// Name of the operation that encountered the error.
        function: &'static str,
    },

    /// Cycle search exceeded its iteration budget without finding a repeat.
    NoCycleFound {
        /// Number of iterations attempted before giving up.
        max_iterations: usize,
    },

    /// A Kamea coordinate fell outside the `[-13, 13]` grid range.
    OutOfBounds {
        /// The out-of-range x coordinate.
        x: i32,
        /// The out-of-range y coordinate.
        y: i32,
    },

    /// Loaded data violated a stated invariant (grid file mismatch, failed
    /// Conrune-pair check, etc).
    IntegrityError {
        /// Human-readable description of the violated invariant.
        detail: String,
    },

    /// Figurate parameters fell outside their documented domains.
    InvalidParameters {
        /// Human-readable description of which parameter was invalid.
        detail: String,
    },

    /// A saved visualization referenced dot indices absent from the
    /// regenerated figurate coordinate set.
    GroupIndexOutOfRange {
        /// The group that referenced the missing index.
        group: String,
        /// The missing dot index.
        index: usize,
    },

    /// An aspect-table batch write rolled back.
    TransactionFailed {
        /// Human-readable description of the rollback cause.
        detail: String,
    },

    /// Wraps an I/O failure encountered while loading grid or
    /// visualization files.
    Io {
        /// Context describing which file operation failed.
        context: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Wraps a `rusqlite` failure encountered while querying or writing the
    /// aspect table.
    Database {
        /// Context describing which database operation failed.
        context: String,
        /// The underlying database error.
        source: rusqlite::Error,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDigit`].
    #[must_use]
    pub const fn invalid_digit(function: &'static str, position: usize, found: char) -> Self {
        Self::InvalidDigit {
            function,
            position,
            found,
        }
    }

    /// Creates an [`Error::EmptyInput`].
    #[must_use]
    pub const fn empty_input(function: &'static str) -> Self {
        Self::EmptyInput { function }
    }

    /// Creates an [`Error::BadSignPosition`].
    #[must_use]
    pub const fn bad_sign_position(function: &'static str, position: usize) -> Self {
        Self::BadSignPosition { function, position }
    }

    /// Creates an [`Error::NegativeInput`].
    #[must_use]
    pub const fn negative_input(function: &'static str) -> Self {
        Self::NegativeInput { function }
    }

    /// Creates an [`Error::OutOfBounds`].
    #[must_use]
    pub const fn out_of_bounds(x: i32, y: i32) -> Self {
        Self::OutOfBounds { x, y }
    }

    /// Creates an [`Error::IntegrityError`] from any displayable detail.
    pub fn integrity(detail: impl Into<String>) -> Self {
        Self::IntegrityError {
            detail: detail.into(),
        }
    }

    /// Creates an [`Error::InvalidParameters`] from any displayable detail.
    pub fn invalid_parameters(detail: impl Into<String>) -> Self {
        Self::InvalidParameters {
            detail: detail.into(),
        }
    }

    /// Creates an [`Error::TransactionFailed`] from any displayable detail.
    pub fn transaction_failed(detail: impl Into<String>) -> Self {
        Self::TransactionFailed {
            detail: detail.into(),
        }
    }

    /// Wraps an I/O error with a short context string.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Wraps a database error with a short context string.
    pub fn database(context: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit {
                function,
                position,
                found,
            } => write!(
                f,
                "{function}: invalid digit {found:?} at position {position}"
            ),
            Self::EmptyInput { function } => write!(f, "{function}: input must not be empty"),
            Self::BadSignPosition { function, position } => write!(
                f,
                "{function}: sign character only valid at position 0, found at {position}"
            ),
            Self::IncompleteMap { missing } => {
                write!(f, "transition map missing pairs: {missing:?}")
            }
            Self::NegativeInput { function } => {
                write!(f, "{function}: operator is not defined for negative input")
            }
            Self::NoCycleFound { max_iterations } => {
                write!(f, "no cycle found within {max_iterations} iterations")
            }
            Self::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) outside the 27x27 Kamea grid")
            }
            Self::IntegrityError { detail } => write!(f, "integrity error: {detail}"),
            Self::InvalidParameters { detail } => write!(f, "invalid parameters: {detail}"),
            Self::GroupIndexOutOfRange { group, index } => write!(
                f,
                "group {group:?} references dot index {index}, not present in the current figurate set"
            ),
            Self::TransactionFailed { detail } => write!(f, "transaction failed: {detail}"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Database { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Database { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A specialized `Result` type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
