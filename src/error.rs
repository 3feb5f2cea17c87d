//! The error type for date/time utility operations.

use alloc::borrow::Cow;
use core::fmt;

/// The category of a [`DateTimeError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A value of an unsupported shape was supplied.
    #[default]
    Type,
    /// A numeric component was outside its valid range.
    Range,
    /// A specification or relative-date string failed to parse.
    Syntax,
    /// An operation was invalid for the current state of the value.
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Runtime => "RuntimeError",
        })
    }
}

/// The error returned by fallible date/time utility operations.
///
/// Errors are built from a kind constructor and an optional message:
///
/// ```rust
/// use datetime_utils::error::{DateTimeError, ErrorKind};
///
/// let err = DateTimeError::runtime().with_message("cannot modify date once set");
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateTimeError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates a runtime error.
    #[inline]
    #[must_use]
    pub const fn runtime() -> Self {
        Self::new(ErrorKind::Runtime)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for DateTimeError {}
