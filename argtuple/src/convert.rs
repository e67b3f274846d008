/*!
Conversion between command-line text and typed values.

Text becomes a typed value through the [`Value`] trait. Most types get it for
free from their [`FromStr`] implementation by way of the [`ParsedValue`]
marker, which is already implemented for the numeric primitives, `char`,
`String`, paths and network addresses.
The reverse direction, used when showing defaults in help output, is plain
[`Display`] via [`to_text`].
*/

use core::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use thiserror::Error;

/// A piece of command-line text couldn't be turned into the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/**
How malformed text is treated when it's assigned to a value option.

[`Strict`][Conversion::Strict] is the default, and reports the failure as an
[`Error::InvalidValue`][crate::Error::InvalidValue].

[`Lenient`][Conversion::Lenient] never fails. It reads text the way formatted
stream extraction does: leading whitespace is skipped, the longest prefix
that makes sense is used, and anything after it is ignored. So `--count=42abc`
stores `42`, `--count=" 7"` stores `7`, and `bool` only understands numbers
(`0` is false, anything else true). If no prefix converts, the type's
[`Default`] is stored, so `--count=abc` leaves `count` at `0`. Lenient mode
exists for compatibility with callers that depend on this; it hides typos from
users, so prefer strict mode for anything new.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    #[default]
    Strict,
    Lenient,
}

/**
A type that can be parsed from a single piece of command-line text.

For types with a [`FromStr`] implementation, it's usually enough to implement
the [`ParsedValue`] marker instead.
*/
pub trait Value: Sized {
    fn from_text(text: &str) -> Result<Self, ConversionError>;

    /// Read `text` the [lenient][Conversion::Lenient] way. `None` if no part
    /// of it converts.
    #[inline]
    fn from_text_lenient(text: &str) -> Option<Self> {
        longest_prefix(text, |prefix| Self::from_text(prefix).ok())
    }
}

/// Marker for types whose [`FromStr`] implementation is how they should be
/// read from the command line. Implementing it provides [`Value`].
pub trait ParsedValue: FromStr {
    /// The lenient reading; by default, the longest prefix that parses
    #[inline]
    fn parse_lenient(text: &str) -> Option<Self> {
        longest_prefix(text, |prefix| prefix.parse().ok())
    }
}

impl<T> Value for T
where
    T: ParsedValue,
    T::Err: Display,
{
    #[inline]
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        text.parse().map_err(ConversionError::new)
    }

    #[inline]
    fn from_text_lenient(text: &str) -> Option<Self> {
        T::parse_lenient(text)
    }
}

/// Skip leading whitespace, then try `parse` on successively shorter
/// prefixes of what's left, returning the first success.
pub fn longest_prefix<T>(text: &str, mut parse: impl FnMut(&str) -> Option<T>) -> Option<T> {
    let text = text.trim_start();

    text.char_indices()
        .rev()
        .find_map(|(index, c)| parse(&text[..index + c.len_utf8()]))
}

/// Convert `text` into a `T`, applying the `conversion` policy if it's
/// malformed.
pub fn convert<T>(text: &str, conversion: Conversion) -> Result<T, ConversionError>
where
    T: Value + Default,
{
    match conversion {
        Conversion::Strict => T::from_text(text),
        Conversion::Lenient => Ok(T::from_text_lenient(text).unwrap_or_default()),
    }
}

/// Write `value` out using its default textual representation.
pub fn to_text(value: &impl Display) -> String {
    let mut text = String::new();

    // Writing into a String only fails if the Display impl itself does
    match write!(text, "{value}") {
        Ok(()) => text,
        Err(fmt::Error) => String::new(),
    }
}
