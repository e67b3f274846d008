/*!
The error type for everything that can go wrong while parsing, and the option
naming used in its messages.
 */

use core::fmt::{self, Display};

use lazy_format::lazy_format;
use thiserror::Error;

use crate::convert::ConversionError;

/// The name an option was given by on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// `--long`
    Long(String),

    /// `-s`
    Short(char),
}

impl OptionName {
    /// The option as it was typed, dashes included
    pub fn tagged(&self) -> impl Display + '_ {
        lazy_format!(match (self) {
            OptionName::Long(long) => "--{long}",
            OptionName::Short(short) => "-{short}",
        })
    }
}

/// Displays the bare name, without dashes
impl Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionName::Long(long) => f.write_str(long),
            OptionName::Short(short) => write!(f, "{short}"),
        }
    }
}

/**
Everything that can go wrong while parsing. Every error is fatal to the parse
in progress; the messages are stable and meant to be shown to users, usually
behind a `parse error: ` prefix (see
[`Parser::parse_env_or_exit`][crate::Parser::parse_env_or_exit]).
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// There wasn't even a program name
    #[error("argument must be at least one item(s).")]
    Empty,

    /// A `--long` option that wasn't declared
    #[error("unknown option: --{0}")]
    UnknownLong(String),

    /// A `-s` short option that wasn't declared
    #[error("unknown option: -{0}")]
    UnknownShort(char),

    /// A value option was the last token, with nothing after it to use as
    /// its value
    #[error("needs value: {0}")]
    NeedsValue(OptionName),

    /// A value option was read before it was ever assigned, and it has no
    /// declared default
    #[error("uninitialized argument: {0}")]
    Uninitialized(String),

    /// The text given to a value option couldn't be converted to its type.
    /// Only raised with [`Conversion::Strict`][crate::Conversion::Strict].
    #[error("invalid value for --{option}: {text:?}: {reason}")]
    InvalidValue {
        option: String,
        text: String,
        reason: ConversionError,
    },

    /// A token from the OS wasn't valid UTF-8. The lossy version of it is
    /// included.
    #[error("invalid UTF-8 in argument: {0}")]
    InvalidUtf8(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::Empty.to_string(),
            "argument must be at least one item(s)."
        );
        assert_eq!(
            Error::UnknownLong("unknown".to_owned()).to_string(),
            "unknown option: --unknown"
        );
        assert_eq!(
            Error::UnknownShort('x').to_string(),
            "unknown option: -x"
        );
        assert_eq!(
            Error::NeedsValue(OptionName::Long("count".to_owned())).to_string(),
            "needs value: count"
        );
        assert_eq!(
            Error::NeedsValue(OptionName::Short('n')).to_string(),
            "needs value: n"
        );
        assert_eq!(
            Error::InvalidValue {
                option: "count".to_owned(),
                text: "abc".to_owned(),
                reason: ConversionError::new("invalid digit found in string"),
            }
            .to_string(),
            "invalid value for --count: \"abc\": invalid digit found in string"
        );
    }

    #[test]
    fn tagged_names() {
        assert_eq!(
            OptionName::Long("name".to_owned()).tagged().to_string(),
            "--name"
        );
        assert_eq!(OptionName::Short('v').tagged().to_string(), "-v");
    }
}
