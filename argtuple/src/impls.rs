/*!
Implementations of [`Value`] for various primitive and standard library types
 */

use core::num::IntErrorKind;
use std::{ffi::OsString, path::PathBuf};

use crate::convert::{ConversionError, ParsedValue, Value};

macro_rules! from_str {
    ($(
        $type:ident $($(::$path:ident)*,)?
    )*) => {
        $(
            impl ParsedValue for $type $($(:: $path)*)? {}
        )*
    };
}

from_str! {
    f32 f64

    core::net::Ipv4Addr,
    core::net::Ipv6Addr,
    core::net::IpAddr,
    core::net::SocketAddrV4,
    core::net::SocketAddrV6,
    core::net::SocketAddr,
}

/// Leading whitespace, an optional sign, and as many digits as follow it.
/// `None` if there are no digits.
fn leading_integer(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    match unsigned.bytes().take_while(u8::is_ascii_digit).count() {
        0 => None,
        digits => Some(&text[..text.len() - unsigned.len() + digits]),
    }
}

// Out of range integers saturate when read leniently
macro_rules! integers {
    ($($type:ident)*) => {
        $(
            impl ParsedValue for $type {
                fn parse_lenient(text: &str) -> Option<Self> {
                    match leading_integer(text)?.parse::<$type>() {
                        Ok(value) => Some(value),
                        Err(err) => match err.kind() {
                            IntErrorKind::PosOverflow => Some($type::MAX),
                            IntErrorKind::NegOverflow => Some($type::MIN),
                            _ => None,
                        },
                    }
                }
            }
        )*
    };
}

integers! {
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
}

/// Leniently, just the first character that isn't whitespace
impl ParsedValue for char {
    #[inline]
    fn parse_lenient(text: &str) -> Option<Self> {
        text.trim_start().chars().next()
    }
}

// Strings and paths take the text verbatim, spaces and all, in both modes
macro_rules! verbatim {
    ($($type:ident)*) => {
        $(
            impl ParsedValue for $type {
                #[inline]
                fn parse_lenient(text: &str) -> Option<Self> {
                    Some(Self::from(text))
                }
            }
        )*
    };
}

verbatim! { String OsString PathBuf }

/// Accepts `true`/`1` and `false`/`0`. Leniently, only numbers are
/// understood: zero is false and anything else is true.
impl Value for bool {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        match text {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConversionError::new(
                "expected one of `true`, `false`, `1`, `0`",
            )),
        }
    }

    fn from_text_lenient(text: &str) -> Option<Self> {
        leading_integer(text).map(|number| number.bytes().any(|b| matches!(b, b'1'..=b'9')))
    }
}

/// An optional value is `None` until the option is given; this is the way to
/// declare options of types that have no [`Default`].
impl<T: Value> Value for Option<T> {
    #[inline]
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        T::from_text(text).map(Some)
    }

    #[inline]
    fn from_text_lenient(text: &str) -> Option<Self> {
        T::from_text_lenient(text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(
            String::from_text(" Alice Smith ").unwrap(),
            " Alice Smith "
        );
        assert_eq!(String::from_text("").unwrap(), "");
        assert_eq!(
            OsString::from_text("a b").unwrap(),
            OsString::from("a b")
        );
        assert_eq!(
            PathBuf::from_text("out/file.txt").unwrap(),
            PathBuf::from("out/file.txt")
        );
    }

    #[test]
    fn bools() {
        assert!(bool::from_text("true").unwrap());
        assert!(bool::from_text("1").unwrap());
        assert!(!bool::from_text("false").unwrap());
        assert!(!bool::from_text("0").unwrap());
        assert!(bool::from_text("yes").is_err());
    }

    #[test]
    fn numbers_and_addresses() {
        assert_eq!(u8::from_text("255").unwrap(), 255);
        assert!(u8::from_text("256").is_err());
        assert_eq!(f64::from_text("2.5e3").unwrap(), 2500.0);
        assert_eq!(char::from_text("x").unwrap(), 'x');
        assert!(char::from_text("xy").is_err());
        assert_eq!(
            SocketAddr::from_text("127.0.0.1:80").unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 80))
        );
    }

    #[test]
    fn leading_integers() {
        assert_eq!(leading_integer("  -12ab"), Some("-12"));
        assert_eq!(leading_integer("+7"), Some("+7"));
        assert_eq!(leading_integer("007 "), Some("007"));
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("x1"), None);
    }

    #[test]
    fn option_wraps_lenient_value() {
        assert_eq!(Option::<u16>::from_text_lenient(" 8080/tcp"), Some(Some(8080)));
        assert_eq!(Option::<u16>::from_text_lenient("http"), None);
    }

    #[test]
    fn option_wraps_inner_value() {
        assert_eq!(Option::<u16>::from_text("7").unwrap(), Some(7));
        assert!(Option::<u16>::from_text("x").is_err());
    }
}
