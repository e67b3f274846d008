#![no_std]

/*!
Low-level classification of command-line tokens. Takes care of distinctions
between long options, short options, and positionals, and of handing the next
token to options that need a value. No type handling happens here, and no
lookup of option names either; usually this is too low level to use directly.
*/

use ::core::fmt::{self, Debug};

/**
A single, raw token passed in from the command line.

This type is used in two ways: to indicate option names, and to indicate
arguments themselves. For instance, given `--target foo --path=bar input.txt`,
`target`, `foo`, `path`, `bar`, and `input.txt` would all be passed as [`Arg`]
values to the relevant visitor methods.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arg<'arg>(&'arg str);

impl<'arg> Arg<'arg> {
    #[inline]
    #[must_use]
    pub const fn new(arg: &'arg str) -> Self {
        Self(arg)
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'arg str {
        self.0
    }
}

impl PartialEq<str> for Arg<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Arg<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/**
The [`ArgumentsParser`] type operates by passing the tokens it classifies into
a [`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A positional token, one that doesn't start with `-`.
    fn visit_positional(self, argument: Arg<'arg>) -> Self::Value;

    /// A long option that definitely has an argument, because it was given
    /// as `--option=argument`. Only the first `=` splits.
    fn visit_long_option(self, option: Arg<'arg>, argument: Arg<'arg>) -> Self::Value;

    /// A long option or flag, such as `--option`
    fn visit_long(self, option: Arg<'arg>, arg: impl ArgAccess<'arg>) -> Self::Value;

    /// A short option or flag, such as `-o`. Only the first character after
    /// the dash is reported; anything following it in the same token is
    /// dropped.
    fn visit_short(self, option: char, arg: impl ArgAccess<'arg>) -> Self::Value;

    /// A lone `-`, with nothing after it.
    fn visit_bare_dash(self) -> Self::Value;
}

/**
[`ArgAccess`] allows a visitor to decide if a given option needs an argument,
based on the identity of the option.

Consider `--foo bar`. Is this a pair of parameters (the flag `--foo` and the
positional parameter `bar`) or a single option `--foo bar` that takes an
argument? The [`ArgumentsParser`] can't independently classify a given token,
so instead, a visitor requests the next token via this trait only for options
that need one.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get the following token from the parser. This should only be called by
    options that need it; flags should simply ignore it, so that the next token
    is classified on its own.

    The token is handed over verbatim, even if it looks like an option itself.
    This returns [`None`] if all of the tokens have been exhausted.
    */
    fn take(self) -> Option<Arg<'arg>>;
}

/**
An `ArgumentsParser` is the main entry point into `argtuple_parser`. It
classifies one token in each call to [`next_arg`][ArgumentsParser::next_arg],
sending it to the given [`Visitor`].

`argtuple_parser` operates entirely on borrowed data, because we assume that
command-line arguments can be loaded early on in `main` and then handled in a
borrowed form for the rest of the program. The ubiquitous `'arg` lifetime
refers to this borrowed command line data.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<I> {
    args: I,
}

impl<'arg, I> ArgumentsParser<I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from an iterator of string slices, where
    each slice is a single token received from the command line. This list
    should *exclude* the name of the program, which is commonly passed as
    the first argument in the list.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            args: args.into_iter(),
        }
    }

    /// Classify the next token and hand it to `visitor`. Returns [`None`]
    /// once the tokens are exhausted.
    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        let argument = self.args.next()?;

        Some(match argument.strip_prefix("--") {
            Some(option) => match split_once(option, b'=') {
                Some((option, argument)) => {
                    visitor.visit_long_option(Arg(option), Arg(argument))
                }
                None => visitor.visit_long(Arg(option), NextArgAccess { args: &mut self.args }),
            },
            None => match argument.strip_prefix('-') {
                Some(short) => match short.chars().next() {
                    None => visitor.visit_bare_dash(),
                    Some(option) => {
                        visitor.visit_short(option, NextArgAccess { args: &mut self.args })
                    }
                },
                None => visitor.visit_positional(Arg(argument)),
            },
        })
    }
}

/// ArgAccess implementation that gets the next token from the list.
struct NextArgAccess<'a, I> {
    args: &'a mut I,
}

impl<'arg, I> ArgAccess<'arg> for NextArgAccess<'_, I>
where
    I: Iterator<Item = &'arg str>,
{
    #[inline]
    fn take(self) -> Option<Arg<'arg>> {
        self.args.next().map(Arg)
    }
}

/// Split at the first `delimiter`. The delimiter must be ASCII, so both
/// halves land on char boundaries.
fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    debug_assert!(delimiter.is_ascii());

    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
