/*!
Option descriptors: the named, typed slots that command-line options are
parsed into.

There are two kinds of descriptor: [`ValueOption<T>`], which takes a value
(`--count 3`, `--count=3`, `-c 3`), and [`FlagOption`], which is a boolean
that's set by its presence (`--verbose`, `-v`). Both are manipulated by the
[`Parser`][crate::Parser] through the object-safe [`Argument`] trait, so that
a list of differently-typed descriptors can be driven by one non-generic
scan loop. The typed half, [`Descriptor`], is only used once parsing is
finished, to read the values back out.
*/

use core::fmt::Display;
use std::borrow::Cow;

use crate::{
    Error,
    convert::{self, Conversion, ConversionError, Value},
};

/**
The uniform interface the parser uses to drive a descriptor, regardless of
its value type.
*/
pub trait Argument {
    /// The long name, used as `--name`. Never empty.
    fn name(&self) -> &str;

    /// The short name, used as `-n`, if any
    fn short_name(&self) -> Option<char>;

    /// Human-readable description. Only used for help output.
    fn help(&self) -> &str;

    /// True if this option needs a value (either inline with `=`, or as the
    /// next token). This decides between [`assign`][Argument::assign] and
    /// [`store_true`][Argument::store_true] for each occurrence.
    fn with_value(&self) -> bool;

    /// Convert and store `text`, replacing any earlier value. Flags ignore
    /// this.
    fn assign(&mut self, text: &str, conversion: Conversion) -> Result<(), ConversionError>;

    /// Set a flag. Value options ignore this.
    fn store_true(&mut self);

    /// The name of the value in help output, like `<COUNT>`
    #[inline]
    fn placeholder(&self) -> Option<&str> {
        None
    }

    /// The declared default, formatted for help output
    #[inline]
    fn default_text(&self) -> Option<&str> {
        None
    }
}

/// The typed side of a descriptor: what it resolves to once parsing is done.
pub trait Descriptor: Argument {
    type Value;

    fn resolve(&self) -> Self::Value;
}

/// Identity shared by both kinds of descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tag {
    name: String,
    short_name: Option<char>,
    help: String,
}

impl Tag {
    fn new(name: String) -> Self {
        debug_assert!(!name.is_empty(), "option names can't be empty");

        Self {
            name,
            short_name: None,
            help: String::new(),
        }
    }

    fn set_short(&mut self, short_name: char) {
        self.short_name = match short_name {
            '\0' => None,
            short => Some(short),
        };
    }
}

/**
An option that takes a value of type `T`.

The value is absent until the option appears on the command line. Once
parsing is done, [`resolve`][Descriptor::resolve] produces the last value
given, or the declared [default][ValueOption::default_value], or
`T::default()`, in that order.
*/
#[derive(Debug, Clone)]
pub struct ValueOption<T> {
    tag: Tag,
    placeholder: Cow<'static, str>,
    default: Option<T>,
    default_text: Option<String>,
    value: Option<T>,
}

impl<T> ValueOption<T> {
    /// An option with only a long name. Add the rest with
    /// [`with_short`][Self::with_short], [`with_help`][Self::with_help] and
    /// friends.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: Tag::new(name.into()),
            placeholder: Cow::Borrowed("VALUE"),
            default: None,
            default_text: None,
            value: None,
        }
    }

    /// Set the short name, used as `-n`. `'\0'` removes it.
    #[must_use]
    pub fn with_short(mut self, short_name: char) -> Self {
        self.tag.set_short(short_name);
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.tag.help = help.into();
        self
    }

    /// Give this option a default, used when it doesn't appear on the command
    /// line. The default is shown in help output.
    #[must_use]
    pub fn default_value(mut self, value: T) -> Self
    where
        T: Display,
    {
        self.default_text = Some(convert::to_text(&value));
        self.default = Some(value);
        self
    }

    /// Set the name of the value in help output. Defaults to `VALUE`.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The value from the command line, if one has been assigned
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// True if the option has appeared on the command line
    #[inline]
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// The value from the command line, falling back to the declared default.
    /// It's an error to call this for an option that wasn't given and has no
    /// default.
    pub fn try_value(&self) -> Result<&T, Error> {
        self.value
            .as_ref()
            .or(self.default.as_ref())
            .ok_or_else(|| Error::Uninitialized(self.tag.name.clone()))
    }
}

impl<T> Argument for ValueOption<T>
where
    T: Value + Default,
{
    #[inline]
    fn name(&self) -> &str {
        &self.tag.name
    }

    #[inline]
    fn short_name(&self) -> Option<char> {
        self.tag.short_name
    }

    #[inline]
    fn help(&self) -> &str {
        &self.tag.help
    }

    #[inline]
    fn with_value(&self) -> bool {
        true
    }

    fn assign(&mut self, text: &str, conversion: Conversion) -> Result<(), ConversionError> {
        self.value = Some(convert::convert(text, conversion)?);
        Ok(())
    }

    #[inline]
    fn store_true(&mut self) {}

    #[inline]
    fn placeholder(&self) -> Option<&str> {
        Some(&*self.placeholder)
    }

    #[inline]
    fn default_text(&self) -> Option<&str> {
        self.default_text.as_deref()
    }
}

impl<T> Descriptor for ValueOption<T>
where
    T: Value + Default + Clone,
{
    type Value = T;

    fn resolve(&self) -> T {
        self.value
            .as_ref()
            .or(self.default.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// A boolean option, `false` unless it appears on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOption {
    tag: Tag,
    value: bool,
}

impl FlagOption {
    /// A flag with only a long name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: Tag::new(name.into()),
            value: false,
        }
    }

    /// Set the short name, used as `-n`. `'\0'` removes it.
    #[must_use]
    pub fn with_short(mut self, short_name: char) -> Self {
        self.tag.set_short(short_name);
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.tag.help = help.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value
    }
}

impl Argument for FlagOption {
    #[inline]
    fn name(&self) -> &str {
        &self.tag.name
    }

    #[inline]
    fn short_name(&self) -> Option<char> {
        self.tag.short_name
    }

    #[inline]
    fn help(&self) -> &str {
        &self.tag.help
    }

    #[inline]
    fn with_value(&self) -> bool {
        false
    }

    #[inline]
    fn assign(&mut self, _text: &str, _conversion: Conversion) -> Result<(), ConversionError> {
        Ok(())
    }

    #[inline]
    fn store_true(&mut self) {
        self.value = true;
    }
}

impl Descriptor for FlagOption {
    type Value = bool;

    #[inline]
    fn resolve(&self) -> bool {
        self.value
    }
}

/**
Declare an option that takes a value of type `T`.

`short_name` of `'\0'` means the option has no short name. Without a short
name or help text, [`ValueOption::new`] reads better:

```
use argtuple::{ValueOption, arg};

let count = arg::<u32>("count", 'c', "how many times").default_value(1);
let level = ValueOption::<u8>::new("level").with_help("log level");
```
*/
pub fn arg<T>(
    name: impl Into<String>,
    short_name: char,
    help: impl Into<String>,
) -> ValueOption<T> {
    ValueOption::new(name).with_short(short_name).with_help(help)
}

/**
Declare a boolean flag.

`short_name` of `'\0'` means the flag has no short name; see also
[`FlagOption::new`].
*/
pub fn flag(name: impl Into<String>, short_name: char, help: impl Into<String>) -> FlagOption {
    FlagOption::new(name).with_short(short_name).with_help(help)
}
