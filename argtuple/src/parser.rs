/*!
The [`Parser`]: owns a list of descriptors, scans a token sequence into them,
and keeps the results.
*/

use std::{collections::HashMap, ffi::OsStr, io};

use argtuple_parser::{Arg, ArgAccess, ArgumentsParser, Visitor};
use tracing::{debug, trace, warn};

use crate::{
    arguments::LoadedArguments,
    convert::Conversion,
    errors::{Error, OptionName},
    help::OptionUsage,
    list::{ArgumentList, Declare},
    option::Argument,
    printers::print_help,
};

/// Parser settings, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// How malformed values are handled
    pub conversion: Conversion,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            conversion: Conversion::Strict,
        }
    }

    #[inline]
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            conversion: Conversion::Lenient,
        }
    }
}

/// Everything a successful parse produced, moved out of the [`Parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<V> {
    /// The first token
    pub progname: String,

    /// The resolved option values, in declaration order
    pub options: V,

    /// Tokens that weren't options, in the order they appeared
    pub remains: Vec<String>,
}

impl<V> Parsed<V> {
    pub fn map<U>(self, op: impl FnOnce(V) -> U) -> Parsed<U> {
        Parsed {
            progname: self.progname,
            options: op(self.options),
            remains: self.remains,
        }
    }

    /// Turn the option tuple into the [`Declare`] type it was declared by
    pub fn into_declared<D>(self) -> Parsed<D>
    where
        D: Declare,
        D::Arguments: ArgumentList<Values = V>,
    {
        self.map(D::from_values)
    }
}

/**
A command-line parser for a fixed list of options.

```
use argtuple::{Parser, arg, flag};

let mut parser = Parser::new((
    arg::<String>("name", 'n', "who to greet"),
    flag("verbose", 'v', "talk more"),
));

parser.parse(["prog", "-n", "Alice", "--verbose", "file.txt"])?;

assert_eq!(parser.progname(), "prog");
assert_eq!(parser.options(), Some(&("Alice".to_owned(), true)));
assert_eq!(parser.remains(), ["file.txt"]);
# Ok::<(), argtuple::Error>(())
```

The first token is always the program name. Each following token is one of:

- `--name=value`: a value option gets `value`; a flag is set, and the value
  is ignored.
- `--name`: a value option takes the next token, whatever it looks like; a
  flag is set.
- `-n...`: like `--name`, looked up by short name. Only the character right
  after the dash matters; the rest of the token is ignored.
- `-`: skipped.
- anything else: a positional, kept in [`remains`][Parser::remains].

An option that appears more than once keeps its last value. `parse` is meant
to be called once; calling it again keeps the earlier positionals and
overwrites values given again.
*/
pub struct Parser<A: ArgumentList> {
    arguments: A,
    lookup: HashMap<String, usize>,
    short_lookup: HashMap<char, usize>,
    config: Config,

    progname: String,
    options: Option<A::Values>,
    remains: Vec<String>,
}

impl<A: ArgumentList> Parser<A> {
    #[must_use]
    pub fn new(arguments: A) -> Self {
        Self::with_config(arguments, Config::default())
    }

    /// Create a parser with non-default [`Config`]. Long and short names
    /// should be unique; if they aren't, the last declaration wins.
    #[must_use]
    pub fn with_config(arguments: A, config: Config) -> Self {
        let mut lookup = HashMap::with_capacity(A::LEN);
        let mut short_lookup = HashMap::new();

        for (index, argument) in arguments.arguments().enumerate() {
            if let Some(shadowed) = lookup.insert(argument.name().to_owned(), index) {
                warn!(
                    name = argument.name(),
                    shadowed, index, "duplicate long option, later declaration wins"
                );
            }

            if let Some(short) = argument.short_name()
                && let Some(shadowed) = short_lookup.insert(short, index)
            {
                warn!(
                    %short,
                    shadowed, index, "duplicate short option, later declaration wins"
                );
            }
        }

        Self {
            arguments,
            lookup,
            short_lookup,
            config,
            progname: String::new(),
            options: None,
            remains: Vec::new(),
        }
    }

    /// Create a parser from the options declared by `D`
    #[must_use]
    pub fn declared<D>() -> Self
    where
        D: Declare<Arguments = A>,
    {
        Self::new(D::declare())
    }

    /**
    Parse a sequence of tokens, the first of which is the program name.

    On success the results are available from [`progname`][Parser::progname],
    [`options`][Parser::options], and [`remains`][Parser::remains]. Any error
    aborts the parse; values assigned before the error stay assigned, but
    [`options`][Parser::options] isn't updated.
    */
    pub fn parse<S>(&mut self, args: impl IntoIterator<Item = S>) -> Result<(), Error>
    where
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let (progname, args) = args.split_first().ok_or(Error::Empty)?;

        self.progname = progname.as_ref().to_owned();
        debug!(progname = %self.progname, tokens = args.len(), "parsing arguments");

        let mut tokens = ArgumentsParser::new(args.iter().map(|arg| arg.as_ref()));

        while let Some(result) = tokens.next_arg(Scan { parser: &mut *self }) {
            result?;
        }

        self.options = Some(self.arguments.values());
        debug!(remains = self.remains.len(), "parsed arguments");

        Ok(())
    }

    /// Parse tokens as they come from the OS. Every token must be valid
    /// UTF-8.
    pub fn parse_os<S>(&mut self, args: impl IntoIterator<Item = S>) -> Result<(), Error>
    where
        S: AsRef<OsStr>,
    {
        LoadedArguments::new(args).parse_with(self)
    }

    /// Parse the arguments this process was started with
    pub fn parse_env(&mut self) -> Result<(), Error> {
        LoadedArguments::from_env().parse_with(self)
    }

    /// Parse the arguments this process was started with. On failure, print
    /// `parse error: <message>` to stderr and exit with status 1.
    pub fn parse_env_or_exit(&mut self) {
        use std::process;

        use crate::printers::write_parse_error;

        if let Err(error) = self.parse_env() {
            // Nothing more useful to do if stderr is gone
            let _ = write_parse_error(&mut io::stderr().lock(), &error);
            process::exit(1);
        }
    }

    /// The program name, from the first token
    #[inline]
    #[must_use]
    pub fn progname(&self) -> &str {
        &self.progname
    }

    /// The resolved option values, in declaration order. `None` until a
    /// parse succeeds.
    #[inline]
    #[must_use]
    pub fn options(&self) -> Option<&A::Values> {
        self.options.as_ref()
    }

    /// Tokens that weren't options, in the order they appeared
    #[inline]
    #[must_use]
    pub fn remains(&self) -> &[String] {
        &self.remains
    }

    /// The descriptors themselves, for access beyond the resolved values
    /// (such as [`ValueOption::try_value`][crate::ValueOption::try_value])
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> &A {
        &self.arguments
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Write a help message listing every option, in declaration order. The
    /// usage line uses the program name from the last parse, if any.
    pub fn write_help(&self, out: &mut (impl io::Write + ?Sized), description: &str) -> io::Result<()> {
        let options: Vec<OptionUsage<'_>> = self.arguments.arguments().map(OptionUsage::new).collect();

        print_help(out, &self.progname, description, &options)
    }

    /// The help message from [`write_help`][Parser::write_help], as a string
    #[must_use]
    pub fn help(&self, description: &str) -> String {
        let mut out = Vec::new();

        // Writing to a Vec can't fail
        let _ = self.write_help(&mut out, description);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Move the results out of the parser. If no parse has succeeded, the
    /// options are resolved from the descriptors as they stand.
    #[must_use]
    pub fn into_parsed(self) -> Parsed<A::Values> {
        let options = match self.options {
            Some(options) => options,
            None => self.arguments.values(),
        };

        Parsed {
            progname: self.progname,
            options,
            remains: self.remains,
        }
    }

    fn long_mut(&mut self, option: &str) -> Result<&mut dyn Argument, Error> {
        let argument = match self.lookup.get(option) {
            Some(&index) => self.arguments.get_mut(index),
            None => None,
        };

        argument.ok_or_else(|| Error::UnknownLong(option.to_owned()))
    }

    fn short_mut(&mut self, option: char) -> Result<&mut dyn Argument, Error> {
        let argument = match self.short_lookup.get(&option) {
            Some(&index) => self.arguments.get_mut(index),
            None => None,
        };

        argument.ok_or(Error::UnknownShort(option))
    }
}

/// Parse `args` into the options declared by `D`.
///
/// ```
/// use argtuple::{Declare, parse_declared};
///
/// #[derive(Declare)]
/// struct Cli {
///     #[argtuple(short)]
///     name: String,
///     #[argtuple(short)]
///     verbose: bool,
/// }
///
/// let parsed = parse_declared::<Cli>(["prog", "file1.txt", "file2.txt"])?;
/// assert_eq!(parsed.options.name, "");
/// assert!(!parsed.options.verbose);
/// assert_eq!(parsed.remains, ["file1.txt", "file2.txt"]);
/// # Ok::<(), argtuple::Error>(())
/// ```
pub fn parse_declared<D>(args: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Parsed<D>, Error>
where
    D: Declare,
{
    let mut parser = Parser::declared::<D>();
    parser.parse(args)?;
    Ok(parser.into_parsed().into_declared::<D>())
}

/// Hands each classified token to the matching descriptor.
struct Scan<'p, A: ArgumentList> {
    parser: &'p mut Parser<A>,
}

impl<'arg, A: ArgumentList> Visitor<'arg> for Scan<'_, A> {
    type Value = Result<(), Error>;

    fn visit_positional(self, argument: Arg<'arg>) -> Self::Value {
        trace!(?argument, "positional");
        self.parser.remains.push(argument.as_str().to_owned());
        Ok(())
    }

    fn visit_long_option(self, option: Arg<'arg>, argument: Arg<'arg>) -> Self::Value {
        trace!(?option, ?argument, "long option with inline value");
        let conversion = self.parser.config.conversion;
        let target = self.parser.long_mut(option.as_str())?;

        match target.with_value() {
            true => assign(target, argument.as_str(), conversion),
            false => {
                target.store_true();
                Ok(())
            }
        }
    }

    fn visit_long(self, option: Arg<'arg>, arg: impl ArgAccess<'arg>) -> Self::Value {
        trace!(?option, "long option");
        let conversion = self.parser.config.conversion;
        let target = self.parser.long_mut(option.as_str())?;

        match target.with_value() {
            true => {
                let value = arg
                    .take()
                    .ok_or_else(|| Error::NeedsValue(OptionName::Long(option.as_str().to_owned())))?;

                assign(target, value.as_str(), conversion)
            }
            false => {
                target.store_true();
                Ok(())
            }
        }
    }

    fn visit_short(self, option: char, arg: impl ArgAccess<'arg>) -> Self::Value {
        trace!(%option, "short option");
        let conversion = self.parser.config.conversion;
        let target = self.parser.short_mut(option)?;

        match target.with_value() {
            true => {
                let value = arg.take().ok_or(Error::NeedsValue(OptionName::Short(option)))?;

                assign(target, value.as_str(), conversion)
            }
            false => {
                target.store_true();
                Ok(())
            }
        }
    }

    fn visit_bare_dash(self) -> Self::Value {
        trace!("skipping bare '-'");
        Ok(())
    }
}

fn assign(target: &mut dyn Argument, text: &str, conversion: Conversion) -> Result<(), Error> {
    target
        .assign(text, conversion)
        .map_err(|reason| Error::InvalidValue {
            option: target.name().to_owned(),
            text: text.to_owned(),
            reason,
        })
}
