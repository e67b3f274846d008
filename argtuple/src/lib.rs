/*!
A small, typed command line options parser. Options are declared as a tuple
of descriptors, and parsing produces a tuple of values in the same order:

```
use argtuple::{Parser, arg, flag};

let mut parser = Parser::new((
    arg::<String>("name", 'n', "who to greet"),
    arg::<u32>("count", 'c', "how many times").default_value(1),
    flag("verbose", 'v', "talk more"),
));

parser.parse(["prog", "--name=Alice", "-v", "notes.txt"])?;

let (name, count, verbose) = parser.options().cloned().unwrap_or_default();
assert_eq!(name, "Alice");
assert_eq!(count, 1);
assert!(verbose);
assert_eq!(parser.remains(), ["notes.txt"]);
# Ok::<(), argtuple::Error>(())
```

- [`arg`] and [`flag`] create the descriptors, [`ValueOption`] and
  [`FlagOption`]. Any type implementing [`Value`] can be an option's value;
  most standard types already do, and types that implement
  [`FromStr`][core::str::FromStr] can opt in with [`ParsedValue`].
- [`Parser`] scans the tokens. Failures are reported as an [`Error`], whose
  messages are meant to be shown to users as-is.
- [`#[derive(Declare)]`][macro@Declare] declares options from the fields of a
  struct, so that [`parse_declared`] can produce the struct directly.
*/

pub mod arguments;
pub mod convert;
pub mod errors;
pub mod help;
mod impls;
pub mod list;
pub mod option;
pub mod parser;
mod printers;

pub use argtuple_derive::Declare;

pub use crate::{
    arguments::LoadedArguments,
    convert::{Conversion, ConversionError, ParsedValue, Value},
    errors::{Error, OptionName},
    list::{ArgumentList, Declare},
    option::{Argument, Descriptor, FlagOption, ValueOption, arg, flag},
    parser::{Config, Parsed, Parser, parse_declared},
};
