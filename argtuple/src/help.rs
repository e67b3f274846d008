/*!
What a descriptor looks like in help output. See
[`Parser::write_help`][crate::Parser::write_help] for the whole message.
*/

use core::fmt::Display;

use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::option::Argument;

/// One option, as it appears in help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionUsage<'a> {
    pub long: &'a str,
    pub short: Option<char>,

    /// Set for options that take a value
    pub placeholder: Option<&'a str>,
    pub help: &'a str,
    pub default: Option<&'a str>,
}

impl<'a> OptionUsage<'a> {
    pub fn new(argument: &'a dyn Argument) -> Self {
        Self {
            long: argument.name(),
            short: argument.short_name(),
            placeholder: match argument.with_value() {
                true => Some(argument.placeholder().unwrap_or("VALUE")),
                false => None,
            },
            help: argument.help(),
            default: argument.default_text(),
        }
    }

    /// `-n, --name <NAME>`, padded so that long names line up when there's
    /// no short name
    pub fn tags(self) -> impl Display + 'a {
        let long = self.long;

        let tags = lazy_format!(match (self.short) {
            Some(short) => "-{short}, --{long}",
            None => "    --{long}",
        });

        lazy_format!(match (self.placeholder) {
            Some(placeholder) => "{tags} <{placeholder}>",
            None => "{tags}",
        })
    }

    /// The help text, with the default appended
    pub fn description(self) -> impl Display + 'a {
        lazy_format!(match ((self.help, self.default)) {
            ("", Some(default)) => "[default: {default}]",
            (help, Some(default)) => "{help} [default: {default}]",
            (help, None) => "{help}",
        })
    }
}

/// `prog [OPTIONS] [ARGS]...`
pub fn synopsis(program: &str, has_options: bool) -> impl Display + '_ {
    [
        Some(program).filter(|program| !program.is_empty()),
        has_options.then_some("[OPTIONS]"),
        Some("[ARGS]..."),
    ]
    .into_iter()
    .flatten()
    .join_with(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arg, flag};

    #[test]
    fn value_option_usage() {
        let count = arg::<u32>("count", 'c', "how many times")
            .default_value(1)
            .with_placeholder("N");
        let usage = OptionUsage::new(&count);

        assert_eq!(usage.tags().to_string(), "-c, --count <N>");
        assert_eq!(
            usage.description().to_string(),
            "how many times [default: 1]"
        );
    }

    #[test]
    fn flag_usage() {
        let dry_run = flag("dry-run", '\0', "");
        let usage = OptionUsage::new(&dry_run);

        assert_eq!(usage.tags().to_string(), "    --dry-run");
        assert_eq!(usage.description().to_string(), "");
    }

    #[test]
    fn default_without_help() {
        let level = arg::<u8>("level", 'l', "").default_value(3);

        assert_eq!(
            OptionUsage::new(&level).description().to_string(),
            "[default: 3]"
        );
    }

    #[test]
    fn synopses() {
        assert_eq!(synopsis("prog", true).to_string(), "prog [OPTIONS] [ARGS]...");
        assert_eq!(synopsis("prog", false).to_string(), "prog [ARGS]...");
        assert_eq!(synopsis("", true).to_string(), "[OPTIONS] [ARGS]...");
    }
}
