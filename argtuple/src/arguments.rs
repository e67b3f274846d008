use std::ffi::{OsStr, OsString};

use crate::{Error, list::ArgumentList, parser::Parser};

/// Helper type for loading arguments from the environment. Usually you can
/// just use [`Parser::parse_env`] instead of reaching for this type.
///
/// This type exists to provide a convenient owned container for args
/// retrieved from [`std::env`], and to check that they're valid UTF-8 before
/// any of them reach a parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedArguments {
    arguments: Vec<OsString>,
}

impl LoadedArguments {
    pub fn new<S>(arguments: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<OsStr>,
    {
        Self {
            arguments: arguments
                .into_iter()
                .map(|arg| arg.as_ref().to_owned())
                .collect(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            arguments: std::env::args_os().collect(),
        }
    }

    /// The program name, if there are any arguments at all
    pub fn argv0(&self) -> Option<&OsStr> {
        self.arguments.first().map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Every argument as a `str`, failing on the first one that isn't valid
    /// UTF-8
    pub fn to_strs(&self) -> Result<Vec<&str>, Error> {
        self.arguments
            .iter()
            .map(|arg| {
                arg.to_str()
                    .ok_or_else(|| Error::InvalidUtf8(arg.to_string_lossy().into_owned()))
            })
            .collect()
    }

    pub fn parse_with<A>(&self, parser: &mut Parser<A>) -> Result<(), Error>
    where
        A: ArgumentList,
    {
        parser.parse(self.to_strs()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv0_and_strs() {
        let loaded = LoadedArguments::new(["prog", "-v", "file"]);

        assert_eq!(loaded.argv0(), Some(OsStr::new("prog")));
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.to_strs().unwrap(), ["prog", "-v", "file"]);
    }

    #[test]
    fn empty() {
        let loaded = LoadedArguments::new(Vec::<OsString>::new());

        assert!(loaded.is_empty());
        assert_eq!(loaded.argv0(), None);
        assert_eq!(
            loaded.parse_with(&mut Parser::new(())),
            Err(Error::Empty)
        );
    }
}
