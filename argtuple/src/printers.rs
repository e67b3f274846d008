use std::io::{self, Write as _};

use indent_write::io::IndentWriter;

use crate::{
    errors::Error,
    help::{OptionUsage, synopsis},
};

/// Help text is wrapped to this many columns, not counting the section
/// indent.
const WRAP_WIDTH: usize = 76;

/// Write `parse error: <message>`, the standard report for a failed parse.
pub fn write_parse_error(out: &mut (impl io::Write + ?Sized), error: &Error) -> io::Result<()> {
    writeln!(out, "parse error: {error}")
}

/*
Overall structure:

DESCRIPTION

Usage:
  prog [OPTIONS] [ARGS]...

Options:
  -f, --foo <ARG>  help
      --bar        help
 */
pub fn print_help(
    out: &mut (impl io::Write + ?Sized),
    program: &str,
    description: &str,
    options: &[OptionUsage<'_>],
) -> io::Result<()> {
    if !description.is_empty() {
        writeln!(out, "{description}")?;
    }

    write_section(out, "Usage", &format!("{}\n", synopsis(program, !options.is_empty())))?;

    let rows: Vec<(String, String)> = options
        .iter()
        .map(|option| (option.tags().to_string(), option.description().to_string()))
        .collect();

    let width = rows
        .iter()
        .map(|(tags, _)| tags.chars().count())
        .max()
        .unwrap_or(0);

    let body: String = rows
        .iter()
        .map(|(tags, description)| option_row(tags, description, width))
        .collect();

    write_section(out, "Options", &body)
}

/// `header:` after a blank line, then `body` indented two spaces. An empty
/// body writes nothing, header included.
fn write_section(out: &mut (impl io::Write + ?Sized), header: &str, body: &str) -> io::Result<()> {
    if body.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n{header}:")?;
    IndentWriter::new("  ", out).write_all(body.as_bytes())
}

/// One line of the options table: `tags` padded to `width`, then the
/// description wrapped so continuation lines start under its first word.
fn option_row(tags: &str, description: &str, width: usize) -> String {
    if description.is_empty() {
        return format!("{tags}\n");
    }

    let first = format!("{tags:<width$}  ");
    let rest = " ".repeat(first.chars().count());

    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(&first)
        .subsequent_indent(&rest);

    let mut row = textwrap::fill(description, options);
    row.push('\n');
    row
}
