mod error;

use std::{
    env,
    fmt::Display,
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use argtuple::{Config, Declare, Parser, Value as _};
use lazy_format::lazy_format;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::DemoError;

const DESCRIPTION: &str = "Greets everyone named on the command line.";

/// Set to `true` or `1` to turn malformed option values into defaults
const LENIENT_VAR: &str = "ARGTUPLE_LENIENT";

#[derive(Declare, Debug)]
struct Cli {
    /// Who to greet, in addition to any positional names
    #[argtuple(short, default = "world")]
    name: String,

    /// How many times to greet each of them
    #[argtuple(short, default = 1, placeholder = "N")]
    count: u32,

    /// Write greetings to this file instead of stdout
    #[argtuple(short, placeholder = "FILE")]
    output: Option<PathBuf>,

    /// Shout the greetings
    #[argtuple(short)]
    loud: bool,

    /// Print this help and exit
    #[argtuple(short)]
    help: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn config_from_env() -> Result<Config, DemoError> {
    let Ok(value) = env::var(LENIENT_VAR) else {
        return Ok(Config::strict());
    };

    match bool::from_text(&value) {
        Ok(true) => Ok(Config::lenient()),
        Ok(false) => Ok(Config::strict()),
        Err(source) => Err(DemoError::Config {
            var: LENIENT_VAR,
            value,
            source,
        }),
    }
}

fn greeting(name: &str, loud: bool) -> impl Display + '_ {
    let shouted = name.to_uppercase();

    lazy_format!(match (loud) {
        true => "HELLO, {shouted}!",
        false => "Hello, {name}.",
    })
}

fn greet(out: &mut dyn Write, cli: &Cli, names: &[String]) -> anyhow::Result<()> {
    if cli.count == 0 {
        return Err(DemoError::ZeroCount.into());
    }

    let names = [cli.name.as_str()]
        .into_iter()
        .chain(names.iter().map(String::as_str));

    for name in names {
        for _ in 0..cli.count {
            writeln!(out, "{}", greeting(name, cli.loud))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = config_from_env()?;
    debug!(?config, "loaded config");

    let mut parser = Parser::with_config(Cli::declare(), config);
    parser.parse_env_or_exit();

    let help = parser.help(DESCRIPTION);
    let parsed = parser.into_parsed().into_declared::<Cli>();
    info!(cli = ?parsed.options, names = ?parsed.remains, "parsed command line");

    let cli = parsed.options;

    if cli.help {
        print!("{help}");
        return Ok(());
    }

    match cli.output {
        Some(ref path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;

            greet(&mut file, &cli, &parsed.remains)
        }
        None => greet(&mut io::stdout().lock(), &cli, &parsed.remains),
    }
}
