use std::path::PathBuf;

use argtuple::{Argument, ArgumentList, Declare, Error, Parser, parse_declared};

/// A struct covering every field attribute
#[derive(Declare, Debug, PartialEq)]
struct Build {
    /// Directory to build in
    #[argtuple(short, placeholder = "DIR")]
    work_dir: PathBuf,

    /// Number of parallel
    /// jobs to run
    #[argtuple(short = 'j', default = 4)]
    jobs: usize,

    #[argtuple(long = "tag", default = "latest")]
    image_tag: String,

    /// Skip the cache
    no_cache: bool,

    #[argtuple(short)]
    r#verbose: bool,
}

#[derive(Declare, Debug, PartialEq)]
struct Nothing {}

#[test]
fn declared_names() {
    let arguments = Build::declare();
    let names: Vec<(&str, Option<char>)> = arguments
        .arguments()
        .map(|argument| (argument.name(), argument.short_name()))
        .collect();

    assert_eq!(
        names,
        [
            ("work-dir", Some('w')),
            ("jobs", Some('j')),
            ("tag", None),
            ("no-cache", None),
            ("verbose", Some('v')),
        ]
    );
}

#[test]
fn docs_become_help() {
    let arguments = Build::declare();

    assert_eq!(arguments.0.help(), "Directory to build in");
    assert_eq!(arguments.1.help(), "Number of parallel jobs to run");
    assert_eq!(arguments.2.help(), "");
}

#[test]
fn defaults_and_placeholders() {
    let arguments = Build::declare();

    assert_eq!(arguments.0.placeholder(), Some("DIR"));
    assert_eq!(arguments.0.default_text(), None);
    assert_eq!(arguments.1.placeholder(), Some("JOBS"));
    assert_eq!(arguments.1.default_text(), Some("4"));
    assert_eq!(arguments.2.placeholder(), Some("IMAGE_TAG"));
    assert_eq!(arguments.2.default_text(), Some("latest"));
    assert!(!arguments.3.with_value());
}

#[test]
fn parse_into_struct() {
    let parsed = parse_declared::<Build>([
        "build",
        "-w",
        "/tmp/out",
        "--tag=v2",
        "--no-cache",
        "src",
    ])
    .unwrap();

    assert_eq!(parsed.progname, "build");
    assert_eq!(parsed.remains, ["src"]);
    assert_eq!(
        parsed.options,
        Build {
            work_dir: PathBuf::from("/tmp/out"),
            jobs: 4,
            image_tag: "v2".to_owned(),
            no_cache: true,
            verbose: false,
        }
    );
}

#[test]
fn defaults_when_absent() {
    let parsed = parse_declared::<Build>(["build"]).unwrap();

    assert_eq!(
        parsed.options,
        Build {
            work_dir: PathBuf::new(),
            jobs: 4,
            image_tag: "latest".to_owned(),
            no_cache: false,
            verbose: false,
        }
    );
}

#[test]
fn errors_pass_through() {
    assert_eq!(
        parse_declared::<Build>(["build", "--jobs"]).unwrap_err().to_string(),
        "needs value: jobs"
    );
    assert_eq!(
        parse_declared::<Build>(["build", "-x"]).unwrap_err(),
        Error::UnknownShort('x')
    );
}

#[test]
fn empty_struct() {
    let parsed = parse_declared::<Nothing>(["prog", "a", "b"]).unwrap();

    assert_eq!(parsed.options, Nothing {});
    assert_eq!(parsed.remains, ["a", "b"]);
}

#[test]
fn parser_from_declared() {
    let mut parser = Parser::declared::<Build>();
    parser.parse(["build", "-v", "-j", "8"]).unwrap();

    let build = parser.into_parsed().into_declared::<Build>().options;
    assert_eq!(build.jobs, 8);
    assert!(build.verbose);
}

#[test]
fn declared_help() {
    let parser = Parser::declared::<Build>();
    let help = parser.help("");

    assert!(help.contains("  -w, --work-dir <DIR>   Directory to build in\n"));
    assert!(help.contains("  -j, --jobs <JOBS>      Number of parallel jobs to run [default: 4]\n"));
    assert!(help.contains("      --tag <IMAGE_TAG>  [default: latest]\n"));
    assert!(help.contains("  -v, --verbose\n"));
}
