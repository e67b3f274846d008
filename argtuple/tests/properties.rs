use argtuple::{Config, Error, FlagOption, OptionName, Parser, ValueOption, arg, flag};

fn name_verbose() -> Parser<(ValueOption<String>, FlagOption)> {
    Parser::new((
        arg::<String>("name", 'n', "who to greet"),
        flag("verbose", 'v', "talk more"),
    ))
}

#[test]
fn greet_alice() {
    let mut parser = name_verbose();
    parser
        .parse(["prog", "-n", "Alice", "--verbose", "file.txt"])
        .unwrap();

    let parsed = parser.into_parsed();
    assert_eq!(parsed.progname, "prog");
    assert_eq!(parsed.options, ("Alice".to_owned(), true));
    assert_eq!(parsed.remains, ["file.txt"]);
}

#[test]
fn only_positionals() {
    let mut parser = name_verbose();
    parser.parse(["prog", "file1.txt", "file2.txt"]).unwrap();

    let parsed = parser.into_parsed();
    assert_eq!(parsed.options, (String::new(), false));
    assert_eq!(parsed.remains, ["file1.txt", "file2.txt"]);
}

#[test]
fn inline_and_separate_values_agree() {
    for text in ["0", "42", "-17", "2147483647"] {
        let inline = format!("--level={text}");

        let mut joined = Parser::new((arg::<i32>("level", 'l', ""),));
        joined.parse(["prog", inline.as_str()]).unwrap();

        let mut separate = Parser::new((arg::<i32>("level", 'l', ""),));
        separate.parse(["prog", "--level", text]).unwrap();

        let mut short = Parser::new((arg::<i32>("level", 'l', ""),));
        short.parse(["prog", "-l", text]).unwrap();

        let expected: i32 = text.parse().unwrap();
        assert_eq!(joined.options(), Some(&(expected,)));
        assert_eq!(separate.options(), joined.options());
        assert_eq!(short.options(), joined.options());
    }
}

#[test]
fn values_of_several_types() {
    let mut parser = Parser::new((
        arg::<f64>("ratio", 'r', ""),
        arg::<char>("delimiter", 'd', ""),
        arg::<bool>("enabled", 'e', ""),
        arg::<std::net::Ipv4Addr>("bind", 'b', ""),
    ));

    parser
        .parse([
            "prog",
            "--ratio=0.25",
            "-d",
            ";",
            "--enabled",
            "1",
            "--bind=127.0.0.1",
        ])
        .unwrap();

    assert_eq!(
        parser.options(),
        Some(&(0.25, ';', true, std::net::Ipv4Addr::LOCALHOST))
    );
}

#[test]
fn flags_consume_no_tokens() {
    let mut parser = Parser::new((flag("all", 'a', ""), flag("force", 'f', "")));
    parser
        .parse(["prog", "--all", "one", "-f", "two", "three"])
        .unwrap();

    assert_eq!(parser.options(), Some(&(true, true)));
    assert_eq!(parser.remains(), ["one", "two", "three"]);
}

#[test]
fn positionals_keep_their_order() {
    let mut parser = Parser::new((arg::<String>("out", 'o', ""), flag("quiet", 'q', "")));
    parser
        .parse(["prog", "c", "-o", "x", "b", "-q", "--out=y", "a", "-", "d"])
        .unwrap();

    assert_eq!(parser.remains(), ["c", "b", "a", "d"]);
}

#[test]
fn tuple_order_is_declaration_order() {
    let declare = || {
        Parser::new((
            arg::<u8>("first", '1', ""),
            arg::<String>("second", '2', ""),
            flag("third", '3', ""),
        ))
    };

    let mut forwards = declare();
    forwards
        .parse(["prog", "--first=1", "--second=two", "--third"])
        .unwrap();

    let mut backwards = declare();
    backwards
        .parse(["prog", "--third", "--second=two", "--first=1"])
        .unwrap();

    let expected = (1, "two".to_owned(), true);
    assert_eq!(forwards.options(), Some(&expected));
    assert_eq!(backwards.options(), Some(&expected));
}

#[test]
fn unknown_option_message() {
    let mut parser = name_verbose();
    let err = parser.parse(["prog", "--unknown"]).unwrap_err();

    assert!(err.to_string().contains("--unknown"));
}

#[test]
fn needs_value_message() {
    let mut parser = Parser::new((arg::<u32>("count", 'c', ""),));
    let err = parser.parse(["prog", "--count"]).unwrap_err();

    assert_eq!(err, Error::NeedsValue(OptionName::Long("count".to_owned())));
    assert!(err.to_string().contains("count"));
}

#[test]
fn strict_and_lenient() {
    let tokens = ["prog", "--port", "eighty"];

    let mut strict = Parser::new((arg::<u16>("port", 'p', "").default_value(8080),));
    let err = strict.parse(tokens).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref option, .. } if option == "port"));

    let mut lenient =
        Parser::with_config((arg::<u16>("port", 'p', "").default_value(8080),), Config::lenient());
    lenient.parse(tokens).unwrap();

    // A malformed value is still an assignment, so the declared default
    // doesn't apply
    assert_eq!(lenient.options(), Some(&(0,)));
}

#[test]
fn declared_default_applies_when_absent() {
    let mut parser = Parser::new((arg::<u16>("port", 'p', "").default_value(8080),));
    parser.parse(["prog"]).unwrap();

    assert_eq!(parser.options(), Some(&(8080,)));
    assert_eq!(parser.arguments().0.try_value(), Ok(&8080));
}
