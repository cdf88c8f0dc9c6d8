use argweave::{
    tokenize, Arity, Assembler, Command, ErrorKind, GeneralParser, NamedConfig, NamedParameter,
    ParseError, PositionalParameter, ScalarType, Token, Value, ValueType,
};

fn watch() -> Command {
    Command::new(
        "watch",
        vec![
            NamedParameter::new("silent", ValueType::flag()),
            NamedParameter::new("verbose", ValueType::flag()).short('v'),
            NamedParameter::new("all", ValueType::flag()).short('a'),
            NamedParameter::new("case", ValueType::flag()).short('C'),
            NamedParameter::new("log", ValueType::text()).short('l'),
            NamedParameter::new("bla", ValueType::text()),
        ],
        vec![PositionalParameter::new(
            "files",
            ValueType::list(ScalarType::Text),
        )],
    )
    .unwrap()
}

#[test]
fn scenario_stages() {
    // Setup
    let args = [
        "watch",
        "--silent",
        "test.txt",
        "-v",
        "-aC",
        "-l",
        "test.log",
        "--bla=1",
    ];
    let assembler = Assembler::new(vec![
        NamedConfig::new("silent", None, Arity::NoValue),
        NamedConfig::new("verbose", Some('v'), Arity::NoValue),
        NamedConfig::new("all", Some('a'), Arity::NoValue),
        NamedConfig::new("case", Some('C'), Arity::NoValue),
        NamedConfig::new("log", Some('l'), Arity::SingleValue),
        NamedConfig::new("bla", None, Arity::SingleValue),
    ])
    .unwrap();

    // Execute
    let tokenized = tokenize(&args);
    let token_count = tokenized.tokens.len();
    let assembled = assembler.assemble(tokenized.tokens);

    // Verify
    assert_eq!(token_count, 9);
    assert!(!tokenized.errors.has_errors());
    assert_eq!(assembled.positionals, vec!["watch", "test.txt"]);
    assert_eq!(
        assembled.named.keys().collect::<Vec<_>>(),
        vec!["silent", "verbose", "all", "case", "log", "bla"]
    );
    assert_eq!(assembled.values("log").unwrap(), &["test.log"]);
    assert_eq!(assembled.values("bla").unwrap(), &["1"]);
    assert!(!assembled.errors.has_errors());
}

#[test]
fn scenario_parse_args() {
    // Execute
    let parsed = watch().parse_args(&[
        "watch",
        "--silent",
        "test.txt",
        "-v",
        "-aC",
        "-l",
        "test.log",
        "--bla=1",
    ]);

    // Verify
    assert!(parsed.is_ok(), "{}", parsed.errors);
    assert!(parsed.flag("silent"));
    assert!(parsed.flag("verbose"));
    assert!(parsed.flag("all"));
    assert!(parsed.flag("case"));
    assert_eq!(parsed.get("log").and_then(Value::as_str), Some("test.log"));
    assert_eq!(parsed.get("bla").and_then(Value::as_str), Some("1"));
    assert_eq!(
        parsed.get("files"),
        Some(&Value::List(vec![
            Value::from("watch"),
            Value::from("test.txt")
        ]))
    );
}

#[test]
fn greedy_multi_value() {
    // Setup
    let command = Command::new(
        "program",
        vec![
            NamedParameter::new("files", ValueType::list(ScalarType::Text)),
            NamedParameter::new("verbose", ValueType::flag()),
        ],
        vec![],
    )
    .unwrap();

    // Execute
    let parsed = command.parse_args(&["--files", "a.txt", "b.txt", "--verbose"]);

    // Verify
    assert!(parsed.is_ok());
    assert_eq!(
        parsed.get("files"),
        Some(&Value::List(vec![Value::from("a.txt"), Value::from("b.txt")]))
    );
    assert!(parsed.flag("verbose"));
}

#[test]
fn duplicate_first_wins() {
    // Setup
    let command = Command::new(
        "program",
        vec![NamedParameter::new("count", ValueType::integer())],
        vec![],
    )
    .unwrap();

    // Execute
    let parsed = command.parse_args(&["--count", "1", "--count", "2"]);

    // Verify
    assert_eq!(parsed.errors.kinds(), vec![ErrorKind::ParameterAlreadySpecified]);
    assert_eq!(parsed.get("count"), Some(&Value::Integer(1)));
}

#[test]
fn default_and_missing() {
    // Setup
    let command = Command::new(
        "program",
        vec![
            NamedParameter::new("level", ValueType::integer().with_default(3)),
            NamedParameter::new("name", ValueType::text()),
        ],
        vec![],
    )
    .unwrap();

    // Execute
    let parsed = command.parse_args(&[]);

    // Verify
    assert_eq!(parsed.get("level"), Some(&Value::Integer(3)));
    assert_eq!(parsed.get("name"), None);
    assert_eq!(parsed.errors.kinds(), vec![ErrorKind::MissingRequiredParameter]);
    assert_eq!(
        parsed.errors.to_string(),
        "Parameter 'name' has not been specified, but is required."
    );
}

#[test]
fn malformed_digit_start() {
    // Execute
    let tokenized = tokenize(&["--3bad", "--bad3"]);

    // Verify
    assert_eq!(tokenized.tokens.len(), 1);
    assert!(matches!(&tokenized.tokens[0], Token::Named(named) if named.name == "bad3"));
    let errors: Vec<ParseError> = tokenized.errors.into_iter().map(ParseError::from).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::MalformedArgument);
    assert_eq!(errors[0].to_string(), "Malformed argument '--3bad'.");
}

#[test]
fn every_error_reported() {
    // Execute
    let parsed = watch().parse_args(&["--", "-x"]);
    let unknown = watch().parse_args(&["-x", "-al"]);

    // Verify
    assert_eq!(parsed.errors.kinds(), vec![ErrorKind::MissingRequiredParameter; 2]);
    assert_eq!(
        parsed.get("files"),
        Some(&Value::List(vec![Value::from("-x")]))
    );
    assert_eq!(
        unknown.errors.kinds(),
        vec![
            ErrorKind::UnknownParameter,
            ErrorKind::GroupedParametersMustNotAcceptValues,
            ErrorKind::MissingValue,
            ErrorKind::MissingRequiredParameter,
            ErrorKind::MissingRequiredParameter,
        ]
    );
}

#[test]
fn general_parser_values() {
    // Setup
    let parser = GeneralParser::new(watch()).unwrap();

    // Execute
    let values = parser
        .parse_tokens(&["-l", "test.log", "--bla", "1", "a.txt"])
        .unwrap();

    // Verify
    assert_eq!(
        values.keys().collect::<Vec<_>>(),
        vec!["silent", "verbose", "all", "case", "log", "bla", "files"]
    );
    assert_eq!(values.get("files"), Some(&Value::List(vec![Value::from("a.txt")])));
}

#[test]
fn general_parser_help() {
    // Setup
    let parser = GeneralParser::new(watch()).unwrap();

    // Execute & Verify
    assert_eq!(parser.parse_tokens(&["--help"]), Err(0));
    assert_eq!(parser.parse_tokens(&["--bla"]), Err(1));
}

#[test]
fn general_parser_version() {
    // Setup
    let parser = GeneralParser::new(watch()).unwrap().version("2.0.0").unwrap();

    // Execute & Verify
    assert_eq!(parser.parse_tokens(&["--version", "--bla"]), Err(0));
    assert!(!parser
        .parse_tokens(&["-l", "x.log", "--bla", "1"])
        .unwrap()
        .contains_key("version"));
}

#[test]
fn general_parser_reserved() {
    // Setup
    let command = Command::new(
        "program",
        vec![NamedParameter::new("help", ValueType::flag())],
        vec![],
    )
    .unwrap();

    // Execute
    let result = GeneralParser::new(command);

    // Verify
    assert!(result.is_err());
}
