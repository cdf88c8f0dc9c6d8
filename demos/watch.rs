use argweave::{Command, GeneralParser, NamedParameter, PositionalParameter, ScalarType, ValueType};

fn main() {
    let command = Command::new(
        "watch",
        vec![
            NamedParameter::new("silent", ValueType::flag()).help("Do not print changes."),
            NamedParameter::new("verbose", ValueType::flag())
                .short('v')
                .help("Print every event."),
            NamedParameter::new("log", ValueType::text().with_default("watch.log"))
                .short('l')
                .help("The file to log into."),
            NamedParameter::new("interval", ValueType::float().with_default(0.5))
                .help("Seconds between polls."),
            NamedParameter::new("mode", ValueType::choice(["poll", "notify"]).with_default("notify")),
        ],
        vec![PositionalParameter::new("files", ValueType::list(ScalarType::Text))
            .help("The files to watch.")],
    )
    .expect("The command must be valid.")
    .about("Watch files for changes.");

    let parser = GeneralParser::new(command)
        .and_then(|parser| parser.version(env!("CARGO_PKG_VERSION")))
        .expect("The parser must be valid.");
    let values = parser.parse();

    for (name, value) in values.iter() {
        println!("{name}: {value}");
    }
}
