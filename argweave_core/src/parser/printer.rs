use terminal_size::{terminal_size, Width};

use crate::api::{Command, NamedParameter, PositionalParameter, ValueType};
use crate::model::Arity;
use crate::parser::interface::{ColumnRenderer, UserInterface};

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;
// Used when there is no terminal to measure.
const DEFAULT_TOTAL_WIDTH: usize = 80;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

struct Row {
    left: String,
    middle: String,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_help(
        &self,
        command: &Command,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let mut summary = Vec::default();
        let mut positional_rows = Vec::default();
        let mut required_rows = Vec::default();
        let mut optional_rows = Vec::default();

        for parameter in command.positionals() {
            let (usage, row) = positional(parameter);
            summary.push(usage);
            positional_rows.push(row);
        }

        for parameter in command.named() {
            let (usage, row) = named(parameter);

            if parameter.value_type().is_optional() {
                optional_rows.push((usage, row));
            } else {
                summary.push(usage);
                required_rows.push(row);
            }
        }

        let optional_rows: Vec<Row> = optional_rows
            .into_iter()
            .map(|(usage, row)| {
                summary.push(format!("[{usage}]"));
                row
            })
            .collect();

        let sections = [
            ("positional parameters:", positional_rows),
            ("required parameters:", required_rows),
            ("optional parameters:", optional_rows),
        ];
        let rows = sections.iter().flat_map(|(_, rows)| rows.iter());
        let left_width = rows
            .clone()
            .map(|row| row.left.chars().count())
            .max()
            .unwrap_or(0);
        let middle_width = rows
            .map(|row| row.middle.chars().count() + MAIN_INDENT)
            .max()
            .unwrap_or(0);
        let column_renderer = ColumnRenderer::guided(
            PADDING_WIDTH,
            left_width,
            middle_width,
            self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH),
        );

        if summary.is_empty() {
            user_interface.print(format!("usage: {}", command.program()));
        } else {
            user_interface.print(format!(
                "usage: {p} {s}",
                p = command.program(),
                s = summary.join(" ")
            ));
        }

        if let Some(about) = command.description() {
            user_interface.print("".to_string());
            user_interface.print(about.to_string());
        }

        for (title, rows) in sections.iter() {
            if rows.is_empty() {
                continue;
            }

            user_interface.print("".to_string());
            user_interface.print(title.to_string());

            for Row { left, middle } in rows {
                for line in column_renderer.render(MAIN_INDENT, left, middle) {
                    user_interface.print(line);
                }
            }
        }
    }
}

fn positional(parameter: &PositionalParameter) -> (String, Row) {
    let value_type = parameter.value_type();
    let grammar = format!("{{{}:{}}}", parameter.name(), value_type.name());
    let usage = if value_type.is_optional() {
        format!("[{grammar}]")
    } else {
        grammar.clone()
    };

    (
        usage,
        Row {
            left: grammar,
            middle: describe(parameter.description(), value_type),
        },
    )
}

fn named(parameter: &NamedParameter) -> (String, Row) {
    let name = parameter.name();
    let value_type = parameter.value_type();
    let grammar = match value_type.arity() {
        Arity::NoValue => "".to_string(),
        _ => format!("={{{}}}", value_type.name()),
    };
    let (usage, left) = match parameter.short_alias() {
        Some(short) => (
            format!("-{short}{grammar}"),
            format!("-{short}{grammar}, --{name}{grammar}"),
        ),
        None => (format!("--{name}{grammar}"), format!("--{name}{grammar}")),
    };

    (
        usage,
        Row {
            left,
            middle: describe(parameter.description(), value_type),
        },
    )
}

fn describe(description: Option<&str>, value_type: &ValueType) -> String {
    let default = match (value_type.arity(), value_type.default_value()) {
        // A flag's default is implied by its presence.
        (Arity::NoValue, _) | (_, None) => None,
        (_, Some(default)) => Some(format!("(default: {default})")),
    };

    match (description, default) {
        (Some(description), Some(default)) => format!("{description} {default}"),
        (Some(description), None) => description.to_string(),
        (None, Some(default)) => default,
        (None, None) => "".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScalarType;
    use crate::model::Value;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;

    #[test]
    fn print_help_empty() {
        // Setup
        let command = Command::new("program", vec![], vec![]).unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        Printer::new(Some(120)).print_help(&command, &interface);

        // Verify
        assert_eq!(interface.consume_message(), "usage: program");
    }

    #[test]
    fn print_help() {
        // Setup
        let command = Command::new(
            "watch",
            vec![
                NamedParameter::new("help", ValueType::flag())
                    .short('h')
                    .help("Show this help message and exit."),
                NamedParameter::new("verbose", ValueType::flag())
                    .short('v')
                    .help("Print more."),
                NamedParameter::new("level", ValueType::integer().with_default(1))
                    .short('l')
                    .help("The verbosity level."),
                NamedParameter::new("mode", ValueType::choice(["fast", "slow"]))
                    .help("How to watch."),
                NamedParameter::new("tags", ValueType::list(ScalarType::Text)),
            ],
            vec![
                PositionalParameter::new("target", ValueType::text()).help("What to watch."),
                PositionalParameter::new("files", ValueType::list(ScalarType::Text))
                    .help("The files."),
            ],
        )
        .unwrap()
        .about("Watch some files.");
        let interface = InMemoryInterface::default();

        // Execute
        Printer::new(Some(120)).print_help(&command, &interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"usage: watch {target:string} {files:string[]} --mode={fast|slow} --tags={string[]} [-h] [-v] [-l={int}]

Watch some files.

positional parameters:
 {target:string}           What to watch.
 {files:string[]}          The files.

required parameters:
 --mode={fast|slow}        How to watch.
 --tags={string[]}

optional parameters:
 -h, --help                Show this help message and exit.
 -v, --verbose             Print more.
 -l={int}, --level={int}   The verbosity level. (default: 1)"#
        );
    }

    #[test]
    fn print_help_positional_default() {
        // Setup
        let command = Command::new(
            "program",
            vec![],
            vec![PositionalParameter::new(
                "items",
                ValueType::list(ScalarType::Integer)
                    .with_default(Value::List(vec![Value::Integer(1), Value::Integer(2)])),
            )],
        )
        .unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        Printer::new(Some(120)).print_help(&command, &interface);

        // Verify
        let message = interface.consume_message();
        assert_contains!(message, "usage: program [{items:int[]}]");
        assert_contains!(message, " {items:int[]}   (default: [1, 2])");
    }

    #[test]
    fn print_help_wraps() {
        // Setup
        let command = Command::new(
            "program",
            vec![NamedParameter::new("verbose", ValueType::flag()).help(
                "A rather long description of the verbose flag which will need to be wrapped.",
            )],
            vec![],
        )
        .unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        Printer::new(Some(40)).print_help(&command, &interface);

        // Verify
        let message = interface.consume_message();
        for line in message.lines() {
            assert!(line.chars().count() <= 40, "'{line}' is too wide");
        }
        assert_contains!(message, " --verbose   A rather long description");
    }

    #[test]
    fn print_help_no_terminal() {
        // Setup
        let command = Command::new(
            "program",
            vec![NamedParameter::new("verbose", ValueType::flag()).help(
                "A rather long description of the verbose flag which will need to be wrapped once the line grows beyond eighty characters.",
            )],
            vec![],
        )
        .unwrap();
        let interface = InMemoryInterface::default();

        // Execute
        Printer::new(None).print_help(&command, &interface);

        // Verify
        let message = interface.consume_message();
        for line in message.lines() {
            assert!(line.chars().count() <= DEFAULT_TOTAL_WIDTH, "'{line}' is too wide");
        }
    }
}
