use indexmap::IndexMap;
use std::env;

use crate::api::{Command, NamedParameter, ValueType};
use crate::constant::*;
use crate::error::ConfigError;
use crate::model::Value;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser: parses the Cli against a [`Command`], printing help or errors to the user.
///
/// The help flag (`-h` or `--help`) is reserved; it is declared for you.
/// The version flag (`--version`) is declared through [`GeneralParser::version`].
pub struct GeneralParser {
    command: Command,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
    version: Option<String>,
}

impl GeneralParser {
    /// Create a command line parser, declaring the help flag on the `command`.
    ///
    /// Fails if the `command` already uses the name `help` or the short name `h`.
    pub fn new(command: Command) -> Result<Self, ConfigError> {
        Self::with_interface(command, Printer::terminal(), Box::<ConsoleInterface>::default())
    }

    pub(crate) fn with_interface(
        command: Command,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Self, ConfigError> {
        let help = NamedParameter::new(HELP_NAME, ValueType::flag())
            .short(HELP_SHORT)
            .help(HELP_MESSAGE);
        let command = command.prepend(help)?;

        Ok(Self {
            command,
            printer,
            user_interface,
            version: None,
        })
    }

    /// Declare the version flag (`--version`), which prints `version: {version}` and returns with `Err(0)`.
    ///
    /// Fails if the command already uses the name `version`.
    pub fn version(self, version: impl Into<String>) -> Result<Self, ConfigError> {
        let GeneralParser {
            command,
            printer,
            user_interface,
            version: _,
        } = self;
        let flag = NamedParameter::new(VERSION_NAME, ValueType::flag()).help(VERSION_MESSAGE);
        // Listed right after the help flag.
        let command = command.insert(1, flag)?;

        Ok(Self {
            command,
            printer,
            user_interface,
            version: Some(version.into()),
        })
    }

    /// Run the command line parser against the input tokens.
    ///
    /// The tokens are parsed in three phases, each of which runs to completion:
    /// 1. Tokenizing splits the tokens into named and positional tokens.
    /// 2. Assembly binds the named tokens (and the values they consume) to the named parameters.
    /// 3. Coercion converts the values into their declared types, binding the remaining positional values to the positional parameters.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and return with `Err(0)`.
    /// This takes precedence over any errors.
    ///
    /// Next, if the version flag is declared and encountered, the parser will display the version and return with `Err(0)`.
    ///
    /// Otherwise, if any phase encounters errors (ex: an unknown parameter, an inconvertible value, etc), the parser will display every error followed by the help message, and return with `Err(1)`.
    ///
    /// Otherwise, returns the typed values (excluding the help and version flags).
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<IndexMap<String, Value>, i32> {
        let mut parsed = self.command.parse_args(tokens);

        if parsed.flag(HELP_NAME) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested; skipping {} errors.", parsed.errors.len());
            }

            self.printer.print_help(&self.command, &*self.user_interface);
            return Err(0);
        }

        if let Some(version) = &self.version {
            if parsed.flag(VERSION_NAME) {
                self.user_interface.print(format!("version: {version}"));
                return Err(0);
            }
        }

        if parsed.errors.has_errors() {
            for error in parsed.errors.iter() {
                self.user_interface.print_error(error);
            }

            self.user_interface.print("".to_string());
            self.printer.print_help(&self.command, &*self.user_interface);
            return Err(1);
        }

        parsed.values.shift_remove(HELP_NAME);
        if self.version.is_some() {
            parsed.values.shift_remove(VERSION_NAME);
        }
        Ok(parsed.values)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except that on `Err(code)` the process exits with `code` (via `std::process::exit`).
    pub fn parse(self) -> IndexMap<String, Value> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(values) => values,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
