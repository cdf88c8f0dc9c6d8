use indexmap::IndexMap;

use crate::api::parameter::{NamedParameter, PositionalParameter};
use crate::constant::*;
use crate::error::{ConfigError, Errors, ParseError};
use crate::matcher::{Assembler, NamedConfig};
use crate::model::{Arity, Value};
use crate::parser::coerce;
use crate::tokens::tokenize;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A validated command schema: the named and positional parameters of a program.
///
/// ### Example
/// ```
/// # use argweave_core as argweave;
/// use argweave::{Command, NamedParameter, PositionalParameter, ScalarType, Value, ValueType};
///
/// let command = Command::new(
///     "watch",
///     vec![
///         NamedParameter::new("verbose", ValueType::flag()).short('v'),
///         NamedParameter::new("level", ValueType::integer().with_default(1)).short('l'),
///     ],
///     vec![PositionalParameter::new("files", ValueType::list(ScalarType::Text))],
/// )
/// .unwrap();
///
/// let parsed = command.parse_args(&["-v", "a.txt", "b.txt"]);
///
/// assert!(parsed.is_ok());
/// assert!(parsed.flag("verbose"));
/// assert_eq!(parsed.get("level"), Some(&Value::Integer(1)));
/// assert_eq!(
///     parsed.get("files"),
///     Some(&Value::List(vec![Value::from("a.txt"), Value::from("b.txt")]))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    program: String,
    about: Option<String>,
    named: IndexMap<String, NamedParameter>,
    positionals: Vec<PositionalParameter>,
    assembler: Assembler,
}

impl Command {
    /// Create a command schema, validating it once.
    ///
    /// Fails when the schema is ambiguous or cannot be satisfied:
    /// * a name is not a valid identifier, or a short alias is not a valid short character,
    /// * two parameters share a name, or two named parameters share a short alias,
    /// * a choice type declares no choices,
    /// * a positional parameter does not accept a value,
    /// * a positional parameter accepting multiple values is not the last one.
    pub fn new(
        program: impl Into<String>,
        named: Vec<NamedParameter>,
        positionals: Vec<PositionalParameter>,
    ) -> Result<Self, ConfigError> {
        let mut named_parameters: IndexMap<String, NamedParameter> = IndexMap::default();

        for parameter in named.into_iter() {
            validate_identifier(parameter.name())?;
            validate_choices(parameter.name(), parameter.value_type().choices())?;

            if let Some(short) = parameter.short_alias() {
                if !is_short_character(short) {
                    return Err(ConfigError(format!(
                        "Short name '{short}' of parameter '{}' is not a valid short name.",
                        parameter.name()
                    )));
                }
            }

            if named_parameters.contains_key(parameter.name()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{}'.",
                    parameter.name()
                )));
            }

            named_parameters.insert(parameter.name().to_string(), parameter);
        }

        let count = positionals.len();

        for (index, parameter) in positionals.iter().enumerate() {
            let name = parameter.name();
            validate_identifier(name)?;
            validate_choices(name, parameter.value_type().choices())?;

            if named_parameters.contains_key(name)
                || positionals[..index].iter().any(|p| p.name() == name)
            {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{name}'."
                )));
            }

            match parameter.arity() {
                Arity::NoValue => {
                    return Err(ConfigError(format!(
                        "Positional parameter '{name}' must accept a value."
                    )));
                }
                Arity::MultiValue if index + 1 != count => {
                    return Err(ConfigError(format!(
                        "Only the last positional parameter may accept multiple values, but '{name}' does."
                    )));
                }
                _ => {}
            }
        }

        let assembler = Assembler::new(named_parameters.values().map(NamedConfig::from))?;

        Ok(Self {
            program: program.into(),
            about: None,
            named: named_parameters,
            positionals,
            assembler,
        })
    }

    /// Set the description shown in the help message.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// The named parameters, in declaration order.
    pub fn named(&self) -> impl Iterator<Item = &NamedParameter> {
        self.named.values()
    }

    /// The positional parameters, in declaration order.
    pub fn positionals(&self) -> &[PositionalParameter] {
        &self.positionals
    }

    /// Rebuild this schema with `parameter` declared before the existing named parameters.
    pub(crate) fn prepend(self, parameter: NamedParameter) -> Result<Self, ConfigError> {
        self.insert(0, parameter)
    }

    /// Rebuild this schema with `parameter` declared at `index` among the named parameters (clamped to the end).
    pub(crate) fn insert(
        self,
        index: usize,
        parameter: NamedParameter,
    ) -> Result<Self, ConfigError> {
        let Command {
            program,
            about,
            named,
            positionals,
            ..
        } = self;
        let mut all: Vec<NamedParameter> = named.into_values().collect();
        all.insert(index.min(all.len()), parameter);
        let command = Command::new(program, all, positionals)?;

        Ok(Command { about, ..command })
    }

    /// Run the command line through tokenizing, assembly and coercion.
    ///
    /// Every stage runs to completion, regardless of the errors found in earlier stages.
    /// The errors are merged in stage order, and within a stage, in the order they were found.
    pub fn parse_args(&self, args: &[&str]) -> ParsedCommand {
        let tokenized = tokenize(args);
        let assembled = self.assembler.assemble(tokenized.tokens);
        let named: Vec<&NamedParameter> = self.named.values().collect();
        let coerced = coerce(&named, &self.positionals, &assembled);

        let mut errors: Errors<ParseError> = Errors::default();
        errors.extend_from(tokenized.errors);
        errors.extend_from(assembled.errors);
        errors.extend_from(coerced.errors);

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed '{}' into {} values with {} errors.",
                self.program,
                coerced.values.len(),
                errors.len()
            );
        }

        ParsedCommand {
            values: coerced.values,
            errors,
            rest: coerced.rest,
        }
    }
}

fn validate_identifier(name: &str) -> Result<(), ConfigError> {
    if IDENTIFIER_RE.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError(format!(
            "Parameter name '{name}' is not a valid identifier."
        )))
    }
}

fn validate_choices(name: &str, choices: Option<&[String]>) -> Result<(), ConfigError> {
    match choices {
        Some([]) => Err(ConfigError(format!(
            "Parameter '{name}' must declare at least one choice."
        ))),
        _ => Ok(()),
    }
}

/// The typed result of parsing a command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// The typed values: named parameters in declaration order, then positional parameters in declaration order.
    /// A parameter with an error has no value.
    pub values: IndexMap<String, Value>,
    /// Every error, from tokenizing, then assembly, then coercion.
    pub errors: Errors<ParseError>,
    /// Positional values claimed by no positional parameter, in argv order.
    pub rest: Vec<String>,
}

impl ParsedCommand {
    /// Whether parsing produced no errors.
    pub fn is_ok(&self) -> bool {
        !self.errors.has_errors()
    }

    /// The value of the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the flag `name` is set (`false` when it has no boolean value).
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }
}
