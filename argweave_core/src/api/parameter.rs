use crate::api::value::ValueType;
use crate::matcher::NamedConfig;
use crate::model::Arity;

/// A parameter matched by name: `--name`, `/name`, or via its short alias `-n`.
///
/// ### Example
/// ```
/// # use argweave_core as argweave;
/// use argweave::{Arity, NamedParameter, ValueType};
///
/// let level = NamedParameter::new("level", ValueType::integer().with_default(1))
///     .short('l')
///     .help("The verbosity level.");
///
/// assert_eq!(level.name(), "level");
/// assert_eq!(level.short_alias(), Some('l'));
/// assert_eq!(level.value_type().arity(), Arity::SingleValue);
/// ```
#[derive(Debug, Clone)]
pub struct NamedParameter {
    name: String,
    value_type: ValueType,
    short: Option<char>,
    help: Option<String>,
}

impl NamedParameter {
    /// Create a named parameter.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            short: None,
            help: None,
        }
    }

    /// Set the short alias.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the description shown in the help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// The short alias, if any.
    pub fn short_alias(&self) -> Option<char> {
        self.short
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn arity(&self) -> Arity {
        self.value_type.arity()
    }
}

impl From<&NamedParameter> for NamedConfig {
    fn from(parameter: &NamedParameter) -> Self {
        NamedConfig::new(parameter.name(), parameter.short, parameter.arity())
    }
}

/// A parameter matched by position, amongst the values not consumed by named parameters.
#[derive(Debug, Clone)]
pub struct PositionalParameter {
    name: String,
    value_type: ValueType,
    help: Option<String>,
}

impl PositionalParameter {
    /// Create a positional parameter.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            help: None,
        }
    }

    /// Set the description shown in the help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn arity(&self) -> Arity {
        self.value_type.arity()
    }
}
