use indexmap::IndexMap;

use crate::api::{NamedParameter, PositionalParameter};
use crate::error::{CoerceError, Errors};
use crate::matcher::AssembledCommand;
use crate::model::{Arity, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The typed values of a command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Coerced {
    /// Named parameters in declaration order, then positional parameters in declaration order.
    pub(crate) values: IndexMap<String, Value>,
    pub(crate) errors: Errors<CoerceError>,
    /// Positional values claimed by no positional parameter.
    pub(crate) rest: Vec<String>,
}

pub(crate) fn coerce(
    named: &[&NamedParameter],
    positionals: &[PositionalParameter],
    assembled: &AssembledCommand,
) -> Coerced {
    let mut values = IndexMap::default();
    let mut errors: Errors<CoerceError> = Errors::default();

    for parameter in named {
        let name = parameter.name();
        let value_type = parameter.value_type();

        match assembled.values(name) {
            Some(raw) => match value_type.convert(raw) {
                Ok(value) => {
                    values.insert(name.to_string(), value);
                }
                Err(message) => {
                    errors.push(CoerceError::ArgumentParseError {
                        name: name.to_string(),
                        message,
                    });
                }
            },
            None => match value_type.default_value() {
                Some(default) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Defaulted '{name}' to {default:?}.");
                    }

                    values.insert(name.to_string(), default.clone());
                }
                None => {
                    errors.push(CoerceError::MissingRequiredParameter {
                        name: name.to_string(),
                    });
                }
            },
        }
    }

    let mut remaining = assembled.positionals.iter().cloned();

    for parameter in positionals {
        let name = parameter.name();
        let value_type = parameter.value_type();
        let raw: Vec<String> = match parameter.arity() {
            Arity::MultiValue => remaining.by_ref().collect(),
            _ => remaining.next().into_iter().collect(),
        };

        let converted = if raw.is_empty() {
            match (value_type.default_value(), parameter.arity()) {
                (Some(default), _) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Defaulted positional '{name}' to {default:?}.");
                    }

                    Ok(default.clone())
                }
                // An absent array is an empty array.
                (None, Arity::MultiValue) => value_type.convert(&raw),
                (None, _) => {
                    errors.push(CoerceError::MissingPositionalValue {
                        name: name.to_string(),
                    });
                    continue;
                }
            }
        } else {
            value_type.convert(&raw)
        };

        match converted {
            Ok(value) => {
                values.insert(name.to_string(), value);
            }
            Err(message) => {
                errors.push(CoerceError::ArgumentParseError {
                    name: name.to_string(),
                    message,
                });
            }
        }
    }

    let rest: Vec<String> = remaining.collect();

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Coerced {} values with {} errors and {} unclaimed positionals.",
            values.len(),
            errors.len(),
            rest.len()
        );
    }

    Coerced {
        values,
        errors,
        rest,
    }
}
