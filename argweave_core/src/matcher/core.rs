use indexmap::IndexMap;
use std::collections::HashMap;

use crate::error::{AssembleError, ConfigError, Errors};
use crate::matcher::model::*;
use crate::model::Arity;
use crate::tokens::{NamedToken, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Binds tokens to named parameters.
///
/// ### Example
/// ```
/// # use argweave_core as argweave;
/// use argweave::{tokenize, Arity, Assembler, NamedConfig};
///
/// let assembler = Assembler::new(vec![
///     NamedConfig::new("files", None, Arity::MultiValue),
///     NamedConfig::new("verbose", Some('v'), Arity::NoValue),
/// ])
/// .unwrap();
/// let tokenized = tokenize(&["--files", "a.txt", "b.txt", "-v", "c.txt"]);
/// let assembled = assembler.assemble(tokenized.tokens);
///
/// assert_eq!(assembled.values("files").unwrap(), &["a.txt", "b.txt"]);
/// assert!(assembled.contains("verbose"));
/// assert_eq!(assembled.positionals, vec!["c.txt"]);
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    named: HashMap<String, NamedConfig>,
    short_names: HashMap<char, String>,
}

impl Assembler {
    /// Create an assembler over the named parameters.
    ///
    /// Fails if two parameters share a name or a short alias.
    pub fn new(configs: impl IntoIterator<Item = NamedConfig>) -> Result<Self, ConfigError> {
        let mut named: HashMap<String, NamedConfig> = HashMap::default();
        let mut short_names: HashMap<char, String> = HashMap::default();

        for config in configs.into_iter() {
            let name = config.name().to_string();

            if let Some(short) = config.short() {
                if let Some(existing) = short_names.insert(short, name.clone()) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short name '{short}' (used by '{existing}' and '{name}')."
                    )));
                }
            }

            if named.insert(name.clone(), config).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{name}'."
                )));
            }
        }

        Ok(Self { named, short_names })
    }

    fn resolve(&self, token: &NamedToken) -> Option<&NamedConfig> {
        if token.is_short {
            let single = token.name.chars().next()?;
            let name = self.short_names.get(&single)?;
            self.named.get(name)
        } else {
            self.named.get(&token.name)
        }
    }

    /// Assemble the tokens, in order.
    ///
    /// Assembly never stops early; every problem is collected into [`AssembledCommand::errors`].
    pub fn assemble(&self, tokens: Vec<Token>) -> AssembledCommand {
        let mut assembly = Assembly::default();
        let mut queue = tokens.into_iter().peekable();

        while let Some(token) = queue.next() {
            let named_token = match token {
                Token::Positional(value) => {
                    assembly.positionals.push(value);
                    continue;
                }
                Token::Named(named_token) => named_token,
            };

            let config = match self.resolve(&named_token) {
                Some(config) => config,
                None => {
                    assembly.errors.push(AssembleError::UnknownParameter {
                        name: named_token.name,
                    });
                    continue;
                }
            };

            // Still attempt to bind the values below, so that further problems surface.
            if named_token.is_group && config.arity() != Arity::NoValue {
                assembly
                    .errors
                    .push(AssembleError::GroupedParametersMustNotAcceptValues {
                        name: config.name().to_string(),
                        short: named_token.name.chars().next().unwrap_or_default(),
                    });
            }

            match config.arity() {
                Arity::MultiValue => {
                    let mut values: Vec<String> = named_token.value.into_iter().collect();

                    // Greedy: stops only at the next named token, or the end.
                    while let Some(Token::Positional(value)) = queue.next_if(Token::is_positional)
                    {
                        values.push(value);
                    }

                    assembly.record(config, values);
                }
                Arity::SingleValue => {
                    let value = match named_token.value {
                        Some(value) => Some(value),
                        None => match queue.next_if(Token::is_positional) {
                            Some(Token::Positional(value)) => Some(value),
                            _ => None,
                        },
                    };

                    match value {
                        Some(value) => assembly.record(config, vec![value]),
                        None => {
                            assembly.errors.push(AssembleError::MissingValue {
                                name: config.name().to_string(),
                            });
                        }
                    }
                }
                Arity::NoValue => {
                    if let Some(value) = named_token.value {
                        assembly
                            .errors
                            .push(AssembleError::ParameterDoesNotAcceptValue {
                                name: config.name().to_string(),
                                value,
                            });
                    }

                    assembly.record(config, Vec::default());
                }
            }
        }

        assembly.close()
    }
}

#[derive(Debug, Default)]
struct Assembly {
    named: IndexMap<String, Vec<String>>,
    positionals: Vec<String>,
    errors: Errors<AssembleError>,
}

impl Assembly {
    fn record(&mut self, config: &NamedConfig, values: Vec<String>) {
        if self.named.contains_key(config.name()) {
            // The first occurrence wins.
            self.errors.push(AssembleError::ParameterAlreadySpecified {
                name: config.name().to_string(),
            });
            return;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Assembled '{}' with {:?}.", config.name(), values);
        }

        self.named.insert(config.name().to_string(), values);
    }

    fn close(self) -> AssembledCommand {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Assembled {} named and {} positional values with {} errors.",
                self.named.len(),
                self.positionals.len(),
                self.errors.len()
            );
        }

        AssembledCommand {
            named: self.named,
            positionals: self.positionals,
            errors: self.errors,
        }
    }
}
