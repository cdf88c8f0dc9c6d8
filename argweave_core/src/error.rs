use thiserror::Error;

/// An error in the configuration of a command schema.
///
/// These are programming errors in the caller (ex: two parameters sharing a short alias), never problems with the user's input.
/// They are reported when the schema is constructed, rather than collected during parsing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Raised by the tokenizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// The argument looks named (`-`, `--` or `/` prefixed), but does not follow the named argument grammar.
    #[error("Malformed argument '{argument}'.")]
    MalformedArgument {
        /// The raw argument.
        argument: String,
    },
}

/// Raised by the assembler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// A named token references an undeclared parameter.
    #[error("Did not expect a parameter with name '{name}'.")]
    UnknownParameter {
        /// The name as written by the user (a single character for short tokens).
        name: String,
    },

    /// A named parameter received a value more than once.
    #[error("A value for parameter '{name}' has already been specified.")]
    ParameterAlreadySpecified {
        /// The declared parameter name.
        name: String,
    },

    /// A `SingleValue` named parameter had no value available.
    #[error("A value is missing for parameter '{name}'.")]
    MissingValue {
        /// The declared parameter name.
        name: String,
    },

    /// A `NoValue` parameter was given an inline value.
    #[error("Parameter '{name}' does not accept a value, but was given '{value}'.")]
    ParameterDoesNotAcceptValue {
        /// The declared parameter name.
        name: String,
        /// The rejected inline value.
        value: String,
    },

    /// A grouped short flag resolved to a parameter that takes values.
    #[error("Grouped parameters must not accept values, but '-{short}' ('{name}') does.")]
    GroupedParametersMustNotAcceptValues {
        /// The declared parameter name.
        name: String,
        /// The short alias used within the group.
        short: char,
    },
}

/// Raised by value coercion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoerceError {
    /// A required named parameter was not specified.
    #[error("Parameter '{name}' has not been specified, but is required.")]
    MissingRequiredParameter {
        /// The declared parameter name.
        name: String,
    },

    /// A required positional parameter had no value left to claim.
    #[error("Positional parameter '{name}' has not been specified, but is required.")]
    MissingPositionalValue {
        /// The declared parameter name.
        name: String,
    },

    /// A raw value could not be converted into the declared type.
    #[error("Invalid value for parameter '{name}': {message}")]
    ArgumentParseError {
        /// The declared parameter name.
        name: String,
        /// Describes the failed conversion.
        message: String,
    },
}

/// Any error produced while parsing a command line.
///
/// Each stage reports its own error type; this unifies them so a single ordered collection can be reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// See [`TokenizeError`].
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// See [`AssembleError`].
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// See [`CoerceError`].
    #[error(transparent)]
    Coerce(#[from] CoerceError),
}

/// The flattened kind of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorKind {
    MalformedArgument,
    UnknownParameter,
    ParameterAlreadySpecified,
    MissingValue,
    ParameterDoesNotAcceptValue,
    GroupedParametersMustNotAcceptValues,
    MissingRequiredParameter,
    MissingPositionalValue,
    ArgumentParseError,
}

impl ParseError {
    /// The kind of this error, independent of its stage.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Tokenize(TokenizeError::MalformedArgument { .. }) => {
                ErrorKind::MalformedArgument
            }
            ParseError::Assemble(error) => match error {
                AssembleError::UnknownParameter { .. } => ErrorKind::UnknownParameter,
                AssembleError::ParameterAlreadySpecified { .. } => {
                    ErrorKind::ParameterAlreadySpecified
                }
                AssembleError::MissingValue { .. } => ErrorKind::MissingValue,
                AssembleError::ParameterDoesNotAcceptValue { .. } => {
                    ErrorKind::ParameterDoesNotAcceptValue
                }
                AssembleError::GroupedParametersMustNotAcceptValues { .. } => {
                    ErrorKind::GroupedParametersMustNotAcceptValues
                }
            },
            ParseError::Coerce(error) => match error {
                CoerceError::MissingRequiredParameter { .. } => ErrorKind::MissingRequiredParameter,
                CoerceError::MissingPositionalValue { .. } => ErrorKind::MissingPositionalValue,
                CoerceError::ArgumentParseError { .. } => ErrorKind::ArgumentParseError,
            },
        }
    }
}

/// An append-only, ordered collection of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors<E> {
    errors: Vec<E>,
}

impl<E> Default for Errors<E> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<E> Errors<E> {
    pub(crate) fn push(&mut self, error: impl Into<E>) {
        self.errors.push(error.into());
    }

    /// Append every error of `other`, preserving order.
    pub(crate) fn extend_from<F>(&mut self, other: Errors<F>)
    where
        F: Into<E>,
    {
        self.errors.extend(other.errors.into_iter().map(Into::into));
    }

    /// Whether any error was collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no error was collected (equivalently, `!has_errors()`).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate the errors in the order they were collected.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Take the errors in the order they were collected.
    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }
}

impl Errors<ParseError> {
    /// The kinds of the collected errors, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(ParseError::kind).collect()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for Errors<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'e, E> IntoIterator for &'e Errors<E> {
    type Item = &'e E;
    type IntoIter = std::slice::Iter<'e, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn errors_empty() {
        let errors: Errors<ParseError> = Errors::default();
        assert!(!errors.has_errors());
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn errors_ordered() {
        // Setup
        let mut errors: Errors<ParseError> = Errors::default();
        let mut assemble_errors: Errors<AssembleError> = Errors::default();
        assemble_errors.push(AssembleError::MissingValue {
            name: "count".to_string(),
        });

        // Execute
        errors.push(TokenizeError::MalformedArgument {
            argument: "--3".to_string(),
        });
        errors.extend_from(assemble_errors);
        errors.push(CoerceError::MissingRequiredParameter {
            name: "file".to_string(),
        });

        // Verify
        assert!(errors.has_errors());
        assert_eq!(
            errors.kinds(),
            vec![
                ErrorKind::MalformedArgument,
                ErrorKind::MissingValue,
                ErrorKind::MissingRequiredParameter,
            ]
        );
        assert_eq!(
            errors.to_string(),
            "Malformed argument '--3'.\n\
             A value is missing for parameter 'count'.\n\
             Parameter 'file' has not been specified, but is required."
        );
    }

    #[rstest]
    #[case(ParseError::from(AssembleError::UnknownParameter { name: "x".to_string() }), ErrorKind::UnknownParameter)]
    #[case(ParseError::from(AssembleError::ParameterAlreadySpecified { name: "x".to_string() }), ErrorKind::ParameterAlreadySpecified)]
    #[case(ParseError::from(AssembleError::ParameterDoesNotAcceptValue { name: "x".to_string(), value: "1".to_string() }), ErrorKind::ParameterDoesNotAcceptValue)]
    #[case(ParseError::from(AssembleError::GroupedParametersMustNotAcceptValues { name: "x".to_string(), short: 'x' }), ErrorKind::GroupedParametersMustNotAcceptValues)]
    #[case(ParseError::from(CoerceError::MissingPositionalValue { name: "x".to_string() }), ErrorKind::MissingPositionalValue)]
    #[case(ParseError::from(CoerceError::ArgumentParseError { name: "x".to_string(), message: "bad".to_string() }), ErrorKind::ArgumentParseError)]
    fn kind(#[case] error: ParseError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn transparent_display() {
        let error = ParseError::from(AssembleError::GroupedParametersMustNotAcceptValues {
            name: "level".to_string(),
            short: 'l',
        });
        assert_eq!(
            error.to_string(),
            "Grouped parameters must not accept values, but '-l' ('level') does."
        );
    }
}
