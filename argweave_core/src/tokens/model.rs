/// A unit of the tokenized command line, in strict argv order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare value (ex: `file.txt`, or anything following `--`).
    Positional(String),
    /// A `--name`, `-n` or `/name` specifier.
    Named(NamedToken),
}

/// A named specifier, optionally carrying an `=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedToken {
    /// The identifier; a single character when `is_short`.
    pub name: String,
    /// Written with the single-dash short syntax.
    pub is_short: bool,
    /// Part of a grouped short flag cluster (ex: the `b` in `-abc`).
    pub is_group: bool,
    /// The inline value from `--name=value`.
    pub value: Option<String>,
}

impl Token {
    pub(crate) fn positional(value: impl Into<String>) -> Self {
        Token::Positional(value.into())
    }

    pub(crate) fn long(name: impl Into<String>, value: Option<&str>) -> Self {
        Token::Named(NamedToken {
            name: name.into(),
            is_short: false,
            is_group: false,
            value: value.map(str::to_string),
        })
    }

    pub(crate) fn short(name: char, is_group: bool, value: Option<&str>) -> Self {
        Token::Named(NamedToken {
            name: name.to_string(),
            is_short: true,
            is_group,
            value: value.map(str::to_string),
        })
    }

    /// Whether this is a positional token.
    pub fn is_positional(&self) -> bool {
        matches!(self, Token::Positional(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Positional(value) => write!(f, "{value}"),
            Token::Named(NamedToken {
                name,
                is_short,
                value,
                ..
            }) => {
                let prefix = if *is_short { "-" } else { "--" };
                match value {
                    Some(v) => write!(f, "{prefix}{name}={v}"),
                    None => write!(f, "{prefix}{name}"),
                }
            }
        }
    }
}
