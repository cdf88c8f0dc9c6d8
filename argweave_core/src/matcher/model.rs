use indexmap::IndexMap;

use crate::error::{AssembleError, Errors};
use crate::model::Arity;

/// The assembler's view of a named parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedConfig {
    name: String,
    short: Option<char>,
    arity: Arity,
}

impl NamedConfig {
    /// Describe a named parameter to the assembler.
    pub fn new(name: impl Into<String>, short: Option<char>, arity: Arity) -> Self {
        Self {
            name: name.into(),
            short,
            arity,
        }
    }

    /// The primary name (ex: `count` for `--count`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short alias (ex: `c` for `-c`).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }
}

/// The result of assembling tokens against named parameters, still as raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCommand {
    /// The raw values of each named parameter, in the order they were first matched.
    /// A `NoValue` parameter maps to an empty list.
    pub named: IndexMap<String, Vec<String>>,
    /// Positional values not consumed by a named parameter, in argv order.
    pub positionals: Vec<String>,
    /// Every assembly problem, in token order.
    pub errors: Errors<AssembleError>,
}

impl AssembledCommand {
    /// Whether the parameter `name` was matched.
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// The raw values matched to the parameter `name`.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.named.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Arity::NoValue)]
    #[case(Some('n'), Arity::SingleValue)]
    #[case(Some('m'), Arity::MultiValue)]
    fn named_config(#[case] short: Option<char>, #[case] arity: Arity) {
        let config = NamedConfig::new("name", short, arity);
        assert_eq!(config.name(), "name");
        assert_eq!(config.short(), short);
        assert_eq!(config.arity(), arity);
    }

    #[test]
    fn assembled_lookup() {
        let assembled = AssembledCommand {
            named: IndexMap::from([
                ("verbose".to_string(), vec![]),
                ("count".to_string(), vec!["1".to_string()]),
            ]),
            positionals: vec![],
            errors: Errors::default(),
        };

        assert!(assembled.contains("verbose"));
        assert_eq!(assembled.values("verbose").map(<[String]>::len), Some(0));
        assert_eq!(assembled.values("count"), Some(&["1".to_string()][..]));
        assert!(!assembled.contains("missing"));
        assert_eq!(assembled.values("missing"), None);
    }
}
