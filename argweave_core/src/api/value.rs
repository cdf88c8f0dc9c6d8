use crate::model::{Arity, Value};

/// Converts a single raw string, or describes why it cannot be converted.
pub type Conversion = fn(&str) -> Result<Value, String>;

/// The type of a single raw string.
#[derive(Debug, Clone)]
pub enum ScalarType {
    /// A base-10 `i64`; the whole string must denote the number.
    Integer,
    /// A finite base-10 `f64`; the whole string must denote the number.
    Float,
    /// Any string, as is.
    Text,
    /// One of a fixed, ordered set of string literals.
    Choice(Vec<String>),
    /// A caller-declared conversion.
    Custom {
        /// The display name (ex: `path`).
        name: String,
        /// The conversion.
        convert: Conversion,
    },
}

impl ScalarType {
    /// Create a choice scalar over the `choices`, in order.
    pub fn choice<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScalarType::Choice(choices.into_iter().map(Into::into).collect())
    }

    /// Create a custom scalar.
    ///
    /// ### Example
    /// ```
    /// # use argweave_core as argweave;
    /// use argweave::{ScalarType, Value};
    ///
    /// let even = ScalarType::custom("even", |raw| match raw.parse::<i64>() {
    ///     Ok(n) if n % 2 == 0 => Ok(Value::Integer(n)),
    ///     _ => Err(format!("'{raw}' is not an even number.")),
    /// });
    ///
    /// assert_eq!(even.convert("4"), Ok(Value::Integer(4)));
    /// assert!(even.convert("3").is_err());
    /// ```
    pub fn custom(name: impl Into<String>, convert: Conversion) -> Self {
        ScalarType::Custom {
            name: name.into(),
            convert,
        }
    }

    /// The display name of this type.
    pub fn name(&self) -> String {
        match self {
            ScalarType::Integer => "int".to_string(),
            ScalarType::Float => "float".to_string(),
            ScalarType::Text => "string".to_string(),
            ScalarType::Choice(choices) => choices.join("|"),
            ScalarType::Custom { name, .. } => name.clone(),
        }
    }

    /// Convert the raw string.
    pub fn convert(&self, raw: &str) -> Result<Value, String> {
        match self {
            ScalarType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| format!("cannot convert '{raw}' to int.")),
            ScalarType::Float => match raw.parse::<f64>() {
                Ok(float) if float.is_finite() => Ok(Value::Float(float)),
                _ => Err(format!("cannot convert '{raw}' to float.")),
            },
            ScalarType::Text => Ok(Value::Text(raw.to_string())),
            ScalarType::Choice(choices) => {
                if choices.iter().any(|choice| choice == raw) {
                    Ok(Value::Text(raw.to_string()))
                } else {
                    Err(format!(
                        "'{raw}' is not one of {{{}}}.",
                        choices.join(", ")
                    ))
                }
            }
            ScalarType::Custom { convert, .. } => convert(raw),
        }
    }
}

/// The type of a parameter: its arity, how its raw strings convert, and whether it has a default.
///
/// ### Example
/// ```
/// # use argweave_core as argweave;
/// use argweave::{Arity, ScalarType, Value, ValueType};
///
/// let count = ValueType::integer().with_default(1);
/// assert_eq!(count.arity(), Arity::SingleValue);
/// assert_eq!(count.default_value(), Some(&Value::Integer(1)));
///
/// let files = ValueType::list(ScalarType::Text);
/// assert_eq!(files.arity(), Arity::MultiValue);
/// assert_eq!(files.name(), "string[]");
/// ```
#[derive(Debug, Clone)]
pub enum ValueType {
    /// A presence flag; converts to `Value::Flag(true)`.
    NoValue,
    /// A single scalar value.
    Single(ScalarType),
    /// An array of scalar values.
    Multi(ScalarType),
    /// A type made optional with a default.
    Defaulted {
        /// The underlying type.
        inner: Box<ValueType>,
        /// Used when the parameter is absent.
        default: Value,
    },
}

impl ValueType {
    /// An optional presence flag: `true` when present, otherwise `false`.
    pub fn flag() -> Self {
        ValueType::NoValue.with_default(false)
    }

    /// A required `int`.
    pub fn integer() -> Self {
        ValueType::Single(ScalarType::Integer)
    }

    /// A required `float`.
    pub fn float() -> Self {
        ValueType::Single(ScalarType::Float)
    }

    /// A required `string`.
    pub fn text() -> Self {
        ValueType::Single(ScalarType::Text)
    }

    /// A required choice amongst the `choices`.
    pub fn choice<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueType::Single(ScalarType::choice(choices))
    }

    /// A required array of `item`.
    pub fn list(item: ScalarType) -> Self {
        ValueType::Multi(item)
    }

    /// Make this type optional, using `default` when the parameter is absent.
    /// If repeated, only the final default applies.
    pub fn with_default(self, default: impl Into<Value>) -> Self {
        match self {
            ValueType::Defaulted { inner, .. } => ValueType::Defaulted {
                inner,
                default: default.into(),
            },
            inner => ValueType::Defaulted {
                inner: Box::new(inner),
                default: default.into(),
            },
        }
    }

    /// The arity; unaffected by a default.
    pub fn arity(&self) -> Arity {
        match self {
            ValueType::NoValue => Arity::NoValue,
            ValueType::Single(_) => Arity::SingleValue,
            ValueType::Multi(_) => Arity::MultiValue,
            ValueType::Defaulted { inner, .. } => inner.arity(),
        }
    }

    /// The default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            ValueType::Defaulted { default, .. } => Some(default),
            _ => None,
        }
    }

    /// Whether the parameter may be absent.
    pub fn is_optional(&self) -> bool {
        self.default_value().is_some()
    }

    /// The display name of this type (ex: `int`, `a|b`, `string[]`).
    pub fn name(&self) -> String {
        match self {
            ValueType::NoValue => "bool".to_string(),
            ValueType::Single(scalar) => scalar.name(),
            ValueType::Multi(scalar) => format!("{}[]", scalar.name()),
            ValueType::Defaulted { inner, .. } => inner.name(),
        }
    }

    pub(crate) fn choices(&self) -> Option<&[String]> {
        match self {
            ValueType::Single(ScalarType::Choice(choices))
            | ValueType::Multi(ScalarType::Choice(choices)) => Some(choices.as_slice()),
            ValueType::Defaulted { inner, .. } => inner.choices(),
            _ => None,
        }
    }

    /// Convert the raw strings matched to a parameter.
    ///
    /// A `NoValue` type ignores the raw strings.
    /// A `Multi` type fails on the first item that cannot be converted, reporting only that item.
    pub fn convert(&self, raw: &[String]) -> Result<Value, String> {
        match self {
            ValueType::NoValue => Ok(Value::Flag(true)),
            ValueType::Single(scalar) => match raw {
                [value] => scalar.convert(value),
                _ => Err(format!("expected precisely 1 value, found {}.", raw.len())),
            },
            ValueType::Multi(scalar) => raw
                .iter()
                .map(|value| scalar.convert(value))
                .collect::<Result<Vec<Value>, String>>()
                .map(Value::List),
            ValueType::Defaulted { inner, .. } => inner.convert(raw),
        }
    }
}
