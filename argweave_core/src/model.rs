/// The number of inputs a parameter binds.
///
/// Unlike a fixed cardinality, a `MultiValue` parameter is always greedy: it consumes every immediately following positional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// A presence flag, taking no values (ex: `--verbose`).
    NoValue,
    /// Precisely one value (ex: `--count 3` or `--count=3`).
    SingleValue,
    /// Zero or more contiguous values (ex: `--files a.txt b.txt`).
    MultiValue,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A coerced, typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The result of a presence flag.
    Flag(bool),
    /// A base-10 integer.
    Integer(i64),
    /// A finite floating point number.
    Float(f64),
    /// A string, including enumerated choices.
    Text(String),
    /// The items of an array-of-scalar parameter.
    List(Vec<Value>),
}

impl Value {
    /// Get the boolean of a `Value::Flag`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Get the integer of a `Value::Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    /// Get the number of a `Value::Float`.
    /// Integers widen into floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(float) => Some(*float),
            Value::Integer(integer) => Some(*integer as f64),
            _ => None,
        }
    }

    /// Get the string of a `Value::Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Get the items of a `Value::List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Flag(flag) => write!(f, "{flag}"),
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Float(float) => write!(f, "{float}"),
            Value::Text(text) => write!(f, "{text}"),
            Value::List(items) => {
                let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Flag(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Flag(true), "true")]
    #[case(Value::Integer(-12), "-12")]
    #[case(Value::Float(1.5), "1.5")]
    #[case(Value::Text("abc".to_string()), "abc")]
    #[case(Value::List(vec![Value::Integer(1), Value::Integer(2)]), "[1, 2]")]
    #[case(Value::List(vec![]), "[]")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Flag(false).as_bool(), Some(false));
        assert_eq!(Value::Integer(3).as_integer(), Some(3));
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(0.25).as_float(), Some(0.25));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(
            Value::List(vec![Value::from("x")]).as_list(),
            Some(&[Value::from("x")][..])
        );
        assert_eq!(Value::from("x").as_integer(), None);
        assert_eq!(Value::Integer(1).as_bool(), None);
    }

    #[test]
    fn arity_display() {
        assert_eq!(Arity::NoValue.to_string(), "NoValue");
        assert_eq!(Arity::MultiValue.to_string(), "MultiValue");
    }
}
