//! Call contract for host applications: loosely typed arguments in, a status
//! code and an optional message out.

use crate::error::Error;
use crate::expr;

/// A value handed over by a host application
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number, the only kind of value accepted as an argument
    Number(f64),
    /// An ordered sequence of arguments
    List(Vec<Value>),
    /// A string
    Text(String),
    /// A boolean
    Bool(bool),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Turn host `values` into numeric arguments.
///
/// A single list is taken as the ordered sequence of arguments. Otherwise
/// every value is one argument. Only numbers are accepted as arguments.
///
/// # Examples
///
/// ```
/// # use mathex::{arguments_from_values, Value};
/// let sequence = [Value::from(vec![1.0, 2.0])];
/// assert_eq!(arguments_from_values(&sequence), Ok(vec![1.0, 2.0]));
///
/// let scalars = [Value::from(1.0), Value::from(2.0)];
/// assert_eq!(arguments_from_values(&scalars), Ok(vec![1.0, 2.0]));
///
/// assert!(arguments_from_values(&[Value::from("1")]).is_err());
/// ```
pub fn arguments_from_values(values: &[Value]) -> Result<Vec<f64>, Error> {
    if let [Value::List(list)] = values {
        return list
            .iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Number(number) => Ok(*number),
                other => Err(Error::Input(format!(
                    "element {} of the argument list is a {}, expected a number",
                    i,
                    other.kind()
                ))),
            })
            .collect();
    }

    values
        .iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::Number(number) => Ok(*number),
            other => Err(Error::Input(format!(
                "argument {} is a {}, expected a number",
                i,
                other.kind()
            ))),
        })
        .collect()
}

/// Evaluate `expression` with host `values`.
///
/// Returns `(1, None)` if the formula is true, `(0, None)` if it is false and
/// `(-1, Some(message))` if the arguments or the formula are invalid.
///
/// # Examples
///
/// ```
/// # use mathex::{host, Value};
/// assert_eq!(host::evaluate("A < B", &[Value::from(vec![1.0, 2.0])]), (1, None));
/// assert_eq!(host::evaluate("A < B", &[Value::from(2.0), Value::from(1.0)]), (0, None));
///
/// let (status, message) = host::evaluate("A", &[]);
/// assert_eq!(status, -1);
/// assert!(message.unwrap().starts_with("SyntaxError"));
/// ```
pub fn evaluate(expression: &str, values: &[Value]) -> (i64, Option<String>) {
    let result =
        arguments_from_values(values).and_then(|arguments| expr::evaluate(expression, &arguments));
    match result {
        Ok(true) => (1, None),
        Ok(false) => (0, None),
        Err(err) => (-1, Some(err.to_string())),
    }
}

/// Evaluate a formula with arguments given one by one.
///
/// Expands to a call to [`host::evaluate`](host/fn.evaluate.html).
///
/// ```
/// # use mathex::mathex;
/// assert_eq!(mathex!("A + B == 3", 1.0, 2.0), (1, None));
/// assert_eq!(mathex!("max(1, 2) > 1"), (1, None));
/// assert_eq!(mathex!("A", "one").0, -1);
/// ```
#[macro_export]
macro_rules! mathex {
    ($expression:expr) => {
        $crate::host::evaluate($expression, &[])
    };
    ($expression:expr, $($argument:expr),+ $(,)?) => {
        $crate::host::evaluate($expression, &[$($crate::Value::from($argument)),+])
    };
}
