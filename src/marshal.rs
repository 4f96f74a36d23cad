//! Helpers assembling positional and keyword arguments.
use core::fmt;

use indexmap::IndexMap;

use crate::value::{ToValue, Value};

/// Convert a numeric series into a foreign list, preserving order.
pub fn array(xs: &[f64]) -> Value {
    Value::List(xs.iter().map(|&x| Value::Float(x)).collect())
}

/// Keyword arguments for a foreign call.
///
/// Keywords keep their insertion order so that call logs are deterministic.
/// Options that were not supplied are never inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordArgs {
    inner: IndexMap<String, Value>,
}

impl KeywordArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, dropping every absent value.
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<Value>)>,
    {
        let inner = options
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_owned(), v)))
            .collect();
        Self { inner }
    }

    /// Set a keyword unconditionally.
    pub fn set(mut self, name: &str, value: impl ToValue) -> Self {
        self.insert(name, value.to_value());
        self
    }

    /// Set a keyword only when a value is present.
    pub fn set_opt<T: ToValue>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.insert(name, v.to_value());
        }
        self
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.inner.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for KeywordArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}
