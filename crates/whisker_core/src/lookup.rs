//! Three-way lookup outcome.

use crate::value::Value;

/// Outcome of resolving a key or path.
///
/// `NotFound` and `FoundNull` render the same way but are never conflated:
/// a `NotFound` at one context level lets the resolver try the enclosing
/// levels, while a `FoundNull` is authoritative.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lookup {
    /// The key exists and holds a non-null value.
    Found(Value),
    /// The key exists and holds an explicit null.
    FoundNull,
    /// The key does not exist, or no getter knows the node type.
    #[default]
    NotFound,
}

impl Lookup {
    /// Wrap a present value, mapping `Value::Null` to `FoundNull`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::FoundNull,
            other => Self::Found(other),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::FoundNull)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether the key exists at all, null or not.
    pub fn is_present(&self) -> bool {
        !self.is_not_found()
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    /// Section truthiness: misses and nulls are falsy, found values defer to
    /// [`Value::is_truthy`].
    pub fn is_truthy(&self) -> bool {
        self.value().is_some_and(Value::is_truthy)
    }

    /// Substitution text; misses and nulls render empty.
    pub fn render(&self) -> String {
        self.value().map(Value::render).unwrap_or_default()
    }
}

impl From<Option<Value>> for Lookup {
    fn from(opt: Option<Value>) -> Self {
        opt.map_or(Self::NotFound, Self::from_value)
    }
}

/// Find the entry named `key` among `entries`.
///
/// With `ignore_case` an exact match still wins; failing that, the first
/// entry in iteration order whose name is equal after Unicode lowercasing is
/// returned. Getters for mapping-shaped nodes share this rule.
pub fn find_entry<'a, V, I>(entries: I, key: &str, ignore_case: bool) -> Option<V>
where
    I: IntoIterator<Item = (&'a str, V)>,
{
    let folded_key = ignore_case.then(|| key.to_lowercase());
    let mut folded_match = None;

    for (name, value) in entries {
        if name == key {
            return Some(value);
        }
        if let Some(folded_key) = &folded_key {
            if folded_match.is_none() && name.to_lowercase() == *folded_key {
                folded_match = Some(value);
            }
        }
    }

    folded_match
}
