//! Ordered field maps for batch validation.
//!
//! A batch maps field names to a value and a rule. Iteration follows
//! insertion order, which is also the order fields are validated in.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{parser::Rule, value::Value};

/// Insertion-ordered map keyed by field name.
///
/// Inserting an existing name replaces its entry in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Fields {
            entries: Vec::new(),
        }
    }
}

impl<T> Fields<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous entry for the name.
    pub fn insert(&mut self, name: impl Into<String>, item: T) -> Option<T> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, item)),
            None => {
                self.entries.push((name, item));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, item)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, item)| (key.as_str(), item))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Fields<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, item) in iter {
            fields.insert(name, item);
        }
        fields
    }
}

impl<T> IntoIterator for Fields<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for Fields<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, item) in &self.entries {
            map.serialize_entry(name, item)?;
        }
        map.end()
    }
}

/// One field of a batch: its current value and the rule to check it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub value: Value,
    pub rule: Rule,
}

impl Field {
    pub fn new(value: impl Into<Value>, rule: impl Into<Rule>) -> Self {
        Field {
            value: value.into(),
            rule: rule.into(),
        }
    }
}

/// Field name to (value, rule)
pub type RuleBatch = Fields<Field>;

/// Field name to validation outcome, in batch order
pub type ValidationResults = Fields<bool>;
