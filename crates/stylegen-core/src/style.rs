//! Style object model.
//!
//! A [`StyleObject`] is an ordered list of entries. Each entry is either a
//! declaration (`fontSize: 14`) or a nested rule keyed by a selector
//! (`"> span": { ... }`). Generators return an [`Interpolation`], a flat list
//! of top-level objects whose keys are full selectors.
//!
//! Insertion order is emission order. Setting an existing key replaces its
//! value in place, which gives the same result as object spread followed by
//! an override.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A single declaration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssValue {
    Str(String),
    /// Plain number; the compiler decides whether it gets a `px` unit.
    Num(f64),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Str(s) => f.write_str(s),
            CssValue::Num(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Str(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Str(value)
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Num(value)
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        CssValue::Num(value as f64)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Num(value as f64)
    }
}

/// Format a number the way it should appear in CSS text.
///
/// Integral values drop the fraction (`4`, not `4.0`); everything else uses
/// the shortest representation that round-trips.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A style object entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    Value(CssValue),
    Nested(StyleObject),
}

impl Serialize for StyleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleEntry::Value(v) => v.serialize(serializer),
            StyleEntry::Nested(obj) => obj.serialize(serializer),
        }
    }
}

/// Ordered map of properties and nested rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CssValue>) -> &mut Self {
        self.insert(key.into(), StyleEntry::Value(value.into()));
        self
    }

    /// Set a nested rule. An existing key keeps its position and is replaced.
    pub fn nest(&mut self, selector: impl Into<String>, object: StyleObject) -> &mut Self {
        self.insert(selector.into(), StyleEntry::Nested(object));
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder form of [`nest`](Self::nest).
    pub fn with_nested(mut self, selector: impl Into<String>, object: StyleObject) -> Self {
        self.nest(selector, object);
        self
    }

    /// Spread `other` into `self`.
    ///
    /// Shallow: a nested rule present in both is replaced wholesale.
    pub fn extend(&mut self, other: StyleObject) -> &mut Self {
        for (key, entry) in other.entries {
            self.insert(key, entry);
        }
        self
    }

    /// Builder form of [`extend`](Self::extend).
    pub fn spread(mut self, other: StyleObject) -> Self {
        self.extend(other);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Declaration value for `key`, if the key holds a declaration.
    pub fn value(&self, key: &str) -> Option<&CssValue> {
        match self.get(key)? {
            StyleEntry::Value(v) => Some(v),
            StyleEntry::Nested(_) => None,
        }
    }

    /// Nested rule for `selector`, if the key holds one.
    pub fn nested(&self, selector: &str) -> Option<&StyleObject> {
        match self.get(selector)? {
            StyleEntry::Nested(obj) => Some(obj),
            StyleEntry::Value(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    fn insert(&mut self, key: String, entry: StyleEntry) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((key, entry)),
        }
    }
}

impl Serialize for StyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

/// A list of top-level style objects, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Interpolation(Vec<StyleObject>);

impl Interpolation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: StyleObject) {
        self.0.push(object);
    }

    /// Append another interpolation (nested arrays flatten to one list).
    pub fn extend(&mut self, other: Interpolation) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleObject> {
        self.0.iter()
    }

    /// Top-level selectors of every object, in order.
    pub fn selectors(&self) -> Vec<&str> {
        self.0.iter().flat_map(|obj| obj.keys()).collect()
    }

    /// Find the first top-level rule with this exact selector.
    pub fn rule(&self, selector: &str) -> Option<&StyleObject> {
        self.0.iter().find_map(|obj| obj.nested(selector))
    }
}

impl From<StyleObject> for Interpolation {
    fn from(object: StyleObject) -> Self {
        Interpolation(vec![object])
    }
}

impl FromIterator<StyleObject> for Interpolation {
    fn from_iter<I: IntoIterator<Item = StyleObject>>(iter: I) -> Self {
        Interpolation(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Interpolation {
    type Item = &'a StyleObject;
    type IntoIter = std::slice::Iter<'a, StyleObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
