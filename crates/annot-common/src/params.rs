//! Parameter Sets
//!
//! A `ParameterSet` is what a docblock parser produces for one declaration:
//! annotation groups (`route`, `validate`, ...) each holding named parameters.
//! A parameter is either a single string or a list of strings.
//!
//! Groups and parameters keep their insertion order so resolved output is
//! deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single annotation parameter value.
///
/// Serialized untagged: a JSON string is a scalar, a JSON array of strings
/// is a list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

/// The kind of a `ParamValue`, used when two values cannot be combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Scalar,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => write!(f, "string"),
            ValueKind::List => write!(f, "list"),
        }
    }
}

impl ParamValue {
    /// Build a list value from any sequence of string-likes.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Scalar(_) => ValueKind::Scalar,
            ParamValue::List(_) => ValueKind::List,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(value) => Some(value),
            ParamValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::Scalar(_) => None,
            ParamValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(value) => write!(f, "{value:?}"),
            ParamValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        ParamValue::list(items)
    }
}

/// Parameters of one annotation group, keyed by parameter name.
pub type ParamGroup = IndexMap<String, ParamValue>;

/// Annotation groups of one declaration, keyed by group name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    groups: IndexMap<String, ParamGroup>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the set has no groups at all.
    ///
    /// A group that exists but has no parameters still counts.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    pub fn group(&self, group: &str) -> Option<&ParamGroup> {
        self.groups.get(group)
    }

    pub fn group_mut(&mut self, group: &str) -> Option<&mut ParamGroup> {
        self.groups.get_mut(group)
    }

    /// Get a group, creating it empty if missing.
    pub fn group_entry(&mut self, group: impl Into<String>) -> &mut ParamGroup {
        self.groups.entry(group.into()).or_default()
    }

    /// Look up a single parameter.
    pub fn get(&self, group: &str, param: &str) -> Option<&ParamValue> {
        self.groups.get(group)?.get(param)
    }

    /// Set a parameter, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        group: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.group_entry(group).insert(param.into(), value.into())
    }

    /// Replace a whole group, returning the previous one.
    pub fn insert_group(
        &mut self,
        group: impl Into<String>,
        params: ParamGroup,
    ) -> Option<ParamGroup> {
        self.groups.insert(group.into(), params)
    }

    /// Builder-style `insert`.
    pub fn with(
        mut self,
        group: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.insert(group, param, value);
        self
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParamGroup> {
        self.groups.iter()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a ParamGroup);
    type IntoIter = indexmap::map::Iter<'a, String, ParamGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, ParamGroup);
    type IntoIter = indexmap::map::IntoIter<String, ParamGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl FromIterator<(String, ParamGroup)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (String, ParamGroup)>>(iter: T) -> Self {
        ParameterSet {
            groups: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/params_tests.rs"]
mod tests;
