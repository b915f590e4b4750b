//! Multi-valued field tags.

use std::fmt;

use indexmap::IndexMap;

/// Name of a tag attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// `dll`: construction category followed by rendering hints.
    Dll,
    /// `sql`: literal SQL text for the field.
    Sql,
    /// Any other tag name, kept verbatim.
    Custom(String),
}

impl TagKey {
    /// Textual form used inside the serialized tag string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dll => "dll",
            Self::Sql => "sql",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for TagKey {
    fn from(s: &str) -> Self {
        match s {
            "dll" => Self::Dll,
            "sql" => Self::Sql,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping of tag names to their accumulated values.
///
/// Both the tag names and the values under each name keep insertion order, so
/// serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags {
    entries: IndexMap<TagKey, Vec<String>>,
}

impl Tags {
    /// Create an empty tag map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the named tag, creating the tag if needed.
    pub fn push(&mut self, key: impl Into<TagKey>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Values attached under `key`, in the order they were pushed.
    pub fn get(&self, key: &TagKey) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over tag names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&TagKey, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Render the tags as a backtick-delimited tag string.
    ///
    /// Each name is written as `name:"v1,v2"` and entries are joined by `, `.
    /// An empty map renders as a pair of backticks.
    pub fn serialize(&self) -> String {
        let body = self
            .iter()
            .map(|(key, values)| format!("{}:\"{}\"", key, values.join(",")))
            .collect::<Vec<_>>()
            .join(", ");
        format!("`{body}`")
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
