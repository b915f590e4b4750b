//! Field kinds.

use std::fmt;

use serde::{Serialize, Serializer};

/// The target type of a generated field.
///
/// Kinds are rendered verbatim into the emitted source, so the textual form is
/// what matters to templates. Any string that isn't one of the fixed forms is
/// kept as [`Kind::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// No kind was assigned. Renders as an empty string.
    #[default]
    Unset,
    /// Plain boolean: `bool`.
    Bool,
    /// Optional boolean: `*bool`.
    OptionalBool,
    /// Any other type, such as an identifier type or a nested struct.
    Named(String),
}

impl Kind {
    /// Create a named kind.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    /// Textual form of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Bool => "bool",
            Self::OptionalBool => "*bool",
            Self::Named(name) => name,
        }
    }

    /// Check if no kind was assigned.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<&str> for Kind {
    fn from(s: &str) -> Self {
        match s {
            "" => Self::Unset,
            "bool" => Self::Bool,
            "*bool" => Self::OptionalBool,
            other => Self::Named(other.to_string()),
        }
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "" | "bool" | "*bool" => Self::from(s.as_str()),
            _ => Self::Named(s),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
