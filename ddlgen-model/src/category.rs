//! Construction categories.

use std::fmt;

/// The fluent family that created a field.
///
/// Every primitive constructor on [`StructBuilder`](crate::StructBuilder) stamps
/// its category as the first `dll` tag value of the new field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A plain boolean flag that is always rendered (`CREATE`, `ALTER`).
    Static,
    /// An optional SQL keyword (`OR REPLACE`, `IF EXISTS`).
    Keyword,
    /// An object identifier.
    Identifier,
}

impl Category {
    /// Textual form used inside the serialized tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Static.as_str(), "static");
        assert_eq!(Category::Keyword.as_str(), "keyword");
        assert_eq!(Category::Identifier.as_str(), "identifier");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Keyword.to_string(), "keyword");
    }
}
