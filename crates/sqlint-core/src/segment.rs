//! Immutable SQL syntax tree nodes.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Source position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A node ("segment") of a parsed SQL syntax tree.
///
/// Trees are produced by an external parser and handed to rules read-only.
/// The serialized form is:
///
/// ```json
/// {"type": "select_clause", "segments": [
///     {"type": "keyword", "raw": "SELECT", "pos": {"line": 1, "column": 1}},
///     {"type": "whitespace", "raw": " "},
///     {"type": "wildcard_expression", "raw": "*"}
/// ]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Type tag (e.g., `select_clause`, `column_reference`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw source text stored on this node. Branches usually leave this empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw: String,
    /// Direct children in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SyntaxNode>,
    /// Start position in the source, when the parser recorded one.
    #[serde(default, rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl SyntaxNode {
    /// Creates a leaf node holding raw text.
    #[must_use]
    pub fn leaf(kind: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            raw: raw.into(),
            segments: Vec::new(),
            position: None,
        }
    }

    /// Creates a branch node whose raw text is spanned by its children.
    #[must_use]
    pub fn branch(kind: impl Into<String>, segments: Vec<SyntaxNode>) -> Self {
        Self {
            kind: kind.into(),
            raw: String::new(),
            segments,
            position: None,
        }
    }

    /// Sets the source position of this node.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }

    /// Parses a tree from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lacks a `type` field.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Returns the raw source text of this node.
    ///
    /// A node without stored text reports the concatenation of its
    /// children's raw text.
    #[must_use]
    pub fn raw(&self) -> Cow<'_, str> {
        if !self.raw.is_empty() || self.segments.is_empty() {
            return Cow::Borrowed(&self.raw);
        }
        let mut text = String::new();
        self.push_raw(&mut text);
        Cow::Owned(text)
    }

    fn push_raw(&self, out: &mut String) {
        if !self.raw.is_empty() || self.segments.is_empty() {
            out.push_str(&self.raw);
            return;
        }
        for child in &self.segments {
            child.push_raw(out);
        }
    }

    /// Returns the start position, falling back to the first positioned
    /// descendant.
    #[must_use]
    pub fn start_position(&self) -> Option<Position> {
        self.position
            .or_else(|| self.segments.iter().find_map(Self::start_position))
    }
}
