pub mod parser;

pub use self::parser::parse;

use crate::error::{ReadResult, ReadabilityError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// A node of the linguistic tree produced by the tokenizer.
///
/// Non-terminals own their children in document order. Terminals carry the
/// exact slice of input they cover, so concatenating every terminal value
/// reproduces the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LinguisticNode {
    Document { children: Vec<LinguisticNode> },
    Paragraph { children: Vec<LinguisticNode> },
    Sentence { children: Vec<LinguisticNode> },
    Word { value: String },
    Other { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Document,
    Paragraph,
    Sentence,
    Word,
    Other,
}

impl LinguisticNode {
    pub fn document(children: Vec<LinguisticNode>) -> Self {
        Self::Document { children }
    }

    pub fn paragraph(children: Vec<LinguisticNode>) -> Self {
        Self::Paragraph { children }
    }

    pub fn sentence(children: Vec<LinguisticNode>) -> Self {
        Self::Sentence { children }
    }

    pub fn word(value: impl Into<String>) -> Self {
        Self::Word {
            value: value.into(),
        }
    }

    pub fn other(value: impl Into<String>) -> Self {
        Self::Other {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Document { .. } => NodeKind::Document,
            Self::Paragraph { .. } => NodeKind::Paragraph,
            Self::Sentence { .. } => NodeKind::Sentence,
            Self::Word { .. } => NodeKind::Word,
            Self::Other { .. } => NodeKind::Other,
        }
    }

    /// Children of a non-terminal; terminals have none.
    pub fn children(&self) -> &[LinguisticNode] {
        match self {
            Self::Document { children }
            | Self::Paragraph { children }
            | Self::Sentence { children } => children,
            Self::Word { .. } | Self::Other { .. } => &[],
        }
    }

    /// Literal text of a terminal.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Word { value } | Self::Other { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.value().is_some()
    }

    /// Concatenated text of every terminal below this node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Word { value } | Self::Other { value } => out.push_str(value),
            _ => {
                for child in self.children() {
                    child.push_text(out);
                }
            }
        }
    }

    /// Word terminals below this node, depth-first, left to right.
    pub fn words(&self) -> Words<'_> {
        Words { stack: vec![self] }
    }

    /// Number of sentences this node spans: 1 for a sentence itself,
    /// otherwise the count of sentence descendants.
    pub fn sentence_count(&self) -> usize {
        match self {
            Self::Sentence { .. } => 1,
            Self::Word { .. } | Self::Other { .. } => 0,
            _ => self.children().iter().map(|c| c.sentence_count()).sum(),
        }
    }

    /// Checks the structural contract the tokenizer must uphold.
    ///
    /// Only the root document may be empty. Documents nest nowhere, and a
    /// unit may not contain a unit of its own or a larger kind.
    pub fn validate(&self) -> ReadResult<()> {
        self.validate_at(&mut Vec::new(), true)
    }

    fn validate_at(&self, path: &mut Vec<String>, is_root: bool) -> ReadResult<()> {
        path.push(self.kind().to_string());

        if !is_root && !self.is_terminal() && self.children().is_empty() {
            return Err(malformed(path, "non-terminal node has no children"));
        }
        if !is_root && matches!(self, Self::Document { .. }) {
            return Err(malformed(path, "document nested inside another node"));
        }

        for (idx, child) in self.children().iter().enumerate() {
            path.push(idx.to_string());
            if let Some(reason) = nesting_error(self, child) {
                return Err(malformed(path, reason));
            }
            child.validate_at(path, false)?;
            path.pop();
        }

        path.pop();
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let content = fs::read_to_string(path)?;
        let tree: LinguisticNode = serde_json::from_str(&content)?;
        tree.validate()?;
        Ok(tree)
    }
}

fn nesting_error(parent: &LinguisticNode, child: &LinguisticNode) -> Option<&'static str> {
    use LinguisticNode::*;
    match (parent, child) {
        (Sentence { .. }, Paragraph { .. }) => Some("paragraph nested inside a sentence"),
        (Sentence { .. }, Sentence { .. }) => Some("sentence nested inside a sentence"),
        (Paragraph { .. }, Paragraph { .. }) => Some("paragraph nested inside a paragraph"),
        _ => None,
    }
}

fn malformed(path: &[String], reason: &str) -> ReadabilityError {
    ReadabilityError::MalformedTree {
        path: path.join("/"),
        reason: reason.to_string(),
    }
}

pub struct Words<'a> {
    stack: Vec<&'a LinguisticNode>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                LinguisticNode::Word { value } => return Some(value),
                LinguisticNode::Other { .. } => {}
                _ => self.stack.extend(node.children().iter().rev()),
            }
        }
        None
    }
}
