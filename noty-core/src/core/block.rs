//! Blocks: the paragraphs a page is made of.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One paragraph of plain text on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

impl Block {
    /// Creates an empty block with a fresh UUID.
    pub fn new() -> Self {
        Self::with_content(String::new())
    }

    /// Creates a block with a fresh UUID holding `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
        }
    }

    /// `true` when the block holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_is_empty_with_unique_id() {
        let a = Block::new();
        let b = Block::new();

        assert!(a.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block {
            id: "b-1".to_string(),
            content: "Hello".to_string(),
        };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"id":"b-1","content":"Hello"}"#);
    }

    #[test]
    fn test_missing_content_reads_as_empty() {
        let block: Block = serde_json::from_str(r#"{"id":"b-2"}"#).unwrap();
        assert_eq!(block.id, "b-2");
        assert!(block.is_empty());
    }
}
