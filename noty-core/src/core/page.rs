//! Pages: a titled, ordered list of [`Block`]s.

use crate::Block;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Title shown for a page whose title is blank.
pub const UNTITLED: &str = "Untitled";

/// A page in the workspace.
///
/// Serialized in camelCase. Every field but `id` may be absent: a missing
/// title reads as blank, missing blocks as an empty list (repaired by
/// [`normalize`](Self::normalize)), and missing timestamps as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub modified_at: i64,
}

impl Page {
    /// Creates a page with a fresh UUID and a single empty block.
    pub fn new(title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            blocks: vec![Block::new()],
            created_at: now,
            modified_at: now,
        }
    }

    /// Brings the page back in line with its invariants.
    ///
    /// An empty block list gains one empty block, and any block repeating an
    /// earlier block's ID is given a fresh ID in place. Returns `true` if the
    /// page was changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;

        if self.blocks.is_empty() {
            self.blocks.push(Block::new());
            changed = true;
        }

        let mut seen = HashSet::with_capacity(self.blocks.len());
        for block in &mut self.blocks {
            if !seen.insert(block.id.clone()) {
                let fresh = Uuid::new_v4().to_string();
                log::warn!(
                    "page {}: duplicate block id {} reassigned to {}",
                    self.id,
                    block.id,
                    fresh
                );
                block.id = fresh.clone();
                seen.insert(fresh);
                changed = true;
            }
        }

        changed
    }

    /// Position of the block with `block_id`, if it is on this page.
    pub fn block_index(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    /// The block with `block_id`, if it is on this page.
    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    /// The title, or [`UNTITLED`] when it is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Sets `modified_at` to the current time.
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().timestamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: &str, content: &str) -> Block {
        Block {
            id: id.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_new_page_has_one_empty_block() {
        let page = Page::new("Groceries");
        assert_eq!(page.title, "Groceries");
        assert_eq!(page.blocks.len(), 1);
        assert!(page.blocks[0].is_empty());
        assert_eq!(page.created_at, page.modified_at);
    }

    #[test]
    fn test_normalize_empty_page() {
        let mut page = Page::new("Empty");
        page.blocks.clear();

        assert!(page.normalize());
        assert_eq!(page.blocks.len(), 1);
        assert!(page.blocks[0].is_empty());
    }

    #[test]
    fn test_normalize_reassigns_duplicate_ids() {
        let mut page = Page::new("Dupes");
        page.blocks = vec![block("a", "one"), block("b", "two"), block("a", "three")];

        assert!(page.normalize());
        assert_eq!(page.blocks[0].id, "a");
        assert_eq!(page.blocks[1].id, "b");
        assert_ne!(page.blocks[2].id, "a");
        assert_eq!(page.blocks[2].content, "three");
    }

    #[test]
    fn test_normalize_leaves_valid_page_alone() {
        let mut page = Page::new("Fine");
        page.blocks = vec![block("a", "one"), block("b", "two")];
        let before = page.clone();

        assert!(!page.normalize());
        assert_eq!(page, before);
    }

    #[test]
    fn test_display_title() {
        let mut page = Page::new("   ");
        assert_eq!(page.display_title(), UNTITLED);
        page.title = "Ideas".to_string();
        assert_eq!(page.display_title(), "Ideas");
    }

    #[test]
    fn test_deserialize_without_timestamps() {
        let json = r#"{"id":"p1","title":"Old","blocks":[{"id":"b1","content":"hi"}]}"#;
        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(page.created_at, 0);
        assert_eq!(page.modified_at, 0);
        assert_eq!(page.block_index("b1"), Some(0));
        assert_eq!(page.block("b1").map(|b| b.content.as_str()), Some("hi"));
    }

    #[test]
    fn test_deserialize_page_without_blocks_or_title() {
        let mut page: Page = serde_json::from_str(r#"{"id":"p2"}"#).unwrap();
        assert_eq!(page.title, "");
        assert!(page.blocks.is_empty());

        assert!(page.normalize());
        assert_eq!(page.blocks.len(), 1);
    }
}
