//! Editing session for a single page.
//!
//! [`PageEditor`] owns a working copy of a page's title and blocks plus the
//! focused block. All keyboard, drag-and-drop, and blur-commit events from the
//! UI go through it; the [`Workspace`](crate::Workspace) persists the result
//! with [`save_editor`](crate::Workspace::save_editor).
//!
//! After every operation the block list is non-empty, block IDs are unique,
//! and the focused ID (if any) names a block in the list.

use crate::core::reorder;
use crate::core::shortcut::{self, Key, Shortcut, ShortcutAction};
use crate::{Block, DropResult, NotyError, Page, Result};

/// Placeholder shown in an empty page title.
pub const TITLE_PLACEHOLDER: &str = "Insert title...";

/// Placeholder shown in the focused block while it is empty.
pub const BLOCK_PLACEHOLDER: &str = "Insert a text...";

#[derive(Debug, Clone)]
pub struct PageEditor {
    page_id: String,
    title: String,
    blocks: Vec<Block>,
    focused: Option<String>,
    dirty: bool,
}

impl PageEditor {
    /// Starts editing `page`.
    ///
    /// A page without blocks gets one new empty block, which is focused and
    /// leaves the editor dirty so the fix is saved. Otherwise the first block
    /// is focused.
    pub fn open(page: &Page) -> Self {
        let mut normalized = page.clone();
        let dirty = normalized.normalize();
        let focused = normalized.blocks.first().map(|b| b.id.clone());

        Self {
            page_id: normalized.id,
            title: normalized.title,
            blocks: normalized.blocks,
            focused,
            dirty,
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focused_index(&self) -> Option<usize> {
        let id = self.focused.as_deref()?;
        self.index_of(id)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title != self.title {
            self.title = title;
            self.dirty = true;
        }
    }

    pub fn focus_block(&mut self, block_id: &str) -> Result<()> {
        self.require(block_id)?;
        self.focused = Some(block_id.to_string());
        Ok(())
    }

    /// Inserts an empty block at `index` (clamped to the end) and focuses it.
    ///
    /// Returns the new block's ID.
    pub fn insert_block(&mut self, index: usize) -> String {
        let block = Block::new();
        let id = block.id.clone();
        let index = index.min(self.blocks.len());

        self.blocks.insert(index, block);
        self.focused = Some(id.clone());
        self.dirty = true;
        log::debug!("page {}: inserted block {} at {}", self.page_id, id, index);
        id
    }

    /// Commits `content` to a block, as on blur.
    pub fn update_block(&mut self, block_id: &str, content: impl Into<String>) -> Result<()> {
        let index = self.require(block_id)?;
        let content = content.into();
        let block = &mut self.blocks[index];
        if block.content != content {
            block.content = content;
            self.dirty = true;
        }
        Ok(())
    }

    /// Removes a block and moves focus to its predecessor.
    ///
    /// When the first block is removed, focus goes to the block that took its
    /// place. The last remaining block is never removed; `Ok(false)` is
    /// returned instead.
    pub fn delete_block(&mut self, block_id: &str) -> Result<bool> {
        let index = self.require(block_id)?;
        if self.blocks.len() <= 1 {
            return Ok(false);
        }

        self.blocks.remove(index);
        let next_focus = index.saturating_sub(1).min(self.blocks.len() - 1);
        self.focused = Some(self.blocks[next_focus].id.clone());
        self.dirty = true;
        log::debug!("page {}: deleted block {}", self.page_id, block_id);
        Ok(true)
    }

    /// Handles `key` pressed in the block at `index`.
    ///
    /// `text` is the block's text as it was when the key went down; content
    /// itself is only ever committed through [`update_block`](Self::update_block).
    /// Returns the shortcut that ran, if any.
    pub fn handle_key(&mut self, key: Key, index: usize, text: &str) -> Result<Option<Shortcut>> {
        let Some(shortcut) =
            shortcut::dispatch(key, index, text, self.focused.as_deref(), &self.blocks)
        else {
            return Ok(None);
        };

        match &shortcut.action {
            ShortcutAction::InsertAt(at) => {
                self.insert_block(*at);
            }
            ShortcutAction::DeleteFocused(id) => {
                self.delete_block(id)?;
            }
            ShortcutAction::Focus(id) => self.focus_block(id)?,
        }
        Ok(Some(shortcut))
    }

    /// Applies a finished drag. Returns `true` if the order changed.
    pub fn apply_drop(&mut self, drop: &DropResult) -> bool {
        match reorder::reorder_blocks(&self.blocks, drop) {
            Some(reordered) => {
                self.blocks = reordered;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Moves a block directly to `to_index`. Returns `true` if the order changed.
    pub fn move_block(&mut self, block_id: &str, to_index: usize) -> Result<bool> {
        self.require(block_id)?;
        Ok(self.apply_drop(&DropResult::to_index(block_id, to_index)))
    }

    /// The placeholder to show in a block: only the focused block gets one.
    pub fn block_placeholder(&self, block_id: &str) -> Option<&'static str> {
        (self.focused.as_deref() == Some(block_id)).then_some(BLOCK_PLACEHOLDER)
    }

    /// `base` with the working title and blocks applied.
    pub fn to_page(&self, base: &Page) -> Page {
        Page {
            title: self.title.clone(),
            blocks: self.blocks.clone(),
            ..base.clone()
        }
    }

    fn index_of(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    fn require(&self, block_id: &str) -> Result<usize> {
        self.index_of(block_id)
            .ok_or_else(|| NotyError::BlockNotFound(block_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(contents: &[&str]) -> Page {
        let mut page = Page::new("Test");
        page.blocks = contents
            .iter()
            .enumerate()
            .map(|(i, c)| Block {
                id: format!("b{i}"),
                content: c.to_string(),
            })
            .collect();
        page
    }

    fn contents(editor: &PageEditor) -> Vec<&str> {
        editor.blocks().iter().map(|b| b.content.as_str()).collect()
    }

    #[test]
    fn test_open_focuses_first_block() {
        let editor = PageEditor::open(&page_with(&["one", "two"]));
        assert_eq!(editor.focused(), Some("b0"));
        assert_eq!(editor.title(), "Test");
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_open_empty_page_creates_focused_block() {
        let mut page = Page::new("Empty");
        page.blocks.clear();

        let editor = PageEditor::open(&page);
        assert_eq!(editor.blocks().len(), 1);
        assert_eq!(editor.focused(), Some(editor.blocks()[0].id.as_str()));
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_enter_inserts_and_focuses_new_block() {
        let mut editor = PageEditor::open(&page_with(&["one", "two"]));

        let shortcut = editor.handle_key(Key::Enter, 0, "one").unwrap().unwrap();
        assert!(shortcut.prevent_default);
        assert_eq!(contents(&editor), vec!["one", "", "two"]);
        assert_eq!(editor.focused_index(), Some(1));
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_arrows_move_focus_without_touching_content() {
        let mut editor = PageEditor::open(&page_with(&["one", "two"]));

        editor.handle_key(Key::ArrowDown, 0, "one").unwrap();
        assert_eq!(editor.focused(), Some("b1"));
        editor.handle_key(Key::ArrowUp, 1, "two").unwrap();
        assert_eq!(editor.focused(), Some("b0"));
        assert_eq!(contents(&editor), vec!["one", "two"]);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_backspace_uses_text_before_key() {
        let mut editor = PageEditor::open(&page_with(&["a", "b"]));
        editor.focus_block("b1").unwrap();
        editor.update_block("b1", "").unwrap();

        // The key erased the last character; the block was not empty before it.
        assert_eq!(editor.handle_key(Key::Backspace, 1, "b").unwrap(), None);
        assert_eq!(editor.blocks().len(), 2);
    }

    #[test]
    fn test_backspace_on_empty_block_focuses_previous() {
        let mut editor = PageEditor::open(&page_with(&["one", "", "three"]));
        editor.focus_block("b1").unwrap();

        editor.handle_key(Key::Backspace, 1, "").unwrap();
        assert_eq!(contents(&editor), vec!["one", "three"]);
        assert_eq!(editor.focused(), Some("b0"));
    }

    #[test]
    fn test_delete_first_block_focuses_new_first() {
        let mut editor = PageEditor::open(&page_with(&["one", "two"]));

        let shortcut = editor.handle_key(Key::Delete, 0, "one").unwrap().unwrap();
        assert!(shortcut.prevent_default);
        assert_eq!(contents(&editor), vec!["two"]);
        assert_eq!(editor.focused(), Some("b1"));
    }

    #[test]
    fn test_last_block_survives_delete() {
        let mut editor = PageEditor::open(&page_with(&[""]));

        assert_eq!(editor.handle_key(Key::Backspace, 0, "").unwrap(), None);
        assert!(!editor.delete_block("b0").unwrap());
        assert_eq!(editor.blocks().len(), 1);
    }

    #[test]
    fn test_unknown_block_errors() {
        let mut editor = PageEditor::open(&page_with(&["one"]));

        assert!(matches!(editor.focus_block("nope"), Err(NotyError::BlockNotFound(_))));
        assert!(editor.update_block("nope", "x").is_err());
        assert!(editor.delete_block("nope").is_err());
        assert!(editor.move_block("nope", 0).is_err());
    }

    #[test]
    fn test_update_block_same_content_stays_clean() {
        let mut editor = PageEditor::open(&page_with(&["one"]));
        editor.update_block("b0", "one").unwrap();
        assert!(!editor.is_dirty());

        editor.update_block("b0", "uno").unwrap();
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_drop_reorders_and_keeps_focus() {
        let mut editor = PageEditor::open(&page_with(&["one", "two", "three"]));
        editor.focus_block("b1").unwrap();

        assert!(editor.apply_drop(&DropResult::to_index("b0", 2)));
        assert_eq!(contents(&editor), vec!["two", "three", "one"]);
        assert_eq!(editor.focused(), Some("b1"));
        assert_eq!(editor.focused_index(), Some(0));

        assert!(!editor.apply_drop(&DropResult::cancelled("b0")));
    }

    #[test]
    fn test_move_block() {
        let mut editor = PageEditor::open(&page_with(&["one", "two", "three"]));
        assert!(editor.move_block("b2", 0).unwrap());
        assert_eq!(contents(&editor), vec!["three", "one", "two"]);
        assert!(!editor.move_block("b2", 0).unwrap());
    }

    #[test]
    fn test_placeholder_only_on_focused_block() {
        let editor = PageEditor::open(&page_with(&["", ""]));
        assert_eq!(editor.block_placeholder("b0"), Some(BLOCK_PLACEHOLDER));
        assert_eq!(editor.block_placeholder("b1"), None);
    }

    #[test]
    fn test_to_page_keeps_identity() {
        let page = page_with(&["one"]);
        let mut editor = PageEditor::open(&page);
        editor.set_title("Renamed");
        editor.insert_block(1);

        let updated = editor.to_page(&page);
        assert_eq!(updated.id, page.id);
        assert_eq!(updated.created_at, page.created_at);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.blocks.len(), 2);
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let mut editor = PageEditor::open(&page_with(&["one"]));
        let id = editor.insert_block(10);
        assert_eq!(editor.blocks()[1].id, id);
    }
}
