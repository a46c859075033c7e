//! Keyboard shortcuts inside a block.

use crate::Block;

/// Keys the block editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    Other,
}

/// What a key press asks the editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Insert a new empty block at this index.
    InsertAt(usize),
    /// Delete the block with this ID (always the focused block).
    DeleteFocused(String),
    /// Move focus to the block with this ID.
    Focus(String),
}

/// A resolved shortcut and whether the key's default text behaviour should be suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub action: ShortcutAction,
    pub prevent_default: bool,
}

/// Resolves `key` pressed in the block at `index` whose live text is `text`.
///
/// Deletion targets the focused block, not the block at `index`, and never
/// removes the last remaining block. Backspace only deletes an empty block and
/// leaves the key's default alone; Delete removes the block whatever its
/// content.
pub fn dispatch(
    key: Key,
    index: usize,
    text: &str,
    focused: Option<&str>,
    blocks: &[Block],
) -> Option<Shortcut> {
    let can_delete = blocks.len() > 1;

    match key {
        Key::Enter => Some(Shortcut {
            action: ShortcutAction::InsertAt(index + 1),
            prevent_default: true,
        }),
        Key::Backspace if text.is_empty() && can_delete => focused.map(|id| Shortcut {
            action: ShortcutAction::DeleteFocused(id.to_string()),
            prevent_default: false,
        }),
        Key::Delete if can_delete => focused.map(|id| Shortcut {
            action: ShortcutAction::DeleteFocused(id.to_string()),
            prevent_default: true,
        }),
        Key::ArrowUp => index
            .checked_sub(1)
            .and_then(|i| blocks.get(i))
            .map(|b| focus(&b.id)),
        Key::ArrowDown => blocks.get(index + 1).map(|b| focus(&b.id)),
        _ => None,
    }
}

fn focus(id: &str) -> Shortcut {
    Shortcut {
        action: ShortcutAction::Focus(id.to_string()),
        prevent_default: false,
    }
}
