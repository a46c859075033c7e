//! Core library for Noty, a local-first note-taking application built from
//! pages of plain-text blocks.
//!
//! The primary entry point is [`Workspace`], which holds the page index in a
//! local key/value [`Storage`]. Block editing happens in a [`PageEditor`]
//! opened from the workspace and saved back to it.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    block::Block,
    editor::{PageEditor, BLOCK_PLACEHOLDER, TITLE_PLACEHOLDER},
    error::{NotyError, Result},
    page::{Page, UNTITLED},
    reorder::{move_block, reorder_blocks, DropDestination, DropResult, BLOCK_COLUMN_ID},
    shortcut::{Key, Shortcut, ShortcutAction},
    storage::Storage,
    stored::StoredValue,
    workspace::{Workspace, PAGES_KEY},
};
