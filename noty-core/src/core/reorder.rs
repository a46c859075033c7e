//! Drag-and-drop reordering of blocks.

use crate::Block;
use serde::{Deserialize, Serialize};

/// ID of the single droppable column that holds a page's blocks.
pub const BLOCK_COLUMN_ID: &str = "main-column";

/// Where a dragged block was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropDestination {
    pub droppable_id: String,
    pub index: usize,
}

/// The outcome of one drag gesture.
///
/// `destination` is `None` when the drag was cancelled or released outside
/// any droppable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: String,
    pub destination: Option<DropDestination>,
}

impl DropResult {
    /// A drop of `block_id` at `index` in the block column.
    pub fn to_index(block_id: impl Into<String>, index: usize) -> Self {
        Self {
            draggable_id: block_id.into(),
            destination: Some(DropDestination {
                droppable_id: BLOCK_COLUMN_ID.to_string(),
                index,
            }),
        }
    }

    pub fn cancelled(block_id: impl Into<String>) -> Self {
        Self {
            draggable_id: block_id.into(),
            destination: None,
        }
    }
}

/// Applies `drop` to `blocks`, returning the reordered list.
///
/// Returns `None` when nothing moves: the dragged ID is unknown, the drop was
/// cancelled or landed in another droppable, or the block was released at its
/// own index. The destination index is clamped to the end of the list.
pub fn reorder_blocks(blocks: &[Block], drop: &DropResult) -> Option<Vec<Block>> {
    let destination = drop.destination.as_ref()?;
    if destination.droppable_id != BLOCK_COLUMN_ID {
        return None;
    }
    move_block(blocks, &drop.draggable_id, destination.index)
}

/// Moves the block with `block_id` so it ends up at `to_index`.
///
/// Same rules as [`reorder_blocks`] without the droppable checks.
pub fn move_block(blocks: &[Block], block_id: &str, to_index: usize) -> Option<Vec<Block>> {
    let from = blocks.iter().position(|b| b.id == block_id)?;
    let to = to_index.min(blocks.len() - 1);
    if from == to {
        return None;
    }

    let mut reordered = blocks.to_vec();
    let block = reordered.remove(from);
    reordered.insert(to, block);
    Some(reordered)
}
