//! Internal domain modules for the Noty core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod block;
pub mod editor;
pub mod error;
pub mod page;
pub mod reorder;
pub mod shortcut;
pub mod storage;
pub mod stored;
pub mod workspace;
