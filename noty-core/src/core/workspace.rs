//! The page index: all pages stored as one JSON array in local storage.

use crate::{NotyError, Page, PageEditor, Result, Storage, StoredValue};
use std::path::Path;

/// Local storage key holding the JSON array of every page.
pub const PAGES_KEY: &str = "noty:pages";

/// An open Noty workspace.
///
/// `Workspace` is the primary interface for page-level mutations. It owns a
/// [`Storage`] and the [`StoredValue`] mirror of [`PAGES_KEY`]; every
/// mutation reserializes the whole array. Block-level editing happens in a
/// [`PageEditor`] obtained from [`open_editor`](Self::open_editor) and is
/// written back with [`save_editor`](Self::save_editor).
pub struct Workspace {
    storage: Storage,
    pages: StoredValue<Vec<Page>>,
}

impl Workspace {
    /// Opens (or creates) the store at `path` and loads its pages.
    ///
    /// # Errors
    ///
    /// Returns [`NotyError::InvalidStore`] or [`NotyError::Database`] if the
    /// file exists but is not a Noty store. Unreadable page data is not an
    /// error; the workspace starts empty instead.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_storage(Storage::open_or_create(path)?))
    }

    /// A workspace whose pages vanish when it is dropped.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::with_storage(Storage::in_memory()?))
    }

    pub fn with_storage(storage: Storage) -> Self {
        let pages = StoredValue::load(&storage, PAGES_KEY, Vec::new());
        log::info!("loaded {} page(s)", pages.get().len());
        Self { storage, pages }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// All pages in stored order.
    pub fn list_pages(&self) -> &[Page] {
        self.pages.get()
    }

    /// Fetches a single page by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NotyError::PageNotFound`] if no page has that ID.
    pub fn get_page(&self, page_id: &str) -> Result<&Page> {
        self.pages
            .get()
            .iter()
            .find(|p| p.id == page_id)
            .ok_or_else(|| NotyError::PageNotFound(page_id.to_string()))
    }

    /// Appends a new page holding one empty block and returns a copy of it.
    pub fn create_page(&mut self, title: impl Into<String>) -> Result<Page> {
        let page = Page::new(title);
        let mut pages = self.pages.get().clone();
        pages.push(page.clone());
        self.pages.set(&self.storage, pages)?;
        log::debug!("created page {}", page.id);
        Ok(page)
    }

    pub fn rename_page(&mut self, page_id: &str, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        self.update_page(page_id, |page| page.title = title)
    }

    pub fn delete_page(&mut self, page_id: &str) -> Result<()> {
        let mut pages = self.pages.get().clone();
        let index = Self::index_in(&pages, page_id)?;
        pages.remove(index);
        self.pages.set(&self.storage, pages)?;
        log::debug!("deleted page {page_id}");
        Ok(())
    }

    /// Starts an editing session on a page.
    ///
    /// If the stored page broke an invariant (no blocks, repeated block IDs)
    /// the repaired page is saved right away.
    pub fn open_editor(&mut self, page_id: &str) -> Result<PageEditor> {
        let mut editor = PageEditor::open(self.get_page(page_id)?);
        if editor.is_dirty() {
            log::info!("page {page_id} needed normalizing; saving repaired copy");
            self.save_editor(&mut editor)?;
        }
        Ok(editor)
    }

    /// Writes the editor's title and blocks back over its page.
    ///
    /// The page keeps its position in the array; the whole array is
    /// reserialized. The editor is marked clean on success.
    ///
    /// # Errors
    ///
    /// Returns [`NotyError::PageNotFound`] if the page was deleted while it was
    /// being edited.
    pub fn save_editor(&mut self, editor: &mut PageEditor) -> Result<()> {
        self.update_page(editor.page_id(), |page| {
            *page = editor.to_page(page);
        })?;
        editor.mark_clean();
        Ok(())
    }

    fn update_page(&mut self, page_id: &str, apply: impl FnOnce(&mut Page)) -> Result<()> {
        let mut pages = self.pages.get().clone();
        let index = Self::index_in(&pages, page_id)?;
        apply(&mut pages[index]);
        pages[index].touch();
        self.pages.set(&self.storage, pages)
    }

    fn index_in(pages: &[Page], page_id: &str) -> Result<usize> {
        pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| NotyError::PageNotFound(page_id.to_string()))
    }
}
