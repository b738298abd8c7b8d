use crate::model::{ShoppingItem, ShoppingList};
use crate::store::{Store, StoreError};
use crate::{items, lists};

/// Which view the user is in: browsing the whole collection, or editing the
/// items of one selected list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Editing(u32),
}

/// Owns the in-memory collection and the injected storage backend. Every
/// mutating operation writes the full collection back to the store before
/// returning, so persisted state never lags the in-memory state.
///
/// All collection operations are total: a missing id is a silent no-op.
pub struct Session {
    lists: Vec<ShoppingList>,
    store: Box<dyn Store>,
    search: String,
    mode: Mode,
}

impl Session {
    /// Load the persisted collection and start in the browsing view.
    pub fn open(store: Box<dyn Store>) -> Result<Self, StoreError> {
        let lists = store.load()?;
        Ok(Self {
            lists,
            store,
            search: String::new(),
            mode: Mode::Browsing,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Lists visible under the current search query.
    pub fn visible_lists(&self) -> Vec<&ShoppingList> {
        lists::search(&self.lists, &self.search)
    }

    /// Switch to editing the list with the given id. Stays in the browsing
    /// view (and returns false) if no such list exists.
    pub fn select(&mut self, id: u32) -> bool {
        let found = self.lists.iter().any(|l| l.id == id);
        if found {
            self.mode = Mode::Editing(id);
        }
        found
    }

    /// Back to the browsing view.
    pub fn deselect(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// The list being edited, if any. Resolves by id, so a list deleted out
    /// from under a stale selection comes back as None.
    pub fn selected(&self) -> Option<&ShoppingList> {
        match self.mode {
            Mode::Editing(id) => self.lists.iter().find(|l| l.id == id),
            Mode::Browsing => None,
        }
    }

    pub fn add_list(&mut self, candidate: ShoppingList) -> Result<u32, StoreError> {
        let id = lists::add_list(&mut self.lists, candidate);
        self.persist()?;
        Ok(id)
    }

    pub fn delete_list(&mut self, id: u32) -> Result<(), StoreError> {
        lists::delete_list(&mut self.lists, id);
        self.persist()
    }

    pub fn update_list(&mut self, updated: ShoppingList) -> Result<(), StoreError> {
        lists::update_list(&mut self.lists, updated);
        self.persist()
    }

    pub fn rename_list(&mut self, id: u32, new_name: &str) -> Result<(), StoreError> {
        lists::rename_list(&mut self.lists, id, new_name);
        self.persist()
    }

    /// Add an item to the selected list. Returns the new item id, or None
    /// when nothing is selected.
    pub fn add_item(&mut self, candidate: ShoppingItem) -> Result<Option<u32>, StoreError> {
        let Some(list) = self.selected() else {
            return Ok(None);
        };
        let mut updated = list.clone();
        let id = items::add_item(&mut updated.items, candidate);
        self.update_list(updated)?;
        Ok(Some(id))
    }

    /// Delete an item from the selected list. No-op while browsing.
    pub fn delete_item(&mut self, id: u32) -> Result<(), StoreError> {
        let Some(list) = self.selected() else {
            return Ok(());
        };
        let mut updated = list.clone();
        items::delete_item(&mut updated.items, id);
        self.update_list(updated)
    }

    /// Replace an item of the selected list by full value. No-op while
    /// browsing or when the item id is missing.
    pub fn update_item(&mut self, updated_item: ShoppingItem) -> Result<(), StoreError> {
        let Some(list) = self.selected() else {
            return Ok(());
        };
        let mut updated = list.clone();
        items::update_item(&mut updated.items, updated_item);
        self.update_list(updated)
    }

    /// Total price of the selected list; 0 while browsing.
    pub fn total_price(&self) -> f64 {
        self.selected().map_or(0.0, |l| items::total_price(&l.items))
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.lists)
    }
}
