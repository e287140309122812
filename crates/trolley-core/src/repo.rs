//! In-memory repository for items, stores, and shopping lists.
//!
//! [`MemoryRepo`] is an explicitly constructed value: hosts build one and
//! pass it to whatever needs it (handlers, services, tests). There is no
//! global singleton and no interior locking; a host that shares a repo
//! across threads owns the synchronization.
//!
//! Collections are plain vectors with linear scans. Updates are full
//! replaces that preserve the addressed id; every write validates the
//! candidate first, so an invalid entity is never stored.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use trolley_model::{
    Item, ItemDraft, ShoppingList, ShoppingListDraft, Store, StoreDraft, ValidationError,
};

/// Errors from repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{kind} not found with id: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// In-memory collection of grocery domain entities.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    items: Vec<Item>,
    stores: Vec<Store>,
    shopping_lists: Vec<ShoppingList>,
}

impl MemoryRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Fetch an item by id.
    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validate and insert a new item. Returns the created item (with a
    /// generated id when the draft carried none).
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item, RepoError> {
        let item = draft.build()?;
        debug!(id = %item.id, name = %item.name, "added item");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Full-replace update of an existing item. The addressed `id` is
    /// preserved regardless of any id in the draft.
    pub fn update_item(&mut self, id: Uuid, mut draft: ItemDraft) -> Result<Item, RepoError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RepoError::NotFound { kind: "item", id })?;

        draft.id = Some(id);
        let item = draft.build()?;
        self.items[index] = item.clone();
        Ok(item)
    }

    /// Delete an item by id. Returns `true` if something was removed.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    // -----------------------------------------------------------------
    // Stores
    // -----------------------------------------------------------------

    /// All stores, in insertion order.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Fetch a store by id.
    pub fn store(&self, id: Uuid) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Validate and insert a new store.
    pub fn add_store(&mut self, draft: StoreDraft) -> Result<Store, RepoError> {
        let store = draft.build()?;
        debug!(id = %store.id, name = %store.name, aisles = store.aisles.len(), "added store");
        self.stores.push(store.clone());
        Ok(store)
    }

    /// Full-replace update of an existing store, preserving the
    /// addressed `id`.
    pub fn update_store(&mut self, id: Uuid, mut draft: StoreDraft) -> Result<Store, RepoError> {
        let index = self
            .stores
            .iter()
            .position(|store| store.id == id)
            .ok_or(RepoError::NotFound { kind: "store", id })?;

        draft.id = Some(id);
        let store = draft.build()?;
        self.stores[index] = store.clone();
        Ok(store)
    }

    /// Delete a store by id. Returns `true` if something was removed.
    pub fn delete_store(&mut self, id: Uuid) -> bool {
        let before = self.stores.len();
        self.stores.retain(|store| store.id != id);
        self.stores.len() < before
    }

    // -----------------------------------------------------------------
    // Shopping lists
    // -----------------------------------------------------------------

    /// All shopping lists, in insertion order.
    pub fn shopping_lists(&self) -> &[ShoppingList] {
        &self.shopping_lists
    }

    /// Fetch a shopping list by id.
    pub fn shopping_list(&self, id: Uuid) -> Option<&ShoppingList> {
        self.shopping_lists.iter().find(|list| list.id == id)
    }

    /// Validate and insert a new shopping list.
    ///
    /// `store_id` is a soft reference; whether it names a real store is
    /// the caller's concern, not the repository's.
    pub fn add_shopping_list(
        &mut self,
        draft: ShoppingListDraft,
    ) -> Result<ShoppingList, RepoError> {
        let list = draft.build()?;
        debug!(id = %list.id, store_id = %list.store_id, items = list.items.len(), "added shopping list");
        self.shopping_lists.push(list.clone());
        Ok(list)
    }

    /// Full-replace update of an existing shopping list, preserving the
    /// addressed `id`.
    pub fn update_shopping_list(
        &mut self,
        id: Uuid,
        mut draft: ShoppingListDraft,
    ) -> Result<ShoppingList, RepoError> {
        let index = self
            .shopping_lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(RepoError::NotFound {
                kind: "shopping list",
                id,
            })?;

        draft.id = Some(id);
        let list = draft.build()?;
        self.shopping_lists[index] = list.clone();
        Ok(list)
    }

    /// Delete a shopping list by id. Returns `true` if something was
    /// removed.
    pub fn delete_shopping_list(&mut self, id: Uuid) -> bool {
        let before = self.shopping_lists.len();
        self.shopping_lists.retain(|list| list.id != id);
        self.shopping_lists.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_draft(name: &str, category: &str) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    #[test]
    fn add_and_fetch_item() {
        let mut repo = MemoryRepo::new();
        let item = repo.add_item(item_draft("Milk", "Dairy")).unwrap();

        assert_eq!(repo.items().len(), 1);
        assert_eq!(repo.item(item.id), Some(&item));
    }

    #[test]
    fn add_invalid_item_stores_nothing() {
        let mut repo = MemoryRepo::new();
        let err = repo.add_item(item_draft("", "Dairy")).unwrap_err();

        assert_eq!(
            err,
            RepoError::Validation(ValidationError::MissingField { field: "name" })
        );
        assert!(repo.items().is_empty());
    }

    #[test]
    fn update_item_replaces_and_preserves_id() {
        let mut repo = MemoryRepo::new();
        let item = repo.add_item(item_draft("Milk", "Dairy")).unwrap();

        // Draft carries a foreign id; the addressed one wins.
        let mut replacement = item_draft("Whole Milk", "Dairy");
        replacement.id = Some(Uuid::new_v4());
        let updated = repo.update_item(item.id, replacement).unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Whole Milk");
        assert_eq!(repo.items().len(), 1);
    }

    #[test]
    fn update_missing_item_fails() {
        let mut repo = MemoryRepo::new();
        let id = Uuid::new_v4();
        let err = repo.update_item(id, item_draft("Milk", "Dairy")).unwrap_err();
        assert_eq!(err, RepoError::NotFound { kind: "item", id });
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn update_with_invalid_draft_keeps_the_old_item() {
        let mut repo = MemoryRepo::new();
        let item = repo.add_item(item_draft("Milk", "Dairy")).unwrap();

        let err = repo.update_item(item.id, item_draft("", "Dairy")).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(repo.item(item.id).unwrap().name, "Milk");
    }

    #[test]
    fn delete_item_reports_whether_it_removed() {
        let mut repo = MemoryRepo::new();
        let item = repo.add_item(item_draft("Milk", "Dairy")).unwrap();

        assert!(repo.delete_item(item.id));
        assert!(!repo.delete_item(item.id));
        assert!(repo.items().is_empty());
    }

    #[test]
    fn store_crud_round_trip() {
        let mut repo = MemoryRepo::new();
        let store = repo
            .add_store(StoreDraft {
                name: "Corner Shop".into(),
                address: "1 Main St".into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(repo.store(store.id), Some(&store));

        let updated = repo
            .update_store(
                store.id,
                StoreDraft {
                    name: "Corner Shop II".into(),
                    address: "1 Main St".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, store.id);
        assert_eq!(updated.name, "Corner Shop II");

        assert!(repo.delete_store(store.id));
        assert!(repo.stores().is_empty());
    }

    #[test]
    fn shopping_list_requires_store_id_but_not_a_real_store() {
        let mut repo = MemoryRepo::new();

        let err = repo
            .add_shopping_list(ShoppingListDraft::default())
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // A well-formed but dangling store_id is accepted here.
        let list = repo
            .add_shopping_list(ShoppingListDraft {
                store_id: Some(Uuid::new_v4()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(repo.shopping_list(list.id), Some(&list));
    }
}
