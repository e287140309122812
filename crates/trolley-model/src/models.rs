use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{Validate, ValidationError};

/// Lowest and highest aisle numbers a store can have.
pub const AISLE_MIN: u8 = 1;
pub const AISLE_MAX: u8 = 20;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A grocery item.
///
/// Identity is the `id`. Items are immutable once stored; updates go
/// through a full replace in the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// v4 UUID identifying the item.
    pub id: Uuid,
    /// Display name (e.g. "Whole Milk"). Non-empty.
    pub name: String,
    /// Department the item belongs to (e.g. "Dairy"). Non-empty.
    /// Aisle resolution matches this against [`Aisle::categories`].
    pub category: String,
    /// Free-text notes. May be empty.
    pub notes: String,
}

/// A physical store lane stocking one or more categories.
///
/// Embedded inside [`Store`]; aisles have no identity of their own.
/// `categories` is a sequence, not a set: duplicates in input are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aisle {
    /// Aisle number, `1..=20`. Numbers within a store need not be unique
    /// or contiguous.
    pub number: u8,
    pub categories: Vec<String>,
}

/// A grocery store with its aisle layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// v4 UUID identifying the store.
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub aisles: Vec<Aisle>,
}

/// A shopping list tied to a store.
///
/// `store_id` is a soft reference: the model does not check that a store
/// with that id exists. The calling layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Uuid,
    pub store_id: Uuid,
    pub items: Vec<Item>,
}

/// One stop in a planned shopping route: an aisle and the items to
/// collect there.
///
/// Constructed only by planners, fresh per planning call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    pub aisle_number: u8,
    pub items: Vec<Item>,
}

impl RouteStep {
    pub fn new(aisle_number: u8, items: Vec<Item>) -> Self {
        Self {
            aisle_number,
            items,
        }
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Candidate [`Item`] from untrusted input. Every field is optional;
/// [`ItemDraft::build`] fills defaults (fresh v4 id, empty strings) and
/// validates the result.
///
/// Builds are non-deterministic when `id` is absent; tests that need
/// stable ids must supply one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDraft {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

impl ItemDraft {
    pub fn build(self) -> Result<Item, ValidationError> {
        let item = Item {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            category: self.category,
            notes: self.notes,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Candidate [`Aisle`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AisleDraft {
    #[serde(default = "default_aisle_number")]
    pub number: u8,
    #[serde(default)]
    pub categories: Vec<String>,
}

fn default_aisle_number() -> u8 {
    AISLE_MIN
}

impl Default for AisleDraft {
    fn default() -> Self {
        Self {
            number: AISLE_MIN,
            categories: Vec::new(),
        }
    }
}

impl AisleDraft {
    pub fn build(self) -> Result<Aisle, ValidationError> {
        let aisle = Aisle {
            number: self.number,
            categories: self.categories,
        };
        aisle.validate()?;
        Ok(aisle)
    }
}

/// Candidate [`Store`]. Aisles are built (and therefore validated)
/// individually before the store as a whole is validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreDraft {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub aisles: Vec<AisleDraft>,
}

impl StoreDraft {
    pub fn build(self) -> Result<Store, ValidationError> {
        let aisles = self
            .aisles
            .into_iter()
            .map(AisleDraft::build)
            .collect::<Result<Vec<_>, _>>()?;
        let store = Store {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            address: self.address,
            aisles,
        };
        store.validate()?;
        Ok(store)
    }
}

/// Candidate [`ShoppingList`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShoppingListDraft {
    pub id: Option<Uuid>,
    pub store_id: Option<Uuid>,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

impl ShoppingListDraft {
    pub fn build(self) -> Result<ShoppingList, ValidationError> {
        let items = self
            .items
            .into_iter()
            .map(ItemDraft::build)
            .collect::<Result<Vec<_>, _>>()?;
        let list = ShoppingList {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            // A missing store_id must fail validation, not be invented.
            // The nil UUID is not v4, so validate() rejects it.
            store_id: self.store_id.unwrap_or_else(Uuid::nil),
            items,
        };
        list.validate()?;
        Ok(list)
    }
}
