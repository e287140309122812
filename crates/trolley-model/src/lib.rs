//! Domain model for the grocery route planner.
//!
//! Entities are plain structs with public fields; constructing one never
//! fails. Field invariants (v4 UUID ids, non-empty names, aisle numbers
//! in 1..=20) are checked separately through the [`Validate`] trait, and
//! the `*Draft` types bridge loosely-shaped input (JSON bodies, config
//! objects) into validated entities.

pub mod models;
pub mod validate;

pub use models::{
    Aisle, AisleDraft, Item, ItemDraft, RouteStep, ShoppingList, ShoppingListDraft, Store,
    StoreDraft,
};
pub use validate::{Validate, ValidationError};
