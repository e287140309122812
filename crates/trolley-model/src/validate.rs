//! Field-level validation for domain entities.
//!
//! Validation is synchronous and runs on whole candidate values; an
//! entity that fails is never stored or partially applied. Rules:
//!
//! - `id` / `store_id` must be v4 UUIDs.
//! - `name`, `category`, `address` must be non-empty.
//! - Aisle numbers must fall in `1..=20`.
//!
//! Nested entities are walked: a store validates its aisles, a list and
//! a route step validate their items.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{AISLE_MAX, AISLE_MIN, Aisle, Item, RouteStep, ShoppingList, Store};

/// A candidate entity violated a field invariant.
///
/// Carries the offending field and value so callers can surface a
/// descriptive 400-class response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} is not a v4 UUID: {value}")]
    NotUuidV4 { field: &'static str, value: Uuid },

    #[error(
        "aisle number {number} out of range (expected {AISLE_MIN} to {AISLE_MAX})"
    )]
    AisleNumberOutOfRange { number: u8 },
}

/// Validation entry point, implemented by every entity.
pub trait Validate {
    /// Check every field invariant, returning the first violation found.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require_uuid_v4(field: &'static str, value: Uuid) -> Result<(), ValidationError> {
    if value.get_version() == Some(uuid::Version::Random) {
        Ok(())
    } else {
        Err(ValidationError::NotUuidV4 { field, value })
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

fn require_aisle_number(number: u8) -> Result<(), ValidationError> {
    if (AISLE_MIN..=AISLE_MAX).contains(&number) {
        Ok(())
    } else {
        Err(ValidationError::AisleNumberOutOfRange { number })
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        require_uuid_v4("id", self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("category", &self.category)?;
        // notes is free text, no constraint
        Ok(())
    }
}

impl Validate for Aisle {
    fn validate(&self) -> Result<(), ValidationError> {
        require_aisle_number(self.number)
    }
}

impl Validate for Store {
    fn validate(&self) -> Result<(), ValidationError> {
        require_uuid_v4("id", self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)?;
        for aisle in &self.aisles {
            aisle.validate()?;
        }
        Ok(())
    }
}

impl Validate for ShoppingList {
    fn validate(&self) -> Result<(), ValidationError> {
        require_uuid_v4("id", self.id)?;
        require_uuid_v4("store_id", self.store_id)?;
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

impl Validate for RouteStep {
    fn validate(&self) -> Result<(), ValidationError> {
        require_aisle_number(self.aisle_number)?;
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
