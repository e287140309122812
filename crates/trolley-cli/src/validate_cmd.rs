//! `trolley validate` -- check an entity draft file against the model
//! invariants.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use trolley_model::{ItemDraft, ShoppingListDraft, StoreDraft, ValidationError};

use crate::EntityKind;

pub fn run(kind: EntityKind, file: &Path) -> Result<()> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    match check(kind, &json)? {
        Ok(id) => {
            println!("ok: {id}");
            Ok(())
        }
        Err(err) => anyhow::bail!("invalid {}: {err}", kind_name(kind)),
    }
}

/// Parse `json` as a draft of `kind` and build it. The outer error is a
/// parse failure; the inner result is the validation verdict, carrying
/// the entity id on success.
fn check(kind: EntityKind, json: &str) -> Result<Result<String, ValidationError>> {
    let verdict = match kind {
        EntityKind::Item => {
            let draft: ItemDraft = serde_json::from_str(json).context("failed to parse item")?;
            draft.build().map(|item| format!("item {}", item.id))
        }
        EntityKind::Store => {
            let draft: StoreDraft = serde_json::from_str(json).context("failed to parse store")?;
            draft.build().map(|store| format!("store {}", store.id))
        }
        EntityKind::List => {
            let draft: ShoppingListDraft =
                serde_json::from_str(json).context("failed to parse shopping list")?;
            draft.build().map(|list| format!("shopping list {}", list.id))
        }
    };
    Ok(verdict)
}

fn kind_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Item => "item",
        EntityKind::Store => "store",
        EntityKind::List => "shopping list",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_item_passes() {
        let verdict = check(EntityKind::Item, r#"{"name":"Milk","category":"Dairy"}"#).unwrap();
        assert!(verdict.is_ok());
    }

    #[test]
    fn item_without_category_fails_validation() {
        let verdict = check(EntityKind::Item, r#"{"name":"Milk"}"#).unwrap();
        assert_eq!(
            verdict.unwrap_err(),
            ValidationError::MissingField { field: "category" }
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = check(EntityKind::Store, "{not json");
        assert!(result.is_err());
    }

    #[test]
    fn store_with_out_of_range_aisle_fails() {
        let verdict = check(
            EntityKind::Store,
            r#"{"name":"Shop","address":"1 Main St","aisles":[{"number":21}]}"#,
        )
        .unwrap();
        assert_eq!(
            verdict.unwrap_err(),
            ValidationError::AisleNumberOutOfRange { number: 21 }
        );
    }

    #[test]
    fn list_requires_a_store_id() {
        let verdict = check(EntityKind::List, r#"{"items":[]}"#).unwrap();
        assert!(matches!(
            verdict.unwrap_err(),
            ValidationError::NotUuidV4 {
                field: "store_id",
                ..
            }
        ));
    }
}
