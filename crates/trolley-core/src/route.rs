//! Route service: resolve a route request against a repository and run
//! the selected planner.
//!
//! This is the seam a hosting API layer calls into. It owns everything
//! between "ids arrived from a client" and "a planner got validated
//! values": store lookup, item resolution, the stocked-in-this-store
//! check, and planner selection.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use trolley_model::{Item, RouteStep};

use crate::planner::{PlanError, PlannerError, get_planner};
use crate::repo::MemoryRepo;

/// A request to plan a shopping route.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteRequest {
    /// Store to walk.
    pub store_id: Uuid,
    /// Ids of the items to collect. Order is preserved into planning.
    pub items: Vec<Uuid>,
    /// Planner strategy name; `None` means the default.
    #[serde(default)]
    pub planner: Option<String>,
}

/// Errors from resolving and planning a route request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("store not found with id: {0}")]
    StoreNotFound(Uuid),

    #[error("item not found with id: {0}")]
    ItemNotFound(Uuid),

    #[error("item {name:?} (category: {category}) is not available in store {store:?}")]
    ItemNotStocked {
        name: String,
        category: String,
        store: String,
    },

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Resolve `request` against `repo` and plan the route.
///
/// Every referenced id must exist, and every resolved item's category
/// must be stocked by at least one aisle of the chosen store -- a route
/// through a store that cannot supply an item is refused rather than
/// silently routed to the uncategorized step.
pub fn plan_route(repo: &MemoryRepo, request: &RouteRequest) -> Result<Vec<RouteStep>, RouteError> {
    let store = repo
        .store(request.store_id)
        .ok_or(RouteError::StoreNotFound(request.store_id))?;

    let items: Vec<Item> = request
        .items
        .iter()
        .map(|&id| {
            repo.item(id)
                .cloned()
                .ok_or(RouteError::ItemNotFound(id))
        })
        .collect::<Result<_, _>>()?;

    for item in &items {
        let stocked = store
            .aisles
            .iter()
            .any(|aisle| aisle.categories.iter().any(|c| c == &item.category));
        if !stocked {
            return Err(RouteError::ItemNotStocked {
                name: item.name.clone(),
                category: item.category.clone(),
                store: store.name.clone(),
            });
        }
    }

    debug!(
        store = %store.name,
        items = items.len(),
        planner = request.planner.as_deref().unwrap_or("linear"),
        "planning route"
    );

    let planner = get_planner(request.planner.as_deref())?;
    Ok(planner.plan(store, &items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_model::{AisleDraft, ItemDraft, StoreDraft};

    fn seeded_repo() -> (MemoryRepo, Uuid, Vec<Uuid>) {
        let mut repo = MemoryRepo::new();
        let store = repo
            .add_store(StoreDraft {
                name: "Test Store".into(),
                address: "123 Test St".into(),
                aisles: vec![
                    AisleDraft {
                        number: 3,
                        categories: vec!["Dairy".into()],
                    },
                    AisleDraft {
                        number: 1,
                        categories: vec!["Fruits".into()],
                    },
                ],
                ..Default::default()
            })
            .unwrap();

        let milk = repo
            .add_item(ItemDraft {
                name: "Milk".into(),
                category: "Dairy".into(),
                ..Default::default()
            })
            .unwrap();
        let apples = repo
            .add_item(ItemDraft {
                name: "Apples".into(),
                category: "Fruits".into(),
                ..Default::default()
            })
            .unwrap();

        (repo, store.id, vec![milk.id, apples.id])
    }

    #[test]
    fn plans_a_route_for_known_ids() {
        let (repo, store_id, item_ids) = seeded_repo();
        let route = plan_route(
            &repo,
            &RouteRequest {
                store_id,
                items: item_ids,
                planner: None,
            },
        )
        .unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route[0].aisle_number, 1);
        assert_eq!(route[0].items[0].name, "Apples");
        assert_eq!(route[1].aisle_number, 3);
        assert_eq!(route[1].items[0].name, "Milk");
    }

    #[test]
    fn unknown_store_fails() {
        let (repo, _, item_ids) = seeded_repo();
        let missing = Uuid::new_v4();
        let err = plan_route(
            &repo,
            &RouteRequest {
                store_id: missing,
                items: item_ids,
                planner: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, RouteError::StoreNotFound(missing));
    }

    #[test]
    fn unknown_item_fails() {
        let (repo, store_id, _) = seeded_repo();
        let missing = Uuid::new_v4();
        let err = plan_route(
            &repo,
            &RouteRequest {
                store_id,
                items: vec![missing],
                planner: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, RouteError::ItemNotFound(missing));
    }

    #[test]
    fn item_not_stocked_in_store_is_refused() {
        let (mut repo, store_id, _) = seeded_repo();
        let cereal = repo
            .add_item(ItemDraft {
                name: "Cereal".into(),
                category: "Breakfast".into(),
                ..Default::default()
            })
            .unwrap();

        let err = plan_route(
            &repo,
            &RouteRequest {
                store_id,
                items: vec![cereal.id],
                planner: None,
            },
        )
        .unwrap_err();

        assert!(matches!(err, RouteError::ItemNotStocked { .. }));
        assert!(err.to_string().contains("Cereal"));
        assert!(err.to_string().contains("Breakfast"));
    }

    #[test]
    fn unknown_planner_kind_fails_loudly() {
        let (repo, store_id, item_ids) = seeded_repo();
        let err = plan_route(
            &repo,
            &RouteRequest {
                store_id,
                items: item_ids,
                planner: Some("nonexistent".into()),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            RouteError::Planner(PlannerError::UnknownKind("nonexistent".into()))
        );
    }

    #[test]
    fn empty_item_list_plans_an_empty_route() {
        let (repo, store_id, _) = seeded_repo();
        let route = plan_route(
            &repo,
            &RouteRequest {
                store_id,
                items: vec![],
                planner: None,
            },
        )
        .unwrap();
        assert!(route.is_empty());
    }
}
