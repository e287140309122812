//! Linear aisle planner: group items by the aisle stocking their
//! category, then walk aisles in ascending number order.

use std::collections::BTreeMap;

use tracing::debug;

use trolley_model::{Item, RouteStep, Store, Validate};

use super::trait_def::{PlanError, RoutePlanner};

/// Bucket key for items whose category no aisle stocks. Sorts before
/// every real aisle number.
const UNCATEGORIZED: u8 = 0;

/// The default planning strategy.
///
/// Each item is matched against every aisle, in store order, by category
/// membership. An item whose category is stocked in several aisles is
/// collected in *each* of them (deliberate multi-assignment, not
/// deduplicated). Items matching no aisle land in a reserved bucket that
/// sorts first and is labeled aisle 1 in the output.
#[derive(Debug, Default)]
pub struct LinearAislePlanner;

impl LinearAislePlanner {
    pub fn new() -> Self {
        Self
    }
}

impl RoutePlanner for LinearAislePlanner {
    fn name(&self) -> &str {
        "linear"
    }

    fn plan(&self, store: &Store, items: &[Item]) -> Result<Vec<RouteStep>, PlanError> {
        // Preconditions: the planner reads aisle numbers and item
        // categories, so those must be well-formed.
        for aisle in &store.aisles {
            if let Err(err) = aisle.validate() {
                return Err(PlanError::InvalidStore {
                    reason: err.to_string(),
                });
            }
        }
        for item in items {
            if let Err(err) = item.validate() {
                return Err(PlanError::InvalidItems {
                    reason: err.to_string(),
                });
            }
        }

        // Bucket items by aisle number, ascending. Insertion order within
        // a bucket follows input item order.
        let mut buckets: BTreeMap<u8, Vec<Item>> = BTreeMap::new();

        for item in items {
            let mut matched = false;
            for aisle in &store.aisles {
                if aisle.categories.iter().any(|c| c == &item.category) {
                    buckets.entry(aisle.number).or_default().push(item.clone());
                    matched = true;
                }
            }
            if !matched {
                buckets.entry(UNCATEGORIZED).or_default().push(item.clone());
            }
        }

        debug!(
            items = items.len(),
            aisles = store.aisles.len(),
            steps = buckets.len(),
            "planned linear route"
        );

        // The uncategorized bucket keeps its key for ordering (it sorts
        // first) but is relabeled aisle 1 in the output. It is never
        // merged with a genuine aisle-1 bucket, so the route can carry
        // two distinct steps both labeled 1.
        let route = buckets
            .into_iter()
            .map(|(number, bucket)| {
                let label = if number == UNCATEGORIZED { 1 } else { number };
                RouteStep::new(label, bucket)
            })
            .collect();

        Ok(route)
    }
}
