//! Sample-data generator.
//!
//! Populates a [`MemoryRepo`] with representative stores, a catalog of
//! items across every category, and one shopping list per store. The RNG
//! is caller-supplied so tests and the CLI can seed it for reproducible
//! output.

use rand::Rng;
use rand::seq::IndexedRandom;

use trolley_model::{AisleDraft, ItemDraft, ShoppingListDraft, StoreDraft};

use crate::repo::{MemoryRepo, RepoError};

/// Every category the sample catalog covers.
pub const CATEGORIES: &[&str] = &[
    "Produce",
    "Dairy",
    "Meat",
    "Seafood",
    "Bakery",
    "Frozen",
    "Snacks",
    "Beverages",
    "Condiments",
    "Canned Goods",
    "Household",
    "Personal Care",
];

/// Item names per category.
const CATALOG: &[(&str, &[&str])] = &[
    ("Produce", &["Bananas", "Apples", "Spinach", "Carrots", "Tomatoes"]),
    ("Dairy", &["Whole Milk", "Butter", "Cheddar Cheese", "Greek Yogurt"]),
    ("Meat", &["Chicken Breast", "Ground Beef", "Bacon"]),
    ("Seafood", &["Salmon Fillet", "Shrimp", "Canned Tuna"]),
    ("Bakery", &["Sourdough Loaf", "Bagels", "Croissants"]),
    ("Frozen", &["Frozen Peas", "Ice Cream", "Frozen Pizza"]),
    ("Snacks", &["Tortilla Chips", "Trail Mix", "Granola Bars"]),
    ("Beverages", &["Orange Juice", "Sparkling Water", "Coffee Beans"]),
    ("Condiments", &["Ketchup", "Dijon Mustard", "Olive Oil", "Soy Sauce"]),
    ("Canned Goods", &["Black Beans", "Crushed Tomatoes", "Chicken Stock"]),
    ("Household", &["Paper Towels", "Dish Soap", "Trash Bags"]),
    ("Personal Care", &["Toothpaste", "Shampoo", "Hand Soap"]),
];

const STORE_NAMES: &[&str] = &[
    "Greenfield Market",
    "Hilltop Grocers",
    "Riverside Foods",
    "Maple Street Market",
    "Harbor Pantry",
];

const STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "River Rd",
    "Elm St",
    "Harbor Blvd",
];

/// How many stores [`seed`] creates.
pub const DEFAULT_STORE_COUNT: usize = 3;

/// What [`seed`] created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub stores: usize,
    pub items: usize,
    pub shopping_lists: usize,
}

/// Generate 10 to 20 aisles numbered from 1, each stocking 3 to 6
/// distinct categories.
pub fn generate_aisles<R: Rng + ?Sized>(rng: &mut R) -> Vec<AisleDraft> {
    let aisle_count = rng.random_range(10..=20);
    let mut aisles = Vec::with_capacity(aisle_count);

    for number in 1..=aisle_count {
        let category_count = rng.random_range(3..=6);
        let mut categories: Vec<String> = Vec::new();
        while categories.len() < category_count && categories.len() < CATEGORIES.len() {
            let category = CATEGORIES.choose(rng).unwrap().to_string();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        aisles.push(AisleDraft {
            number: number as u8,
            categories,
        });
    }

    aisles
}

/// Item drafts for the whole catalog, every name in every category.
pub fn generate_items() -> Vec<ItemDraft> {
    CATALOG
        .iter()
        .flat_map(|(category, names)| {
            names.iter().map(|name| ItemDraft {
                name: (*name).into(),
                category: (*category).into(),
                ..Default::default()
            })
        })
        .collect()
}

/// Populate `repo` with [`DEFAULT_STORE_COUNT`] stores, the full item
/// catalog, and one shopping list per store.
///
/// Each list only references items the store actually stocks, so every
/// seeded list can be planned without an "item not available" refusal.
pub fn seed<R: Rng + ?Sized>(repo: &mut MemoryRepo, rng: &mut R) -> Result<SeedSummary, RepoError> {
    let items: Vec<_> = generate_items()
        .into_iter()
        .map(|draft| repo.add_item(draft))
        .collect::<Result<_, _>>()?;

    let mut lists = 0;
    for index in 0..DEFAULT_STORE_COUNT {
        let name = STORE_NAMES[index % STORE_NAMES.len()];
        let street = STREETS.choose(rng).unwrap();
        let store = repo.add_store(StoreDraft {
            name: name.into(),
            address: format!("{} {street}", rng.random_range(1..=999)),
            aisles: generate_aisles(rng),
            ..Default::default()
        })?;

        let stocked: Vec<_> = items
            .iter()
            .filter(|item| {
                store
                    .aisles
                    .iter()
                    .any(|aisle| aisle.categories.contains(&item.category))
            })
            .collect();
        let longest = stocked.len().min(12).max(5);
        let list_len = rng.random_range(5..=longest);
        let picks = stocked.choose_multiple(rng, list_len);

        repo.add_shopping_list(ShoppingListDraft {
            store_id: Some(store.id),
            items: picks
                .map(|item| ItemDraft {
                    id: Some(item.id),
                    name: item.name.clone(),
                    category: item.category.clone(),
                    notes: item.notes.clone(),
                })
                .collect(),
            ..Default::default()
        })?;
        lists += 1;
    }

    Ok(SeedSummary {
        stores: DEFAULT_STORE_COUNT,
        items: repo.items().len(),
        shopping_lists: lists,
    })
}
