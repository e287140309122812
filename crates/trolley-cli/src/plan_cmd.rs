//! `trolley plan` -- plan a route from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use trolley_core::planner::get_planner;
use trolley_model::{Item, ItemDraft, RouteStep, Store, StoreDraft};

pub fn run(store_path: &Path, items_path: &Path, planner: Option<&str>, json: bool) -> Result<()> {
    let (store, items) = load_inputs(store_path, items_path)?;
    let route = plan(&store, &items, planner)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&store, &route);
    }
    Ok(())
}

fn load_inputs(store_path: &Path, items_path: &Path) -> Result<(Store, Vec<Item>)> {
    let store_json = fs::read_to_string(store_path)
        .with_context(|| format!("failed to read store file {}", store_path.display()))?;
    let store_draft: StoreDraft = serde_json::from_str(&store_json)
        .with_context(|| format!("failed to parse store file {}", store_path.display()))?;
    let store = store_draft
        .build()
        .with_context(|| format!("invalid store in {}", store_path.display()))?;

    let items_json = fs::read_to_string(items_path)
        .with_context(|| format!("failed to read items file {}", items_path.display()))?;
    let item_drafts: Vec<ItemDraft> = serde_json::from_str(&items_json)
        .with_context(|| format!("failed to parse items file {}", items_path.display()))?;
    let items = item_drafts
        .into_iter()
        .map(ItemDraft::build)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid item in {}", items_path.display()))?;

    Ok((store, items))
}

fn plan(store: &Store, items: &[Item], planner: Option<&str>) -> Result<Vec<RouteStep>> {
    let planner = get_planner(planner)?;
    let route = planner.plan(store, items)?;
    Ok(route)
}

fn print_route(store: &Store, route: &[RouteStep]) {
    println!("Route through {} ({}):", store.name, store.address);
    if route.is_empty() {
        println!("  nothing to collect");
        return;
    }
    for step in route {
        println!("  Aisle {}:", step.aisle_number);
        for item in &step.items {
            println!("    - {} ({})", item.name, item.category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const STORE_JSON: &str = r#"{
        "name": "Test Store",
        "address": "123 Test St",
        "aisles": [
            {"number": 3, "categories": ["Dairy"]},
            {"number": 1, "categories": ["Fruits"]}
        ]
    }"#;

    const ITEMS_JSON: &str = r#"[
        {"name": "Milk", "category": "Dairy"},
        {"name": "Apples", "category": "Fruits"}
    ]"#;

    #[test]
    fn loads_drafts_and_plans_in_aisle_order() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = write_file(dir.path(), "store.json", STORE_JSON);
        let items_path = write_file(dir.path(), "items.json", ITEMS_JSON);

        let (store, items) = load_inputs(&store_path, &items_path).unwrap();
        let route = plan(&store, &items, None).unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route[0].aisle_number, 1);
        assert_eq!(route[0].items[0].name, "Apples");
        assert_eq!(route[1].aisle_number, 3);
    }

    #[test]
    fn invalid_store_file_is_a_readable_error() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = write_file(
            dir.path(),
            "store.json",
            r#"{"name": "Test Store", "aisles": []}"#,
        );
        let items_path = write_file(dir.path(), "items.json", "[]");

        let err = load_inputs(&store_path, &items_path).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid store"));
        assert!(chain.contains("address"));
    }

    #[test]
    fn unknown_planner_surfaces_the_requested_name() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = write_file(dir.path(), "store.json", STORE_JSON);
        let items_path = write_file(dir.path(), "items.json", ITEMS_JSON);

        let (store, items) = load_inputs(&store_path, &items_path).unwrap();
        let err = plan(&store, &items, Some("zigzag")).unwrap_err();
        assert!(err.to_string().contains("zigzag"));
    }
}
