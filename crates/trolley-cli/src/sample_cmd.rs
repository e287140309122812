//! `trolley sample` -- generate sample data files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use trolley_core::repo::MemoryRepo;
use trolley_core::seed;

/// Seed a fresh repository and dump its stores and items as JSON files
/// (`stores.json`, `items.json`) into `out`.
pub fn run(out: &Path, rng_seed: Option<u64>) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;

    let mut rng = match rng_seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    };

    let mut repo = MemoryRepo::new();
    let summary = seed::seed(&mut repo, &mut rng).context("failed to generate sample data")?;

    write_json(&out.join("stores.json"), &repo.stores())?;
    write_json(&out.join("items.json"), &repo.items())?;

    info!(
        stores = summary.stores,
        items = summary.items,
        "sample data written to {}",
        out.display()
    );
    println!(
        "wrote {} stores and {} items to {}",
        summary.stores,
        summary.items,
        out.display()
    );
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
