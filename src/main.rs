// Batch CLI: localize externally-hosted images referenced by content records.
//
// Takes one argument, a JSON run-configuration file, runs the batch to
// completion, and prints one line per processed record. With no
// content_types configured it lists the types available in the store.

use anyhow::{bail, Context, Result};
use imgmirror::{BatchDriver, JsonRecordStore, MirrorConfig, RecordStore};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct RunConfig {
    records_dir: PathBuf,
    image_dir: PathBuf,
    default_image: PathBuf,
    #[serde(default)]
    trusted_prefixes: Vec<String>,
    /// Single cap from the original trigger form. Applied both as the
    /// per-record image cap and as the global record cap, matching the
    /// observed behavior of the source system.
    #[serde(default)]
    max_images: Option<usize>,
    #[serde(default)]
    content_types: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Some(config_path) = std::env::args().nth(1) else {
        bail!("Usage: imgmirror <run-config.json>");
    };
    let raw = tokio::fs::read_to_string(&config_path)
        .await
        .with_context(|| format!("Failed to read {config_path}"))?;
    let run: RunConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid run configuration in {config_path}"))?;

    let store = JsonRecordStore::new(&run.records_dir);

    if run.content_types.is_empty() {
        let types = store.content_types().await?;
        if types.is_empty() {
            println!("No content types found in {}", run.records_dir.display());
        } else {
            println!("Available content types (set \"content_types\" to select):");
            for content_type in types {
                println!("  {} ({})", content_type.slug, content_type.label);
            }
        }
        return Ok(());
    }

    let config = MirrorConfig::builder()
        .image_dir(run.image_dir)
        .default_image(run.default_image)
        .trusted_prefixes(run.trusted_prefixes)
        .max_images_per_record(run.max_images)
        .max_records(run.max_images)
        .build()?;

    let outcomes = BatchDriver::new(&config, &store)
        .run(&run.content_types)
        .await?;

    if outcomes.is_empty() {
        println!("No records needed processing.");
        return Ok(());
    }
    for outcome in outcomes {
        match outcome.error {
            Some(error) => println!(
                "{}: {} image(s), update failed: {error}",
                outcome.title, outcome.count
            ),
            None => println!("{}: {} image(s)", outcome.title, outcome.count),
        }
    }
    Ok(())
}
