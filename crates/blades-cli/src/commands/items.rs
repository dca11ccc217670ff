use super::{read_json, AppContext};
use crate::output::Output;
use blades_core::{all_items_by_type, get_nested, new_owned_item, DuplicatePolicy};
use blades_models::ItemRecord;
use blades_sources::{catalog_from_config, CatalogProvider, DirectoryCatalog};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub fn run_dupes(ctx: &AppContext, candidate: &Path, existing: &Path, output: &Output) -> Result<()> {
    let candidate: ItemRecord = read_json(candidate)?;
    let existing: Vec<ItemRecord> = read_json(existing)?;

    if candidate.type_str().map_or(true, str::is_empty) {
        output.warn("Candidate item has no type; only name collisions will be detected");
    }

    let policy = DuplicatePolicy::from(&ctx.config.duplicates);
    let dupes = policy.compute_duplicates(&candidate, &existing);

    if dupes.is_empty() {
        if output.is_human() {
            output.success("No duplicates");
        } else {
            output.result("", json!({ "duplicates": [] }));
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = existing
        .iter()
        .filter(|item| dupes.contains(&item.id))
        .map(|item| {
            vec![
                item.id.clone(),
                item.name.clone().unwrap_or_default(),
                item.item_type.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output.table(&["Id", "Name", "Type"], rows, json!({ "duplicates": dupes }));

    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

pub fn run_get(file: &Path, path: &str, output: &Output) -> Result<()> {
    let document: Value = read_json(file)?;
    let value = get_nested(&document, path)?;
    output.result(display_value(value), json!({ "path": path, "value": value }));
    Ok(())
}

pub async fn run_items(ctx: &AppContext, item_type: &str, catalog: Option<PathBuf>, output: &Output) -> Result<()> {
    let provider: Box<dyn CatalogProvider> = match catalog {
        Some(dir) => Box::new(DirectoryCatalog::new(dir)),
        None => catalog_from_config(&ctx.config, &ctx.paths),
    };

    let items = all_items_by_type(provider.as_ref(), item_type).await?;
    if items.is_empty() {
        output.info(format!("No items of type '{}'", item_type));
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| vec![item.name.clone().unwrap_or_default(), item.id.clone()])
        .collect();
    let data = serde_json::to_value(&items).map_err(|e| eyre!("Failed to serialize items: {}", e))?;
    output.table(&["Name", "Id"], rows, data);

    Ok(())
}

pub fn run_new_item(item_type: &str, output: &Output) -> Result<()> {
    if item_type.is_empty() {
        return Err(eyre!("Item type cannot be empty"));
    }
    let item = new_owned_item(item_type);
    let data = serde_json::to_value(&item)?;
    output.result(serde_json::to_string_pretty(&data)?, data);
    Ok(())
}
