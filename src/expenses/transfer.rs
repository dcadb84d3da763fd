//! Transaction import/export
//!
//! The whole collection exports as one pretty-printed JSON file; import
//! accepts any JSON array and appends its records, defaulting a missing
//! creation timestamp to now. There is no schema versioning.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::{load_ledger, save_ledger, Transaction};
use crate::store::JsonStore;

/// Default export file name, dated like the original download
pub fn default_export_name() -> String {
    format!("expense-tracker-{}.json", Utc::now().format("%Y-%m-%d"))
}

/// Write all transactions to `path` (or the dated default in the
/// current directory) as pretty-printed JSON
pub fn export_transactions(path: Option<PathBuf>) -> Result<()> {
    let store = JsonStore::open()?;
    let ledger = load_ledger(&store);

    let path = path.unwrap_or_else(|| PathBuf::from(default_export_name()));
    let contents = serde_json::to_string_pretty(ledger.records())
        .context("Failed to serialize transactions")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "Exported {} transaction(s) to {}",
        ledger.records().len(),
        path.display()
    );
    Ok(())
}

/// Read a JSON file and append its records to the collection.
///
/// The only structural requirement is that the document is an array.
/// Elements that do not parse as transactions are skipped and counted;
/// a missing `createdAt` defaults to now.
pub fn import_transactions(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (imported, skipped) = parse_import(&contents)?;

    let store = JsonStore::open()?;
    let mut ledger = load_ledger(&store);
    let count = imported.len();
    ledger.append_all(imported);
    save_ledger(&store, &ledger)?;

    println!("Imported {} transaction(s)", count);
    if skipped > 0 {
        println!("Skipped {} unrecognized record(s)", skipped);
    }
    Ok(())
}

/// Parse an import document into (accepted records, skipped count)
pub fn parse_import(contents: &str) -> Result<(Vec<Transaction>, usize)> {
    let document: Value = serde_json::from_str(contents).context("Invalid file format")?;

    let Value::Array(entries) = document else {
        bail!("Invalid file format: expected a JSON array");
    };

    let mut imported = Vec::new();
    let mut skipped = 0;
    for mut entry in entries {
        if let Value::Object(fields) = &mut entry {
            // Best-effort default for records exported without a
            // creation timestamp.
            fields
                .entry("createdAt")
                .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
        }
        match serde_json::from_value::<Transaction>(entry) {
            Ok(tx) => imported.push(tx),
            Err(_) => skipped += 1,
        }
    }

    Ok((imported, skipped))
}
