// src/io/reporting.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::ExportError;
use crate::model::{Dc, Item, Store};

/// One CSV row per store slot; the slot vectors of `Store` do not fit a flat row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSlotRecord {
    pub store_id: u32,
    pub lat: f64,
    pub long: f64,
    pub cap: i64,
    pub slot: usize,
    pub item_id: u32,
    pub inventory: u64,
}

pub fn store_slot_records(stores: &[Store]) -> Vec<StoreSlotRecord> {
    stores
        .iter()
        .flat_map(|store| {
            store
                .items
                .iter()
                .zip(&store.inv)
                .enumerate()
                .map(move |(slot, (&item_id, &inventory))| StoreSlotRecord {
                    store_id: store.id,
                    lat: store.lat,
                    long: store.long,
                    cap: store.cap,
                    slot,
                    item_id,
                    inventory,
                })
        })
        .collect()
}

/// Serializes `rows` to a CSV file at `file_path`.
pub fn write_csv<T: Serialize>(file_path: &Path, rows: &[T]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!(rows = rows.len(), path = %file_path.display(), "exported csv");
    Ok(())
}

pub fn write_items(file_path: &Path, items: &[Item]) -> Result<(), ExportError> {
    write_csv(file_path, items)
}

pub fn write_stores(file_path: &Path, stores: &[Store]) -> Result<(), ExportError> {
    write_csv(file_path, &store_slot_records(stores))
}

pub fn write_dcs(file_path: &Path, dcs: &[Dc]) -> Result<(), ExportError> {
    write_csv(file_path, dcs)
}

/// Writes `items.csv`, `stores.csv` and `dcs.csv` under `out_dir`, creating it if needed.
///
/// Returns the paths written, in that order.
pub fn write_network(
    out_dir: &Path,
    items: &[Item],
    stores: &[Store],
    dcs: &[Dc],
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(out_dir)?;

    let items_path = out_dir.join("items.csv");
    let stores_path = out_dir.join("stores.csv");
    let dcs_path = out_dir.join("dcs.csv");

    write_items(&items_path, items)?;
    write_stores(&stores_path, stores)?;
    write_dcs(&dcs_path, dcs)?;

    Ok(vec![items_path, stores_path, dcs_path])
}
