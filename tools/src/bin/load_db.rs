//! load-db: load the five generated CSV files into `ecommerce.db`,
//! overwriting any existing tables of the same names.

use std::path::Path;

use anyhow::Result;
use ecomsynth_core::store::{DatasetStore, DB_FILE};

fn main() -> Result<()> {
    env_logger::init();

    let mut store = DatasetStore::open(DB_FILE)?;
    let loaded = store.load_all(Path::new("."))?;

    for (table, rows) in &loaded {
        println!("Imported {rows:>4} rows into '{table}'.");
    }
    println!(
        "Data successfully loaded into {}",
        std::fs::canonicalize(DB_FILE)?.display()
    );
    Ok(())
}
