//! gen-data: generate the synthetic e-commerce dataset and write the five
//! CSV files into the working directory.
//!
//! The run is anchored at today's local midnight, so repeated runs on the
//! same day with the same seed produce byte-identical files.

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveTime};
use ecomsynth_core::{config::GenConfig, csv_out, dataset::Dataset};

fn main() -> Result<()> {
    env_logger::init();

    let anchor = Local::now().date_naive().and_time(NaiveTime::MIN);
    let config = GenConfig::with_anchor(anchor);
    log::info!(
        "generating dataset: seed={} customers={} products={} orders={} item_target={}",
        config.seed,
        config.num_customers,
        config.num_products,
        config.num_orders,
        config.order_item_target
    );

    let dataset = Dataset::generate(&config)?;
    let summary = csv_out::write_dataset(Path::new("."), &dataset)?;

    println!("Synthetic e-commerce dataset generated successfully.");
    for (file, rows) in summary {
        println!(" - {file}: {rows} rows");
    }
    Ok(())
}
