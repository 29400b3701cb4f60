//! CSV serialization of generated datasets.
//!
//! One file per entity, header row plus one row per record, written to the
//! working directory. Money fields always print with two decimals so the
//! serialized form round-trips the cent-rounded values exactly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::DatasetResult;

pub const CUSTOMERS_CSV: &str = "customers.csv";
pub const PRODUCTS_CSV: &str = "products.csv";
pub const ORDERS_CSV: &str = "orders.csv";
pub const ORDER_ITEMS_CSV: &str = "order_items.csv";
pub const PAYMENTS_CSV: &str = "payments.csv";

/// Field serializers used by the record structs.
pub mod ser {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    /// Two-decimal money rendering ("0.00", "73.25").
    pub fn money<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.2}"))
    }

    /// Space-separated datetime ("2024-06-15 13:37:00").
    pub fn datetime<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Serialize records as CSV (header row first) into any writer.
/// Returns the number of data rows written.
pub fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> DatasetResult<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}

fn write_file<T: Serialize>(path: &Path, records: &[T]) -> DatasetResult<usize> {
    write_records(BufWriter::new(File::create(path)?), records)
}

/// Write the five entity files into `dir`. Returns (file name, row count)
/// pairs in write order for the run summary.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> DatasetResult<Vec<(&'static str, usize)>> {
    let summary = vec![
        (
            CUSTOMERS_CSV,
            write_file(&dir.join(CUSTOMERS_CSV), &dataset.customers)?,
        ),
        (
            PRODUCTS_CSV,
            write_file(&dir.join(PRODUCTS_CSV), &dataset.products)?,
        ),
        (ORDERS_CSV, write_file(&dir.join(ORDERS_CSV), &dataset.orders)?),
        (
            ORDER_ITEMS_CSV,
            write_file(&dir.join(ORDER_ITEMS_CSV), &dataset.order_items)?,
        ),
        (
            PAYMENTS_CSV,
            write_file(&dir.join(PAYMENTS_CSV), &dataset.payments)?,
        ),
    ];
    Ok(summary)
}
