//! SQLite loading layer.
//!
//! RULE: Only store.rs talks to the database.
//! Binaries and rendering call store methods — they never execute SQL
//! directly.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::csv_out;
use crate::error::{DatasetError, DatasetResult};
use crate::preview::PreviewRow;

pub const DB_FILE: &str = "ecommerce.db";

/// Table name → source CSV file, in load order.
pub const TABLE_SOURCES: [(&str, &str); 5] = [
    ("customers", csv_out::CUSTOMERS_CSV),
    ("products", csv_out::PRODUCTS_CSV),
    ("orders", csv_out::ORDERS_CSV),
    ("order_items", csv_out::ORDER_ITEMS_CSV),
    ("payments", csv_out::PAYMENTS_CSV),
];

pub struct DatasetStore {
    conn: Connection,
}

impl DatasetStore {
    /// Open (or create) the dataset database at `path`.
    /// Foreign keys stay disabled: tables load independently and no
    /// ordering among them is enforced.
    pub fn open<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys=OFF;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DatasetResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=OFF;")?;
        Ok(Self { conn })
    }

    /// Load all five CSVs from `dir`, each into its same-named table.
    ///
    /// Fails before touching any table when inputs are missing, naming
    /// every missing file in one error. Each table load is individually
    /// atomic; a failure partway leaves earlier tables loaded (no
    /// cross-table transaction).
    pub fn load_all(&mut self, dir: &Path) -> DatasetResult<Vec<(&'static str, usize)>> {
        let missing: Vec<String> = TABLE_SOURCES
            .iter()
            .filter(|(_, file)| !dir.join(file).exists())
            .map(|(_, file)| (*file).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingInputs { files: missing });
        }

        let mut loaded = Vec::with_capacity(TABLE_SOURCES.len());
        for (table, file) in TABLE_SOURCES {
            let rows = self.load_csv(table, &dir.join(file))?;
            log::info!("loaded {rows} rows into '{table}'");
            loaded.push((table, rows));
        }
        Ok(loaded)
    }

    /// Materialize one CSV as `table`. Create-or-overwrite: previous
    /// contents of a same-named table are unconditionally discarded.
    /// Column types are inferred from the data.
    pub fn load_csv(&mut self, table: &str, path: &Path) -> DatasetResult<usize> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        let types = infer_column_types(headers.len(), &rows);

        let columns = headers
            .iter()
            .zip(&types)
            .map(|(name, ty)| format!("\"{}\" {}", name, ty.affinity()))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; headers.len()].join(", ");

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS \"{table}\";"))?;
        tx.execute_batch(&format!("CREATE TABLE \"{table}\" ({columns});"))?;
        {
            let mut stmt =
                tx.prepare(&format!("INSERT INTO \"{table}\" VALUES ({placeholders})"))?;
            for row in &rows {
                let values = row.iter().zip(&types).map(|(raw, ty)| ty.bind(raw));
                stmt.execute(params_from_iter(values))?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn table_row_count(&self, table: &str) -> DatasetResult<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    /// The fixed analytical preview: customers joined through orders and
    /// order items to products, ordered by order then item, capped at 20
    /// rows.
    pub fn order_join_preview(&self) -> DatasetResult<Vec<PreviewRow>> {
        let mut stmt = self.conn.prepare(ORDER_JOIN_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(PreviewRow {
                customer_id: row.get(0)?,
                customer_name: row.get(1)?,
                order_id: row.get(2)?,
                order_date: row.get(3)?,
                product_name: row.get(4)?,
                quantity: row.get(5)?,
                line_subtotal: row.get(6)?,
                order_total: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

const ORDER_JOIN_QUERY: &str = "
SELECT
  c.customer_id,
  c.first_name || ' ' || c.last_name AS customer_name,
  o.order_id,
  o.order_date,
  p.name AS product_name,
  oi.quantity,
  ROUND(oi.line_total, 2) AS line_subtotal,
  ROUND(o.order_total, 2) AS order_total
FROM customers c
JOIN orders o
  ON o.customer_id = c.customer_id
JOIN order_items oi
  ON oi.order_id = o.order_id
JOIN products p
  ON p.product_id = oi.product_id
ORDER BY o.order_id, oi.order_item_id
LIMIT 20;
";

/// SQLite column affinity for a loaded CSV column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    fn affinity(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }

    fn bind(self, raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        match self {
            ColumnType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::Text(raw.to_string())),
            ColumnType::Real => raw
                .parse::<f64>()
                .map(Value::Real)
                .unwrap_or_else(|_| Value::Text(raw.to_string())),
            ColumnType::Text => Value::Text(raw.to_string()),
        }
    }
}

/// Narrow each column from INTEGER to REAL to TEXT as the data demands.
/// Empty cells are typeless and never widen a column.
fn infer_column_types(ncols: usize, rows: &[csv::StringRecord]) -> Vec<ColumnType> {
    (0..ncols)
        .map(|col| {
            let mut ty = ColumnType::Integer;
            for row in rows {
                let raw = row.get(col).unwrap_or("");
                if raw.is_empty() {
                    continue;
                }
                ty = match ty {
                    ColumnType::Integer if raw.parse::<i64>().is_ok() => ColumnType::Integer,
                    ColumnType::Integer | ColumnType::Real if raw.parse::<f64>().is_ok() => {
                        ColumnType::Real
                    }
                    _ => ColumnType::Text,
                };
                if ty == ColumnType::Text {
                    break;
                }
            }
            ty
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn inference_narrows_integer_real_text() {
        let rows = vec![
            record(&["1", "5.00", "Ground", ""]),
            record(&["2", "3", "7", "9.5"]),
        ];
        let types = infer_column_types(4, &rows);
        assert_eq!(
            types,
            vec![
                ColumnType::Integer,
                ColumnType::Real,
                ColumnType::Text,
                ColumnType::Real
            ]
        );
    }

    #[test]
    fn empty_cells_bind_as_null() {
        assert_eq!(ColumnType::Integer.bind(""), Value::Null);
        assert_eq!(ColumnType::Integer.bind("12"), Value::Integer(12));
        assert_eq!(ColumnType::Real.bind("2.5"), Value::Real(2.5));
    }
}
