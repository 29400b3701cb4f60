//! preview-orders: run the fixed order-join query against `ecommerce.db`
//! and print the first 20 rows as an aligned table.

use anyhow::Result;
use ecomsynth_core::preview;
use ecomsynth_core::store::{DatasetStore, DB_FILE};

fn main() -> Result<()> {
    env_logger::init();

    let store = DatasetStore::open(DB_FILE)?;
    let rows = store.order_join_preview()?;
    print!("{}", preview::render_table(&rows));
    Ok(())
}
