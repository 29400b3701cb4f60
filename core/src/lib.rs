//! ecomsynth-core: synthetic e-commerce dataset toolkit.
//!
//! Three stages, run in sequence by the binaries in `dataset-tools`:
//!   1. generate five related datasets in memory and write them to CSV,
//!   2. load each CSV into a SQLite table (overwriting same-named tables),
//!   3. run one fixed analytical join and print a bounded preview.
//!
//! All randomness is deterministic: same seed + same anchor date produce
//! byte-identical output files.

pub mod config;
pub mod csv_out;
pub mod customers;
pub mod dataset;
pub mod dates;
pub mod error;
pub mod money;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod preview;
pub mod products;
pub mod rng;
pub mod store;
pub mod synth;
pub mod types;
