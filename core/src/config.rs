//! Run parameters for a generation pass.

use chrono::NaiveDateTime;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_NUM_CUSTOMERS: usize = 800;
pub const DEFAULT_NUM_PRODUCTS: usize = 600;
pub const DEFAULT_NUM_ORDERS: usize = 900;
pub const DEFAULT_ORDER_ITEM_TARGET: usize = 950;

/// Parameters for one generation run.
///
/// Counts are not validated: degenerate inputs (zero customers, zero
/// products) produce degenerate output, which is acceptable for a
/// dataset generator.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Master seed for every RNG stream.
    pub seed: u64,
    /// Reference "now" all generated dates are relative to.
    pub anchor: NaiveDateTime,
    pub num_customers: usize,
    pub num_products: usize,
    pub num_orders: usize,
    /// Approximate global cap on generated order items; generation stops
    /// mid-order once the running id passes this target.
    pub order_item_target: usize,
}

impl GenConfig {
    /// Default run parameters anchored at the given datetime.
    pub fn with_anchor(anchor: NaiveDateTime) -> Self {
        Self {
            seed: DEFAULT_SEED,
            anchor,
            num_customers: DEFAULT_NUM_CUSTOMERS,
            num_products: DEFAULT_NUM_PRODUCTS,
            num_orders: DEFAULT_NUM_ORDERS,
            order_item_target: DEFAULT_ORDER_ITEM_TARGET,
        }
    }
}
