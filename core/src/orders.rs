use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::csv_out::ser;
use crate::dates::random_datetime_within;
use crate::error::DatasetResult;
use crate::money::round2;
use crate::rng::StageRng;
use crate::types::{CustomerId, OrderId};

/// Order dates fall within the last 730 days of the anchor.
pub const ORDER_WINDOW_DAYS: i64 = 730;

pub const ORDER_STATUS_WEIGHTS: [(&str, f64); 5] = [
    ("Pending", 0.10),
    ("Processing", 0.25),
    ("Completed", 0.50),
    ("Cancelled", 0.10),
    ("Returned", 0.05),
];

pub const SHIPPING_METHODS: [&str; 4] = ["Ground", "2-Day", "Overnight", "Pickup"];

#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    #[serde(serialize_with = "ser::datetime")]
    pub order_date: NaiveDateTime,
    pub status: String,
    pub shipping_method: String,
    #[serde(serialize_with = "ser::money")]
    pub shipping_cost: f64,
    #[serde(serialize_with = "ser::money")]
    pub order_subtotal: f64,
    #[serde(serialize_with = "ser::money")]
    pub order_total: f64,
    pub currency: String,
    pub payment_status: String,
}

/// Generate `count` orders with dense ids 1..=count, each referencing a
/// uniformly chosen existing customer. Subtotal and total stay 0.0 and
/// payment_status stays "Pending" until items exist and
/// [`attach_totals`] recomputes them.
pub fn generate_orders(
    count: usize,
    customer_ids: &[CustomerId],
    anchor: NaiveDateTime,
    rng: &mut StageRng,
) -> DatasetResult<Vec<OrderRecord>> {
    let mut orders = Vec::with_capacity(count);
    for order_id in 1..=count as OrderId {
        let order_date = random_datetime_within(anchor, ORDER_WINDOW_DAYS, 0, rng)?;

        orders.push(OrderRecord {
            order_id,
            customer_id: *rng.pick(customer_ids),
            order_date,
            status: rng.pick_weighted(&ORDER_STATUS_WEIGHTS).to_string(),
            shipping_method: rng.pick(&SHIPPING_METHODS).to_string(),
            shipping_cost: round2(rng.uniform(0.0, 25.0)),
            order_subtotal: 0.0,
            order_total: 0.0,
            currency: "USD".to_string(),
            payment_status: "Pending".to_string(),
        });
    }
    Ok(orders)
}

/// Recompute every order's totals from the accumulated per-order subtotals
/// (0.00 for orders that received no items). An order with a positive total
/// is marked "Paid" with 90% probability, otherwise stays "Pending".
pub fn attach_totals(
    orders: &mut [OrderRecord],
    subtotals: &BTreeMap<OrderId, f64>,
    rng: &mut StageRng,
) {
    for order in orders.iter_mut() {
        let subtotal = round2(subtotals.get(&order.order_id).copied().unwrap_or(0.0));
        let total = round2(subtotal + order.shipping_cost);
        order.order_subtotal = subtotal;
        order.order_total = total;
        order.payment_status = if total > 0.0 && rng.chance(0.90) {
            "Paid"
        } else {
            "Pending"
        }
        .to_string();
    }
}
