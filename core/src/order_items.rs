use std::collections::BTreeMap;

use serde::Serialize;

use crate::csv_out::ser;
use crate::money::round2;
use crate::orders::OrderRecord;
use crate::products::ProductRecord;
use crate::rng::StageRng;
use crate::types::{OrderId, OrderItemId, ProductId};

pub const DISCOUNT_RATES: [f64; 4] = [0.0, 0.05, 0.10, 0.15];

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemRecord {
    pub order_item_id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(serialize_with = "ser::money")]
    pub unit_price: f64,
    #[serde(serialize_with = "ser::money")]
    pub discount: f64,
    #[serde(serialize_with = "ser::money")]
    pub line_total: f64,
}

/// Generate order items, iterating orders in order and assigning each 1-4
/// items, until the global `target_count` is reached.
///
/// The cap is an approximate target: the 1-4 draw happens before the cap
/// check, and generation stops mid-order once the running id passes the
/// target, so the tail order's item count is truncated.
///
/// Also accumulates each order's subtotal as a side output, keyed by
/// order id; orders that receive no items have no entry.
pub fn generate_order_items(
    orders: &[OrderRecord],
    products: &[ProductRecord],
    target_count: usize,
    rng: &mut StageRng,
) -> (Vec<OrderItemRecord>, BTreeMap<OrderId, f64>) {
    let mut items = Vec::with_capacity(target_count);
    let mut subtotals: BTreeMap<OrderId, f64> = BTreeMap::new();
    let mut next_id: usize = 1;

    for order in orders {
        let num_items = rng.int_in(1, 4);
        for _ in 0..num_items {
            if next_id > target_count {
                break;
            }
            let product = rng.pick(products);
            let quantity = rng.int_in(1, 5) as u32;
            let unit_price = round2(product.price * rng.uniform(0.9, 1.1));
            let discount_rate = *rng.pick(&DISCOUNT_RATES);
            let discount = round2(discount_rate * unit_price);
            let line_total = round2((unit_price - discount) * quantity as f64);

            items.push(OrderItemRecord {
                order_item_id: next_id as OrderItemId,
                order_id: order.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
                discount,
                line_total,
            });
            *subtotals.entry(order.order_id).or_insert(0.0) += line_total;
            next_id += 1;
        }
        if next_id > target_count {
            break;
        }
    }
    (items, subtotals)
}
