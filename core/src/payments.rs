use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::csv_out::ser;
use crate::money::round2;
use crate::orders::OrderRecord;
use crate::rng::StageRng;
use crate::types::{CustomerId, OrderId, PaymentId};

pub const PAYMENT_METHODS: [&str; 5] = [
    "Credit Card",
    "Debit Card",
    "PayPal",
    "Gift Card",
    "Bank Transfer",
];

pub const PAYMENT_STATUS_WEIGHTS: [(&str, f64); 4] = [
    ("Completed", 0.75),
    ("Pending", 0.10),
    ("Failed", 0.10),
    ("Refunded", 0.05),
];

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecord {
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    #[serde(serialize_with = "ser::datetime")]
    pub payment_date: NaiveDateTime,
    pub payment_method: String,
    #[serde(serialize_with = "ser::money")]
    pub payment_amount: f64,
    pub transaction_id: String,
    pub status: String,
}

/// Settlement amount for a payment in the given status: the full order
/// total when Completed, negated when Refunded, half when Pending, and
/// zero when Failed.
pub fn amount_for_status(status: &str, order_total: f64) -> f64 {
    match status {
        "Completed" => order_total,
        "Refunded" => round2(-order_total),
        "Pending" => round2(order_total * 0.5),
        _ => 0.0,
    }
}

/// Generate exactly one payment per order, carrying the order's customer
/// id. Payment dates trail the order date by 0-5 days.
pub fn generate_payments(orders: &[OrderRecord], rng: &mut StageRng) -> Vec<PaymentRecord> {
    let mut payments = Vec::with_capacity(orders.len());
    for order in orders {
        let status = rng.pick_weighted(&PAYMENT_STATUS_WEIGHTS).to_string();
        let payment_amount = amount_for_status(&status, order.order_total);

        payments.push(PaymentRecord {
            payment_id: (payments.len() + 1) as PaymentId,
            order_id: order.order_id,
            customer_id: order.customer_id,
            payment_date: order.order_date + Duration::days(rng.int_in(0, 5) as i64),
            payment_method: rng.pick(&PAYMENT_METHODS).to_string(),
            payment_amount,
            transaction_id: format!("TXN-{}", rng.int_in(10_000_000, 99_999_999)),
            status,
        });
    }
    payments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_follows_status_rule() {
        assert_eq!(amount_for_status("Completed", 120.40), 120.40);
        assert_eq!(amount_for_status("Refunded", 120.40), -120.40);
        assert_eq!(amount_for_status("Pending", 120.40), 60.20);
        assert_eq!(amount_for_status("Failed", 120.40), 0.0);
    }
}
