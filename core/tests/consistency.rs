//! Cross-entity arithmetic and referential invariants of a generated
//! dataset. These are the properties the dataset exists to guarantee.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveDateTime};
use ecomsynth_core::money::round2;
use ecomsynth_core::order_items::DISCOUNT_RATES;
use ecomsynth_core::{config::GenConfig, dataset::Dataset};

const EPS: f64 = 1e-9;

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn dataset() -> Dataset {
    let mut config = GenConfig::with_anchor(anchor());
    config.num_customers = 120;
    config.num_products = 80;
    config.num_orders = 150;
    config.order_item_target = 180;
    Dataset::generate(&config).expect("generate dataset")
}

#[test]
fn order_totals_equal_subtotal_plus_shipping() {
    let ds = dataset();
    for order in &ds.orders {
        let expected = round2(order.order_subtotal + order.shipping_cost);
        assert!(
            (order.order_total - expected).abs() < EPS,
            "order {}: total {} != subtotal {} + shipping {}",
            order.order_id,
            order.order_total,
            order.order_subtotal,
            order.shipping_cost
        );
    }
}

#[test]
fn order_subtotals_equal_sum_of_line_totals() {
    let ds = dataset();
    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for item in &ds.order_items {
        *sums.entry(item.order_id).or_insert(0.0) += item.line_total;
    }
    for order in &ds.orders {
        let expected = round2(sums.get(&order.order_id).copied().unwrap_or(0.0));
        assert!(
            (order.order_subtotal - expected).abs() < EPS,
            "order {}: subtotal {} != sum of line totals {}",
            order.order_id,
            order.order_subtotal,
            expected
        );
    }
}

#[test]
fn line_totals_follow_the_discount_rule() {
    let ds = dataset();
    assert!(!ds.order_items.is_empty());
    for item in &ds.order_items {
        let rate_matches = DISCOUNT_RATES
            .iter()
            .any(|rate| (item.discount - round2(rate * item.unit_price)).abs() < EPS);
        assert!(
            rate_matches,
            "item {}: discount {} matches no rate of unit price {}",
            item.order_item_id, item.discount, item.unit_price
        );

        let expected = round2((item.unit_price - item.discount) * item.quantity as f64);
        assert!(
            (item.line_total - expected).abs() < EPS,
            "item {}: line total {} != ({} - {}) * {}",
            item.order_item_id,
            item.line_total,
            item.unit_price,
            item.discount,
            item.quantity
        );
        assert!((1..=5).contains(&item.quantity));
    }
}

#[test]
fn product_cost_never_exceeds_price() {
    let ds = dataset();
    for product in &ds.products {
        assert!(
            product.cost <= product.price,
            "product {}: cost {} > price {}",
            product.product_id,
            product.cost,
            product.price
        );
        assert!(product.price >= 5.0 && product.price <= 500.0);
    }
}

#[test]
fn payment_amounts_follow_the_status_rule() {
    let ds = dataset();
    assert_eq!(ds.payments.len(), ds.orders.len(), "one payment per order");
    for payment in &ds.payments {
        let order = &ds.orders[(payment.order_id - 1) as usize];
        assert_eq!(order.order_id, payment.order_id);
        assert_eq!(
            order.customer_id, payment.customer_id,
            "payment {} carries a different customer than its order",
            payment.payment_id
        );

        let expected = match payment.status.as_str() {
            "Completed" => order.order_total,
            "Refunded" => round2(-order.order_total),
            "Pending" => round2(order.order_total * 0.5),
            "Failed" => 0.0,
            other => panic!("unexpected payment status {other}"),
        };
        assert!(
            (payment.payment_amount - expected).abs() < EPS,
            "payment {}: amount {} != expected {} for status {}",
            payment.payment_id,
            payment.payment_amount,
            expected,
            payment.status
        );

        assert!(payment.payment_date >= order.order_date);
        assert!(payment.payment_date <= order.order_date + chrono::Duration::days(5));
        assert!(payment.transaction_id.starts_with("TXN-"));
    }
}

#[test]
fn ids_are_dense_from_one_for_every_entity() {
    let ds = dataset();
    assert!(ds
        .customers
        .iter()
        .enumerate()
        .all(|(i, c)| c.customer_id == i as u32 + 1));
    assert!(ds
        .products
        .iter()
        .enumerate()
        .all(|(i, p)| p.product_id == i as u32 + 1));
    assert!(ds
        .orders
        .iter()
        .enumerate()
        .all(|(i, o)| o.order_id == i as u32 + 1));
    assert!(ds
        .order_items
        .iter()
        .enumerate()
        .all(|(i, oi)| oi.order_item_id == i as u32 + 1));
    assert!(ds
        .payments
        .iter()
        .enumerate()
        .all(|(i, p)| p.payment_id == i as u32 + 1));
}

#[test]
fn items_reference_existing_orders_and_products() {
    let ds = dataset();
    let order_ids: BTreeSet<u32> = ds.orders.iter().map(|o| o.order_id).collect();
    let product_ids: BTreeSet<u32> = ds.products.iter().map(|p| p.product_id).collect();
    for item in &ds.order_items {
        assert!(order_ids.contains(&item.order_id));
        assert!(product_ids.contains(&item.product_id));
    }
}

#[test]
fn orders_reference_existing_customers() {
    let ds = dataset();
    let customer_ids: BTreeSet<u32> = ds.customers.iter().map(|c| c.customer_id).collect();
    for order in &ds.orders {
        assert!(customer_ids.contains(&order.customer_id));
        assert!(order.shipping_cost >= 0.0 && order.shipping_cost <= 25.0);
        assert_eq!(order.currency, "USD");
    }
}

#[test]
fn loyalty_scores_stay_in_range() {
    let ds = dataset();
    for customer in &ds.customers {
        assert!(
            (0.0..=100.0).contains(&customer.loyalty_score),
            "customer {}: loyalty {} out of range",
            customer.customer_id,
            customer.loyalty_score
        );
    }
}
