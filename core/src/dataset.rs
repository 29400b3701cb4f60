//! Dataset orchestration: the five generation stages in dependency order.
//!
//! Customers and products are independent; orders reference customers;
//! order items reference orders and products and feed the per-order
//! subtotals back into the orders; payments derive from finalized orders.

use crate::config::GenConfig;
use crate::customers::{generate_customers, CustomerRecord};
use crate::error::DatasetResult;
use crate::order_items::{generate_order_items, OrderItemRecord};
use crate::orders::{attach_totals, generate_orders, OrderRecord};
use crate::payments::{generate_payments, PaymentRecord};
use crate::products::{generate_products, ProductRecord};
use crate::rng::{RngBank, StageSlot};
use crate::types::CustomerId;

pub struct Dataset {
    pub customers: Vec<CustomerRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<OrderRecord>,
    pub order_items: Vec<OrderItemRecord>,
    pub payments: Vec<PaymentRecord>,
}

impl Dataset {
    /// Generate a full, internally consistent dataset from the run
    /// parameters. Each stage draws from its own stream of the seed bank,
    /// so a (seed, anchor) pair fully determines the output.
    pub fn generate(config: &GenConfig) -> DatasetResult<Dataset> {
        let bank = RngBank::new(config.seed);

        let mut rng = bank.for_stage(StageSlot::Customer);
        let customers = generate_customers(config.num_customers, config.anchor, &mut rng);
        log::debug!("stage customer: {} records", customers.len());

        let mut rng = bank.for_stage(StageSlot::Product);
        let products = generate_products(config.num_products, config.anchor, &mut rng);
        log::debug!("stage product: {} records", products.len());

        let customer_ids: Vec<CustomerId> = customers.iter().map(|c| c.customer_id).collect();
        let mut rng = bank.for_stage(StageSlot::Order);
        let mut orders = generate_orders(config.num_orders, &customer_ids, config.anchor, &mut rng)?;
        log::debug!("stage order: {} records", orders.len());

        let mut rng = bank.for_stage(StageSlot::OrderItem);
        let (order_items, subtotals) =
            generate_order_items(&orders, &products, config.order_item_target, &mut rng);
        log::debug!("stage order_item: {} records", order_items.len());

        let mut rng = bank.for_stage(StageSlot::Totals);
        attach_totals(&mut orders, &subtotals, &mut rng);

        let mut rng = bank.for_stage(StageSlot::Payment);
        let payments = generate_payments(&orders, &mut rng);
        log::debug!("stage payment: {} records", payments.len());

        Ok(Dataset {
            customers,
            products,
            orders,
            order_items,
            payments,
        })
    }
}
