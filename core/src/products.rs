use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::csv_out::ser;
use crate::dates::random_date_within;
use crate::money::round2;
use crate::rng::StageRng;
use crate::synth::Synth;
use crate::types::ProductId;

pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Home & Kitchen",
    "Apparel",
    "Health & Beauty",
    "Sports & Outdoors",
    "Books",
    "Toys & Games",
];

/// Brands are drawn from a pool of 20 synthetic company names per run.
pub const BRAND_POOL_SIZE: usize = 20;

/// Catalog dates fall within the last three years of the anchor.
pub const CREATED_WINDOW_DAYS: i64 = 3 * 365;

#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub sku: String,
    #[serde(serialize_with = "ser::money")]
    pub price: f64,
    #[serde(serialize_with = "ser::money")]
    pub cost: f64,
    pub stock_quantity: u32,
    pub created_at: NaiveDate,
}

/// Generate `count` products with dense ids 1..=count.
///
/// cost = price * uniform[0.4, 0.8], so cost never exceeds price.
pub fn generate_products(
    count: usize,
    anchor: NaiveDateTime,
    rng: &mut StageRng,
) -> Vec<ProductRecord> {
    let brands: Vec<String> = (0..BRAND_POOL_SIZE)
        .map(|_| Synth::company_name(rng))
        .collect();

    let mut products = Vec::with_capacity(count);
    for product_id in 1..=count as ProductId {
        let price = round2(rng.uniform(5.0, 500.0));
        let cost = round2(price * rng.uniform(0.4, 0.8));

        products.push(ProductRecord {
            product_id,
            name: Synth::product_name(rng),
            category: rng.pick(&CATEGORIES).to_string(),
            brand: rng.pick(&brands).clone(),
            sku: format!("SKU-{product_id:05}"),
            price,
            cost,
            stock_quantity: rng.int_in(0, 1000) as u32,
            created_at: random_date_within(anchor.date(), CREATED_WINDOW_DAYS, rng),
        });
    }
    products
}
