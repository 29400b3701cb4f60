use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::csv_out::ser;
use crate::dates::random_date_within;
use crate::money::round2;
use crate::rng::StageRng;
use crate::synth::Synth;
use crate::types::CustomerId;

/// Signup dates fall within the last five years of the anchor.
pub const SIGNUP_WINDOW_DAYS: i64 = 5 * 365;

#[derive(Debug, Clone, Serialize)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub signup_date: NaiveDate,
    #[serde(serialize_with = "ser::money")]
    pub loyalty_score: f64,
}

/// Generate `count` customers with dense ids 1..=count.
pub fn generate_customers(
    count: usize,
    anchor: NaiveDateTime,
    rng: &mut StageRng,
) -> Vec<CustomerRecord> {
    let mut customers = Vec::with_capacity(count);
    for customer_id in 1..=count as CustomerId {
        let first_name = Synth::first_name(rng).to_string();
        let last_name = Synth::last_name(rng).to_string();
        let email = Synth::email(&first_name, &last_name, rng);

        customers.push(CustomerRecord {
            customer_id,
            first_name,
            last_name,
            email,
            phone: Synth::phone(rng),
            street_address: Synth::street_address(rng),
            city: Synth::city(rng).to_string(),
            state: Synth::state_abbr(rng).to_string(),
            postal_code: Synth::postal_code(rng),
            country: "USA".to_string(),
            signup_date: random_date_within(anchor.date(), SIGNUP_WINDOW_DAYS, rng),
            loyalty_score: round2(rng.uniform(0.0, 100.0)),
        });
    }
    customers
}
