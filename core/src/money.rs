//! Cent rounding for derived money fields.
//!
//! Amounts are plain f64 rounded to two decimals at each derivation step,
//! so the stored fields satisfy the arithmetic identities exactly
//! (line_total = round((unit_price - discount) * quantity, 2), and so on).

/// Round to the nearest cent.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
