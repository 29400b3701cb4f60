//! Shared primitive types used across the dataset toolkit.

/// Dense 1..N identifier for a generated customer.
pub type CustomerId = u32;

/// Dense 1..N identifier for a generated product.
pub type ProductId = u32;

/// Dense 1..N identifier for a generated order.
pub type OrderId = u32;

/// Dense 1..N identifier for a generated order item.
pub type OrderItemId = u32;

/// Dense 1..N identifier for a generated payment.
pub type PaymentId = u32;
