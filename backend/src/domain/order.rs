//! Orders placed by users.

use super::ids::{OrderId, OrderLineId, ProductId, UserId};

/// One product line inside an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    /// Line identifier.
    pub id: OrderLineId,
    /// Product ordered on this line.
    pub product_id: ProductId,
    /// Always positive; enforced by a table check constraint.
    pub quantity: i32,
}

/// An order with its delivery address and total.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Delivery address.
    pub address: String,
    /// Order total.
    pub price: f32,
    /// Line items ordered by identifier.
    pub lines: Vec<OrderLine>,
}
