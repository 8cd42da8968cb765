//! A user's like on a product.

use super::ids::{LikeId, ProductId, UserId};

/// Row of the likes join table.
///
/// At most one like exists per `(product_id, user_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Like {
    /// Like identifier.
    pub id: LikeId,
    /// User who liked the product.
    pub user_id: UserId,
    /// Liked product.
    pub product_id: ProductId,
}

impl Like {
    /// Construct a like. Argument order mirrors the table columns.
    #[must_use]
    pub const fn new(id: LikeId, user_id: UserId, product_id: ProductId) -> Self {
        Self {
            id,
            user_id,
            product_id,
        }
    }
}
