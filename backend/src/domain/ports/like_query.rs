//! Driving port for like lookups.

use async_trait::async_trait;

use crate::domain::not_found::LIKE_NOT_FOUND;
use crate::domain::{Error, Like, ProductId, UserId};

use super::sample_catalogue::sample_products;

/// Driving port for reading a single like.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeQuery: Send + Sync {
    /// Fetch the like of `user_id` on `product_id`.
    ///
    /// Fails with `NotFound` when no such like exists.
    async fn get_like(&self, product_id: ProductId, user_id: UserId) -> Result<Like, Error>;
}

/// Fixture implementation answering from the seeded likes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLikeQuery;

#[async_trait]
impl LikeQuery for FixtureLikeQuery {
    async fn get_like(&self, product_id: ProductId, user_id: UserId) -> Result<Like, Error> {
        sample_products()
            .into_iter()
            .flat_map(|product| product.likes)
            .find(|like| like.product_id == product_id && like.user_id == user_id)
            .ok_or_else(|| Error::not_found(LIKE_NOT_FOUND))
    }
}
