//! Driving port for creating and removing likes.

use async_trait::async_trait;

use crate::domain::{Error, ProductId, UserId};

/// Driving port for like mutations.
///
/// Both operations return the number of affected rows. Re-adding an existing
/// like and deleting a missing one both succeed with `0`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeCommand: Send + Sync {
    /// Record that `user_id` likes `product_id`.
    ///
    /// Fails with `NotFound` when either side does not exist.
    async fn add_like(&self, product_id: ProductId, user_id: UserId) -> Result<usize, Error>;

    /// Remove the like of `user_id` on `product_id`.
    async fn delete_like(&self, product_id: ProductId, user_id: UserId) -> Result<usize, Error>;
}

/// Fixture implementation that accepts every mutation without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLikeCommand;

#[async_trait]
impl LikeCommand for FixtureLikeCommand {
    async fn add_like(&self, _product_id: ProductId, _user_id: UserId) -> Result<usize, Error> {
        Ok(1)
    }

    async fn delete_like(&self, _product_id: ProductId, _user_id: UserId) -> Result<usize, Error> {
        Ok(0)
    }
}
