//! Driven port for the likes join table.

use async_trait::async_trait;

use crate::domain::{Like, ProductId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by like repository adapters.
    pub enum LikeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "like repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "like repository query failed: {message}",
        /// The product or user referenced by the like does not exist.
        MissingReference { message: String } =>
            "like references a missing row: {message}",
    }
}

/// Port for like persistence.
///
/// Adapters must treat `(product_id, user_id)` as unique.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like and return the number of rows written.
    ///
    /// Returns `Ok(0)` when the pair already exists.
    async fn insert(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<usize, LikeRepositoryError>;

    /// Point lookup of a like.
    async fn find(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<Option<Like>, LikeRepositoryError>;

    /// Delete a like and return the number of rows removed.
    async fn delete(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<usize, LikeRepositoryError>;
}
