//! Like management domain service.
//!
//! Implements [`LikeCommand`] and [`LikeQuery`]. Adding a like validates that
//! both the product and the user exist so callers get a precise not-found
//! message instead of a foreign key failure.

use std::sync::Arc;

use async_trait::async_trait;

use super::product_service::map_user_error;
use crate::domain::not_found::{LIKE_NOT_FOUND, PRODUCT_NOT_FOUND, USER_NOT_FOUND};
use crate::domain::ports::{
    LikeCommand, LikeQuery, LikeRepository, LikeRepositoryError, ProductRepository,
    ProductRepositoryError, UserRepository,
};
use crate::domain::{Error, Like, ProductId, UserId};

/// Constraint guarding `likes.user_id`; any other violation names the product.
const USER_FOREIGN_KEY: &str = "likes_user_id_fkey";

fn map_repository_error(error: LikeRepositoryError) -> Error {
    match error {
        LikeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("like repository unavailable: {message}"))
        }
        LikeRepositoryError::Query { message } => {
            Error::internal(format!("like repository error: {message}"))
        }
        LikeRepositoryError::MissingReference { message } => {
            tracing::debug!(%message, "like insert hit a missing product or user");
            if message == USER_FOREIGN_KEY {
                Error::not_found(USER_NOT_FOUND)
            } else {
                Error::not_found(PRODUCT_NOT_FOUND)
            }
        }
    }
}

fn map_product_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

/// Like service implementing the like driving ports.
#[derive(Clone)]
pub struct LikeService<L, P, U> {
    like_repo: Arc<L>,
    product_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<L, P, U> LikeService<L, P, U> {
    /// Create a new service with the given repositories.
    pub fn new(like_repo: Arc<L>, product_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            like_repo,
            product_repo,
            user_repo,
        }
    }
}

impl<L, P, U> LikeService<L, P, U>
where
    P: ProductRepository,
    U: UserRepository,
{
    async fn ensure_references(&self, product_id: ProductId, user_id: UserId) -> Result<(), Error> {
        if !self
            .product_repo
            .exists(product_id)
            .await
            .map_err(map_product_error)?
        {
            return Err(Error::not_found(PRODUCT_NOT_FOUND));
        }
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        Ok(())
    }
}

#[async_trait]
impl<L, P, U> LikeCommand for LikeService<L, P, U>
where
    L: LikeRepository,
    P: ProductRepository,
    U: UserRepository,
{
    async fn add_like(&self, product_id: ProductId, user_id: UserId) -> Result<usize, Error> {
        self.ensure_references(product_id, user_id).await?;
        let inserted = self
            .like_repo
            .insert(product_id, user_id)
            .await
            .map_err(map_repository_error)?;
        if inserted == 0 {
            tracing::debug!(%product_id, %user_id, "like already present");
        }
        Ok(inserted)
    }

    async fn delete_like(&self, product_id: ProductId, user_id: UserId) -> Result<usize, Error> {
        self.like_repo
            .delete(product_id, user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<L, P, U> LikeQuery for LikeService<L, P, U>
where
    L: LikeRepository,
    P: ProductRepository,
    U: UserRepository,
{
    async fn get_like(&self, product_id: ProductId, user_id: UserId) -> Result<Like, Error> {
        self.like_repo
            .find(product_id, user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(LIKE_NOT_FOUND))
    }
}

#[cfg(test)]
#[path = "like_service_tests.rs"]
mod tests;
