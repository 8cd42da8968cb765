//! Product catalogue domain service.
//!
//! Implements [`ProductQuery`] over the product and user repositories. The
//! user repository is consulted only to tell an unknown user apart from a
//! user without favourites.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::not_found::{PRODUCT_NOT_FOUND, USER_NOT_FOUND};
use crate::domain::ports::{
    ProductQuery, ProductRepository, ProductRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, Product, ProductId, UserId};

fn map_repository_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Product service implementing the product driving port.
#[derive(Clone)]
pub struct ProductService<P, U> {
    product_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P, U> ProductService<P, U> {
    /// Create a new service with the given repositories.
    pub fn new(product_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            product_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl<P, U> ProductQuery for ProductService<P, U>
where
    P: ProductRepository,
    U: UserRepository,
{
    async fn find_by_id(&self, id: ProductId) -> Result<Product, Error> {
        self.product_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(PRODUCT_NOT_FOUND))
    }

    async fn find_all(&self) -> Result<Vec<Product>, Error> {
        self.product_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_all_by_type(&self, product_type: &str) -> Result<Vec<Product>, Error> {
        self.product_repo
            .find_all_by_type(product_type)
            .await
            .map_err(map_repository_error)
    }

    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Product>, Error> {
        self.product_repo
            .find_by_name_containing_ignore_case(name)
            .await
            .map_err(map_repository_error)
    }

    async fn find_all_favourites_by_user(&self, user_id: UserId) -> Result<Vec<Product>, Error> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;

        self.product_repo
            .find_all_liked_by_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
