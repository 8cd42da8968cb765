//! Driving port for product reads.
//!
//! Inbound adapters use this port to browse and search the catalogue without
//! depending on repository details.

use async_trait::async_trait;

use crate::domain::not_found::{PRODUCT_NOT_FOUND, USER_NOT_FOUND};
use crate::domain::{Error, Product, ProductId, UserId};

use super::sample_catalogue::{sample_products, sample_users};

/// Driving port for product read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), bikes::domain::Error> {
/// use bikes::domain::ports::{FixtureProductQuery, ProductQuery};
///
/// let products = FixtureProductQuery.find_all_by_type("road").await?;
/// assert!(products.iter().all(|product| product.product_type == "road"));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Fetch one product, failing with `NotFound` when it does not exist.
    async fn find_by_id(&self, id: ProductId) -> Result<Product, Error>;

    /// List every product.
    async fn find_all(&self) -> Result<Vec<Product>, Error>;

    /// List products of exactly `product_type`.
    async fn find_all_by_type(&self, product_type: &str) -> Result<Vec<Product>, Error>;

    /// List products whose name contains `name`, ignoring case.
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Product>, Error>;

    /// List the products liked by `user_id`.
    ///
    /// Fails with `NotFound` when the user does not exist.
    async fn find_all_favourites_by_user(&self, user_id: UserId) -> Result<Vec<Product>, Error>;
}

/// Fixture implementation serving the seeded catalogue from memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductQuery;

#[async_trait]
impl ProductQuery for FixtureProductQuery {
    async fn find_by_id(&self, id: ProductId) -> Result<Product, Error> {
        sample_products()
            .into_iter()
            .find(|product| product.id == id)
            .ok_or_else(|| Error::not_found(PRODUCT_NOT_FOUND))
    }

    async fn find_all(&self) -> Result<Vec<Product>, Error> {
        Ok(sample_products())
    }

    async fn find_all_by_type(&self, product_type: &str) -> Result<Vec<Product>, Error> {
        Ok(sample_products()
            .into_iter()
            .filter(|product| product.product_type == product_type)
            .collect())
    }

    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Product>, Error> {
        let needle = name.to_lowercase();
        Ok(sample_products()
            .into_iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn find_all_favourites_by_user(&self, user_id: UserId) -> Result<Vec<Product>, Error> {
        if !sample_users().iter().any(|user| user.id == user_id) {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(sample_products()
            .into_iter()
            .filter(|product| product.is_liked_by(user_id))
            .collect())
    }
}
