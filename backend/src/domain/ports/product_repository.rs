//! Driven port for reading products and their likes.

use async_trait::async_trait;

use crate::domain::{Product, ProductId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "product repository query failed: {message}",
    }
}

/// Port for product lookups.
///
/// Every returned [`Product`] is fully hydrated with its categories,
/// configurations and likes. Lists are ordered by product id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by identifier.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Whether a product row exists, without hydrating it.
    async fn exists(&self, id: ProductId) -> Result<bool, ProductRepositoryError>;

    /// Fetch every product.
    async fn find_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch products whose type equals `product_type` exactly.
    async fn find_all_by_type(
        &self,
        product_type: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch products whose name contains `needle`, ignoring case.
    ///
    /// SQL wildcard characters in `needle` match literally.
    async fn find_by_name_containing_ignore_case(
        &self,
        needle: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch the products liked by `user_id`.
    async fn find_all_liked_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Product>, ProductRepositoryError>;
}
