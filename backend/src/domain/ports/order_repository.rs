//! Driven port for orders.

use async_trait::async_trait;

use crate::domain::{Order, OrderId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "order repository query failed: {message}",
    }
}

/// Port for order lookups. Orders are returned with their line items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch an order by identifier.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError>;

    /// Fetch the orders placed by `user_id`, ordered by id.
    async fn find_all_by_user_id(&self, user_id: UserId)
    -> Result<Vec<Order>, OrderRepositoryError>;
}
