//! Order lookup domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::not_found::ORDER_NOT_FOUND;
use crate::domain::ports::{OrderQuery, OrderRepository, OrderRepositoryError};
use crate::domain::{Error, Order, OrderId, UserId};

fn map_repository_error(error: OrderRepositoryError) -> Error {
    match error {
        OrderRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("order repository unavailable: {message}"))
        }
        OrderRepositoryError::Query { message } => {
            Error::internal(format!("order repository error: {message}"))
        }
    }
}

/// Order service implementing the order driving port.
#[derive(Clone)]
pub struct OrderService<O> {
    order_repo: Arc<O>,
}

impl<O> OrderService<O> {
    /// Create a new service with the order repository.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }
}

#[async_trait]
impl<O> OrderQuery for OrderService<O>
where
    O: OrderRepository,
{
    async fn find_by_id(&self, id: OrderId) -> Result<Order, Error> {
        self.order_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(ORDER_NOT_FOUND))
    }

    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        self.order_repo
            .find_all_by_user_id(user_id)
            .await
            .map_err(map_repository_error)
    }
}
