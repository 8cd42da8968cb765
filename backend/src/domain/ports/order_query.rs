//! Driving port for order reads.

use async_trait::async_trait;

use crate::domain::not_found::ORDER_NOT_FOUND;
use crate::domain::{Error, Order, OrderId, UserId};

use super::sample_catalogue::sample_orders;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Fetch one order, failing with `NotFound` when it does not exist.
    async fn find_by_id(&self, id: OrderId) -> Result<Order, Error>;

    /// List the orders of `user_id`; unknown users yield an empty list.
    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Order>, Error>;
}

/// Fixture implementation serving the seeded orders.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderQuery;

#[async_trait]
impl OrderQuery for FixtureOrderQuery {
    async fn find_by_id(&self, id: OrderId) -> Result<Order, Error> {
        sample_orders()
            .into_iter()
            .find(|order| order.id == id)
            .ok_or_else(|| Error::not_found(ORDER_NOT_FOUND))
    }

    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Order>, Error> {
        Ok(sample_orders()
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect())
    }
}
