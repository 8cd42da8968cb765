//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{Order, OrderId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{OrderLineRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::{order_lines, orders};

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    map_basic_pool_error(error, OrderRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_basic_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

/// Load the line items for `rows` and assemble domain orders.
async fn with_lines(
    conn: &mut AsyncPgConnection,
    rows: Vec<OrderRow>,
) -> Result<Vec<Order>, OrderRepositoryError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let line_rows: Vec<OrderLineRow> = OrderLineRow::belonging_to(&rows)
        .select(OrderLineRow::as_select())
        .order(order_lines::id.asc())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let lines_by_order = line_rows.grouped_by(&rows);
    Ok(rows
        .into_iter()
        .zip(lines_by_order)
        .map(|(row, lines)| row.into_domain(lines))
        .collect())
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = orders::table
            .filter(orders::id.eq(id.get()))
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(with_lines(&mut conn, vec![row]).await?.into_iter().next())
    }

    async fn find_all_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .filter(orders::user_id.eq(user_id.get()))
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        with_lines(&mut conn, rows).await
    }
}
