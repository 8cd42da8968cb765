//! PostgreSQL-backed `SizeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SizeRepository, SizeRepositoryError};
use crate::domain::{Size, SizeId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BikeConfigurationRow, SizeRow};
use super::pool::{DbPool, PoolError};
use super::schema::{bike_configurations, sizes};

/// Diesel-backed implementation of the size repository port.
#[derive(Clone)]
pub struct DieselSizeRepository {
    pool: DbPool,
}

impl DieselSizeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SizeRepositoryError {
    map_basic_pool_error(error, SizeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SizeRepositoryError {
    map_basic_diesel_error(
        error,
        SizeRepositoryError::query,
        SizeRepositoryError::connection,
    )
}

#[async_trait]
impl SizeRepository for DieselSizeRepository {
    async fn find_all(&self) -> Result<Vec<Size>, SizeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SizeRow> = sizes::table
            .select(SizeRow::as_select())
            .order(sizes::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_domain(Vec::new()))
            .collect())
    }

    async fn find_by_id(&self, id: SizeId) -> Result<Option<Size>, SizeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = sizes::table
            .filter(sizes::id.eq(id.get()))
            .select(SizeRow::as_select())
            .first::<SizeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let configurations: Vec<BikeConfigurationRow> = BikeConfigurationRow::belonging_to(&row)
            .select(BikeConfigurationRow::as_select())
            .order(bike_configurations::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(row.into_domain(configurations)))
    }
}
