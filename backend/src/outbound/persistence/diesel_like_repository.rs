//! PostgreSQL-backed `LikeRepository` implementation using Diesel ORM.
//!
//! Inserts rely on the `likes_product_user_key` unique constraint: a second
//! insert of the same pair is skipped by `ON CONFLICT DO NOTHING` and reports
//! zero affected rows. Foreign key violations surface as
//! [`LikeRepositoryError::MissingReference`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LikeRepository, LikeRepositoryError};
use crate::domain::{Like, ProductId, UserId};

use super::diesel_basic_error_mapping::{
    map_basic_pool_error, map_diesel_error_with_foreign_keys,
};
use super::models::{LikeRow, NewLikeRow};
use super::pool::{DbPool, PoolError};
use super::schema::likes;

/// Diesel-backed implementation of the like repository port.
#[derive(Clone)]
pub struct DieselLikeRepository {
    pool: DbPool,
}

impl DieselLikeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LikeRepositoryError {
    map_basic_pool_error(error, LikeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> LikeRepositoryError {
    map_diesel_error_with_foreign_keys(
        error,
        LikeRepositoryError::query,
        LikeRepositoryError::connection,
        LikeRepositoryError::missing_reference,
    )
}

#[async_trait]
impl LikeRepository for DieselLikeRepository {
    async fn insert(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<usize, LikeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewLikeRow {
            product_id: product_id.get(),
            user_id: user_id.get(),
        };

        diesel::insert_into(likes::table)
            .values(&new_row)
            .on_conflict((likes::product_id, likes::user_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<Option<Like>, LikeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = likes::table
            .filter(likes::product_id.eq(product_id.get()))
            .filter(likes::user_id.eq(user_id.get()))
            .select(LikeRow::as_select())
            .first::<LikeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(LikeRow::into_domain))
    }

    async fn delete(
        &self,
        product_id: ProductId,
        user_id: UserId,
    ) -> Result<usize, LikeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            likes::table
                .filter(likes::product_id.eq(product_id.get()))
                .filter(likes::user_id.eq(user_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}
