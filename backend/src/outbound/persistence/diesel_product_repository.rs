//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.
//!
//! Product rows are loaded first; categories, configurations and likes are
//! then fetched in one query each for the whole page of products and grouped
//! back onto their parents with Diesel's association helpers.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BikeConfigurationRow, CategoryRow, LikeRow, ProductCategoryRow, ProductRow};
use super::pool::{DbPool, PoolError};
use super::schema::{bike_configurations, categories, likes, products};

/// Diesel-backed implementation of the product repository port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    map_basic_pool_error(error, ProductRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    map_basic_diesel_error(
        error,
        ProductRepositoryError::query,
        ProductRepositoryError::connection,
    )
}

/// Build an `ILIKE` pattern matching `needle` anywhere, with `%`, `_` and
/// the escape character itself taken literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Attach categories, configurations and likes to `rows`, preserving order.
async fn hydrate(
    conn: &mut AsyncPgConnection,
    rows: Vec<ProductRow>,
) -> Result<Vec<Product>, ProductRepositoryError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let like_rows: Vec<LikeRow> = LikeRow::belonging_to(&rows)
        .select(LikeRow::as_select())
        .order(likes::id.asc())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let configuration_rows: Vec<BikeConfigurationRow> = BikeConfigurationRow::belonging_to(&rows)
        .select(BikeConfigurationRow::as_select())
        .order(bike_configurations::id.asc())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let category_rows: Vec<(ProductCategoryRow, CategoryRow)> =
        ProductCategoryRow::belonging_to(&rows)
            .inner_join(categories::table)
            .select((ProductCategoryRow::as_select(), CategoryRow::as_select()))
            .order(categories::id.asc())
            .load(conn)
            .await
            .map_err(map_diesel_error)?;

    let likes_by_product = like_rows.grouped_by(&rows);
    let configurations_by_product = configuration_rows.grouped_by(&rows);
    let categories_by_product = category_rows.grouped_by(&rows);

    Ok(rows
        .into_iter()
        .zip(categories_by_product)
        .zip(configurations_by_product)
        .zip(likes_by_product)
        .map(|(((row, categories), configurations), likes)| {
            let categories = categories
                .into_iter()
                .map(|(_, category)| category)
                .collect();
            row.into_domain(categories, configurations, likes)
        })
        .collect())
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = products::table
            .filter(products::id.eq(id.get()))
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(hydrate(&mut conn, vec![row]).await?.into_iter().next())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            products::table.filter(products::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        hydrate(&mut conn, rows).await
    }

    async fn find_all_by_type(
        &self,
        product_type: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .filter(products::product_type.eq(product_type))
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        hydrate(&mut conn, rows).await
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        needle: &str,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .filter(products::name.ilike(contains_pattern(needle)))
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        hydrate(&mut conn, rows).await
    }

    async fn find_all_liked_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .inner_join(likes::table)
            .filter(likes::user_id.eq(user_id.get()))
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        hydrate(&mut conn, rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Meth", "%Meth%")]
    #[case("", "%%")]
    #[case("50%", "%50\\%%")]
    #[case("XT_1", "%XT\\_1%")]
    #[case("a\\b", "%a\\\\b%")]
    fn contains_pattern_escapes_wildcards(#[case] needle: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(needle), expected);
    }
}
