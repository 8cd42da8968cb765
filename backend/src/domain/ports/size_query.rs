//! Driving port for frame size reads.

use async_trait::async_trait;

use crate::domain::not_found::SIZE_NOT_FOUND;
use crate::domain::{Error, Size, SizeId};

use super::sample_catalogue::sample_sizes;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SizeQuery: Send + Sync {
    /// List every size.
    async fn find_all(&self) -> Result<Vec<Size>, Error>;

    /// Fetch one size with its configurations.
    async fn find_by_id(&self, id: SizeId) -> Result<Size, Error>;
}

/// Fixture implementation serving the seeded sizes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSizeQuery;

#[async_trait]
impl SizeQuery for FixtureSizeQuery {
    async fn find_all(&self) -> Result<Vec<Size>, Error> {
        Ok(sample_sizes())
    }

    async fn find_by_id(&self, id: SizeId) -> Result<Size, Error> {
        sample_sizes()
            .into_iter()
            .find(|size| size.id == id)
            .ok_or_else(|| Error::not_found(SIZE_NOT_FOUND))
    }
}
