//! Frame size domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::not_found::SIZE_NOT_FOUND;
use crate::domain::ports::{SizeQuery, SizeRepository, SizeRepositoryError};
use crate::domain::{Error, Size, SizeId};

fn map_repository_error(error: SizeRepositoryError) -> Error {
    match error {
        SizeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("size repository unavailable: {message}"))
        }
        SizeRepositoryError::Query { message } => {
            Error::internal(format!("size repository error: {message}"))
        }
    }
}

/// Size service implementing the size driving port.
#[derive(Clone)]
pub struct SizeService<S> {
    size_repo: Arc<S>,
}

impl<S> SizeService<S> {
    pub fn new(size_repo: Arc<S>) -> Self {
        Self { size_repo }
    }
}

#[async_trait]
impl<S> SizeQuery for SizeService<S>
where
    S: SizeRepository,
{
    async fn find_all(&self) -> Result<Vec<Size>, Error> {
        self.size_repo.find_all().await.map_err(map_repository_error)
    }

    async fn find_by_id(&self, id: SizeId) -> Result<Size, Error> {
        self.size_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(SIZE_NOT_FOUND))
    }
}
