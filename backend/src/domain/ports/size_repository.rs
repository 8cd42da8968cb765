//! Driven port for frame sizes.

use async_trait::async_trait;

use crate::domain::{Size, SizeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by size repository adapters.
    pub enum SizeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "size repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "size repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SizeRepository: Send + Sync {
    /// Fetch every size ordered by id, without configurations.
    async fn find_all(&self) -> Result<Vec<Size>, SizeRepositoryError>;

    /// Fetch a size together with the configurations using it.
    async fn find_by_id(&self, id: SizeId) -> Result<Option<Size>, SizeRepositoryError>;
}
