//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters.
//! Driving ports (`*Query`, `*Command`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod like_command;
mod like_query;
mod like_repository;
mod order_query;
mod order_repository;
mod product_query;
mod product_repository;
mod sample_catalogue;
mod size_query;
mod size_repository;
mod user_repository;

#[cfg(test)]
pub use like_command::MockLikeCommand;
pub use like_command::{FixtureLikeCommand, LikeCommand};
#[cfg(test)]
pub use like_query::MockLikeQuery;
pub use like_query::{FixtureLikeQuery, LikeQuery};
#[cfg(test)]
pub use like_repository::MockLikeRepository;
pub use like_repository::{LikeRepository, LikeRepositoryError};
#[cfg(test)]
pub use order_query::MockOrderQuery;
pub use order_query::{FixtureOrderQuery, OrderQuery};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::{FixtureProductQuery, ProductQuery};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
pub use sample_catalogue::{sample_orders, sample_products, sample_sizes, sample_users};
#[cfg(test)]
pub use size_query::MockSizeQuery;
pub use size_query::{FixtureSizeQuery, SizeQuery};
#[cfg(test)]
pub use size_repository::MockSizeRepository;
pub use size_repository::{SizeRepository, SizeRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

#[cfg(test)]
mod tests;
