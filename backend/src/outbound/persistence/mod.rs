//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the catalogue repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain values. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors are mapped to the port error
//!   enums; PostgreSQL detail is logged, not returned.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> Result<(), bikes::outbound::persistence::PoolError> {
//! use bikes::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bikes")).await?;
//! let products = DieselProductRepository::new(pool);
//! # let _ = products;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_like_repository;
mod diesel_order_repository;
mod diesel_product_repository;
mod diesel_size_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_like_repository::DieselLikeRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use diesel_size_repository::DieselSizeRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
