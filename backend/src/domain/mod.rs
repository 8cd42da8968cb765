//! Domain primitives, aggregates and services.
//!
//! Purpose: define the catalogue entities shared by the HTTP and persistence
//! layers, the ports at the hexagon's edges, and the services implementing
//! the driving ports. Domain values carry no transport or storage metadata.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Product, Like, Order, Size, User: catalogue aggregates.
//! - ProductService, LikeService, OrderService, SizeService: driving port
//!   implementations over repository ports.

pub mod error;
mod ids;
mod like;
mod like_service;
pub mod not_found;
mod order;
mod order_service;
pub mod ports;
mod product;
mod product_service;
mod size;
mod size_service;
pub mod trace_id;
mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{
    CategoryId, ConfigurationId, LikeId, OrderId, OrderLineId, ProductId, SizeId, UserId,
};
pub use self::like::Like;
pub use self::like_service::LikeService;
pub use self::order::{Order, OrderLine};
pub use self::order_service::OrderService;
pub use self::product::{BikeConfiguration, Category, Product};
pub use self::product_service::ProductService;
pub use self::size::Size;
pub use self::size_service::SizeService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use bikes::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("The product does not exist"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
