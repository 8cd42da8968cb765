//! Client-facing messages for missing resources.
//!
//! These strings are part of the public API contract; clients match on them.

/// Product lookup by id found nothing.
pub const PRODUCT_NOT_FOUND: &str = "The product does not exist";
/// A user-scoped query named an unknown user.
pub const USER_NOT_FOUND: &str = "The user does not exist";
/// Like point lookup found no row for the product/user pair.
pub const LIKE_NOT_FOUND: &str = "Does not exist a result with this specifications";
/// Order lookup by id found nothing.
pub const ORDER_NOT_FOUND: &str = "The order does not exist";
/// Size lookup by id found nothing.
pub const SIZE_NOT_FOUND: &str = "The size does not exist";
