//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! /api/products/...          catalogue reads and likes
//! /api/orders/...            order lookups
//! /api/sizes/...             frame sizes
//! /health/{ready,live}       orchestration probes
//! ```

pub mod error;
pub mod health;
pub mod likes;
pub mod orders;
pub mod products;
pub mod schemas;
pub mod sizes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api` route on `cfg`.
///
/// Literal segments (`type`, `search`, `favourites`, `likes`) are registered
/// before `/products/{id}` so they never reach the id parser.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(products::list_products)
        .service(products::list_products_by_type)
        .service(products::search_products)
        .service(products::list_favourites)
        .service(likes::add_like)
        .service(likes::get_like)
        .service(likes::delete_like)
        .service(products::get_product)
        .service(orders::list_user_orders)
        .service(orders::get_order)
        .service(sizes::list_sizes)
        .service(sizes::get_size);
}
