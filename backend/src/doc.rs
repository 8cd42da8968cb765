//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` endpoint, the health probes and the
//! response bodies defined in the inbound layer. Domain types stay free of
//! utoipa derives.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::orders::{OrderLineResponse, OrderResponse};
use crate::inbound::http::products::{
    CategoryResponse, ConfigurationResponse, LikeResponse, ProductResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::sizes::SizeResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bikes catalogue API",
        description = "Products, likes, orders and frame sizes of the bike shop."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::list_products_by_type,
        crate::inbound::http::products::search_products,
        crate::inbound::http::products::list_favourites,
        crate::inbound::http::likes::add_like,
        crate::inbound::http::likes::get_like,
        crate::inbound::http::likes::delete_like,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::list_user_orders,
        crate::inbound::http::sizes::list_sizes,
        crate::inbound::http::sizes::get_size,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ProductResponse,
        CategoryResponse,
        ConfigurationResponse,
        LikeResponse,
        OrderResponse,
        OrderLineResponse,
        SizeResponse
    )),
    tags(
        (name = "products", description = "Catalogue reads"),
        (name = "likes", description = "Favourite management"),
        (name = "orders", description = "Order lookups"),
        (name = "sizes", description = "Frame sizes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
