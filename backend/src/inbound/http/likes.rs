//! Like management endpoints.
//!
//! ```text
//! POST   /api/products/likes/{productId}/{userId}
//! GET    /api/products/likes/{productId}/{userId}
//! DELETE /api/products/likes/{productId}/{userId}
//! ```
//!
//! POST and DELETE answer `200` with an empty body. Re-adding an existing
//! like and deleting a missing one both succeed.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;

use crate::domain::{ProductId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::products::LikeResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Raw path segments identifying a like.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePath {
    product_id: String,
    user_id: String,
}

impl LikePath {
    fn parse(self) -> ApiResult<(ProductId, UserId)> {
        Ok((
            parse_id(&self.product_id, "productId")?,
            parse_id(&self.user_id, "userId")?,
        ))
    }
}

/// Record that a user likes a product.
#[utoipa::path(
    post,
    path = "/api/products/likes/{productId}/{userId}",
    params(
        ("productId" = i64, Path, description = "Product identifier"),
        ("userId" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Like stored or already present"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Product or user does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["likes"],
    operation_id = "addLike"
)]
#[post("/products/likes/{productId}/{userId}")]
pub async fn add_like(
    state: web::Data<HttpState>,
    path: web::Path<LikePath>,
) -> ApiResult<HttpResponse> {
    let (product_id, user_id) = path.into_inner().parse()?;
    let inserted = state.like_command.add_like(product_id, user_id).await?;
    tracing::info!(%product_id, %user_id, inserted, "like added");
    Ok(HttpResponse::Ok().finish())
}

/// Fetch the like of a user on a product.
#[utoipa::path(
    get,
    path = "/api/products/likes/{productId}/{userId}",
    params(
        ("productId" = i64, Path, description = "Product identifier"),
        ("userId" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Like", body = LikeResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (
            status = 404,
            description = "Does not exist a result with this specifications",
            body = ErrorSchema
        ),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["likes"],
    operation_id = "getLike"
)]
#[get("/products/likes/{productId}/{userId}")]
pub async fn get_like(
    state: web::Data<HttpState>,
    path: web::Path<LikePath>,
) -> ApiResult<web::Json<LikeResponse>> {
    let (product_id, user_id) = path.into_inner().parse()?;
    let like = state.like_query.get_like(product_id, user_id).await?;
    Ok(web::Json(LikeResponse::from(like)))
}

/// Remove the like of a user on a product.
#[utoipa::path(
    delete,
    path = "/api/products/likes/{productId}/{userId}",
    params(
        ("productId" = i64, Path, description = "Product identifier"),
        ("userId" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Like removed or already absent"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["likes"],
    operation_id = "deleteLike"
)]
#[delete("/products/likes/{productId}/{userId}")]
pub async fn delete_like(
    state: web::Data<HttpState>,
    path: web::Path<LikePath>,
) -> ApiResult<HttpResponse> {
    let (product_id, user_id) = path.into_inner().parse()?;
    let removed = state.like_command.delete_like(product_id, user_id).await?;
    tracing::info!(%product_id, %user_id, removed, "like deleted");
    Ok(HttpResponse::Ok().finish())
}
