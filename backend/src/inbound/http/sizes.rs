//! Frame size endpoints.
//!
//! ```text
//! GET /api/sizes
//! GET /api/sizes/{id}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Size, SizeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::products::ConfigurationResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Response payload for a frame size.
///
/// `configurations` is only populated when a single size is fetched.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SizeResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "M")]
    pub size: String,
    pub configurations: Vec<ConfigurationResponse>,
}

impl From<Size> for SizeResponse {
    fn from(value: Size) -> Self {
        Self {
            id: value.id.get(),
            size: value.size,
            configurations: value.configurations.into_iter().map(Into::into).collect(),
        }
    }
}

/// List every frame size.
#[utoipa::path(
    get,
    path = "/api/sizes",
    responses(
        (status = 200, description = "Sizes ordered by id", body = [SizeResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "listSizes"
)]
#[get("/sizes")]
pub async fn list_sizes(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SizeResponse>>> {
    let sizes = state.sizes.find_all().await?;
    Ok(web::Json(sizes.into_iter().map(SizeResponse::from).collect()))
}

/// Fetch one frame size with its configurations.
#[utoipa::path(
    get,
    path = "/api/sizes/{id}",
    params(("id" = i64, Path, description = "Size identifier")),
    responses(
        (status = 200, description = "Size", body = SizeResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "The size does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "getSize"
)]
#[get("/sizes/{id}")]
pub async fn get_size(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SizeResponse>> {
    let id: SizeId = parse_id(&path.into_inner(), "id")?;
    let size = state.sizes.find_by_id(id).await?;
    Ok(web::Json(SizeResponse::from(size)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::test_app;

    #[actix_web::test]
    async fn list_sizes_returns_labels() {
        let app = actix_test::init_service(test_app(HttpStatePorts::fixtures())).await;
        let request = actix_test::TestRequest::get().uri("/api/sizes").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(
            body,
            json!([
                {"id": 1, "size": "M", "configurations": []},
                {"id": 2, "size": "S", "configurations": []}
            ])
        );
    }

    #[actix_web::test]
    async fn get_size_reports_missing_size() {
        let app = actix_test::init_service(test_app(HttpStatePorts::fixtures())).await;
        let request = actix_test::TestRequest::get().uri("/api/sizes/5").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "The size does not exist");
    }
}
