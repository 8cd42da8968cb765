//! Order lookup endpoints.
//!
//! ```text
//! GET /api/orders/{id}
//! GET /api/orders/user/{userId}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Order, OrderId, OrderLine, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// One line item of an order.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub id: i64,
    pub product_id: i64,
    #[schema(example = 1)]
    pub quantity: i32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(value: OrderLine) -> Self {
        Self {
            id: value.id.get(),
            product_id: value.product_id.get(),
            quantity: value.quantity,
        }
    }
}

/// Response payload for an order.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "C/Muro n3")]
    pub address: String,
    #[schema(example = 563.25)]
    pub price: f32,
    pub lines: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        Self {
            id: value.id.get(),
            user_id: value.user_id.get(),
            address: value.address,
            price: value.price,
            lines: value.lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Fetch an order with its line items.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "The order does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{id}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<OrderResponse>> {
    let id: OrderId = parse_id(&path.into_inner(), "id")?;
    let order = state.orders.find_by_id(id).await?;
    Ok(web::Json(OrderResponse::from(order)))
}

/// List the orders placed by a user.
#[utoipa::path(
    get,
    path = "/api/orders/user/{userId}",
    params(("userId" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Orders ordered by id", body = [OrderResponse]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listUserOrders"
)]
#[get("/orders/user/{userId}")]
pub async fn list_user_orders(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<OrderResponse>>> {
    let user_id: UserId = parse_id(&path.into_inner(), "userId")?;
    let orders = state.orders.find_all_by_user_id(user_id).await?;
    Ok(web::Json(orders.into_iter().map(OrderResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::test_app;

    #[actix_web::test]
    async fn get_order_includes_lines() {
        let app = actix_test::init_service(test_app(HttpStatePorts::fixtures())).await;
        let request = actix_test::TestRequest::get().uri("/api/orders/1").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(
            body,
            json!({
                "id": 1,
                "userId": 1,
                "address": "C/Muro n3",
                "price": 563.25,
                "lines": [{"id": 1, "productId": 3, "quantity": 1}]
            })
        );
    }

    #[actix_web::test]
    async fn get_order_reports_missing_order() {
        let app = actix_test::init_service(test_app(HttpStatePorts::fixtures())).await;
        let request = actix_test::TestRequest::get().uri("/api/orders/40").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "The order does not exist");
    }

    #[actix_web::test]
    async fn user_orders_are_listed() {
        let app = actix_test::init_service(test_app(HttpStatePorts::fixtures())).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/orders/user/2")
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        let orders = body.as_array().expect("array body");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0]["userId"], 2);
    }
}
