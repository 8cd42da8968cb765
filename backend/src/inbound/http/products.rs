//! Product catalogue read endpoints.
//!
//! ```text
//! GET /api/products
//! GET /api/products/{id}
//! GET /api/products/type/{type}
//! GET /api/products/search/{name}
//! GET /api/products/favourites/{userId}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{BikeConfiguration, Category, Like, Product, ProductId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Category attached to a product.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

/// Product offered in a given frame size.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: i64,
    pub product_id: i64,
    pub size_id: i64,
}

impl From<BikeConfiguration> for ConfigurationResponse {
    fn from(value: BikeConfiguration) -> Self {
        Self {
            id: value.id.get(),
            product_id: value.product_id.get(),
            size_id: value.size_id.get(),
        }
    }
}

/// A user's like on a product.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    #[schema(example = 3)]
    pub id: i64,
    #[schema(example = 2)]
    pub user_id: i64,
    #[schema(example = 3)]
    pub product_id: i64,
}

impl From<Like> for LikeResponse {
    fn from(value: Like) -> Self {
        Self {
            id: value.id.get(),
            user_id: value.user_id.get(),
            product_id: value.product_id.get(),
        }
    }
}

/// Response payload for a product.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Methanol CV FS 9.3 XT")]
    pub name: String,
    /// Discipline label such as `road` or `mtb`.
    #[serde(rename = "type")]
    #[schema(example = "road")]
    pub product_type: String,
    #[schema(example = 4707)]
    pub price: i32,
    #[schema(example = 0)]
    pub discount: i32,
    pub title: String,
    pub description: String,
    pub categories: Vec<CategoryResponse>,
    pub configurations: Vec<ConfigurationResponse>,
    pub likes: Vec<LikeResponse>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            product_type: value.product_type,
            price: value.price,
            discount: value.discount,
            title: value.title,
            description: value.description,
            categories: value.categories.into_iter().map(Into::into).collect(),
            configurations: value.configurations.into_iter().map(Into::into).collect(),
            likes: value.likes.into_iter().map(Into::into).collect(),
        }
    }
}

fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

/// List every product.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products ordered by id", body = [ProductResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products.find_all().await?;
    Ok(web::Json(to_responses(products)))
}

/// Fetch a product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "The product does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProductResponse>> {
    let id: ProductId = parse_id(&path.into_inner(), "id")?;
    let product = state.products.find_by_id(id).await?;
    Ok(web::Json(ProductResponse::from(product)))
}

/// List products of one type.
#[utoipa::path(
    get,
    path = "/api/products/type/{type}",
    params(("type" = String, Path, description = "Exact product type, e.g. `road`")),
    responses(
        (status = 200, description = "Products of the given type", body = [ProductResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProductsByType"
)]
#[get("/products/type/{type}")]
pub async fn list_products_by_type(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products.find_all_by_type(&path.into_inner()).await?;
    Ok(web::Json(to_responses(products)))
}

/// Search products by name, ignoring case.
#[utoipa::path(
    get,
    path = "/api/products/search/{name}",
    params(("name" = String, Path, description = "Substring of the product name")),
    responses(
        (status = 200, description = "Matching products", body = [ProductResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "searchProducts"
)]
#[get("/products/search/{name}")]
pub async fn search_products(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products.find_all_by_name(&path.into_inner()).await?;
    Ok(web::Json(to_responses(products)))
}

/// List the products a user has liked.
#[utoipa::path(
    get,
    path = "/api/products/favourites/{userId}",
    params(("userId" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Liked products ordered by id", body = [ProductResponse]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "The user does not exist", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listFavourites"
)]
#[get("/products/favourites/{userId}")]
pub async fn list_favourites(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let user_id: UserId = parse_id(&path.into_inner(), "userId")?;
    let products = state.products.find_all_favourites_by_user(user_id).await?;
    Ok(web::Json(to_responses(products)))
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
