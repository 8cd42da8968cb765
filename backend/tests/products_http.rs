//! End-to-end HTTP tests: actix handlers, services and Diesel adapters over
//! a freshly cloned catalogue database.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::{App, test as actix_test, web};
use bikes::Trace;
use bikes::domain::ports::{LikeCommand, LikeQuery};
use bikes::domain::{LikeService, OrderService, ProductService, SizeService};
use bikes::inbound::http::configure_api;
use bikes::inbound::http::state::{HttpState, HttpStatePorts};
use bikes::outbound::persistence::{
    DbPool, DieselLikeRepository, DieselOrderRepository, DieselProductRepository,
    DieselSizeRepository, DieselUserRepository, PoolConfig,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

mod support;

use support::{CatalogueDatabase, handle_cluster_setup_failure, provision_catalogue_database};

const DESCRIPTION: &str = "Bianchi Methanol FS es la joya de doble suspensión de Bianchi. Una btt que te permitirá subir como un cohete y bajar como un rayo, gracias a su geometría renovada y su carbono CV que absorve el 80% de las vibraciones.";

fn ports(pool: &DbPool) -> HttpStatePorts {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let products = Arc::new(DieselProductRepository::new(pool.clone()));
    let likes = Arc::new(LikeService::new(
        Arc::new(DieselLikeRepository::new(pool.clone())),
        products.clone(),
        users.clone(),
    ));
    HttpStatePorts {
        products: Arc::new(ProductService::new(products, users)),
        like_command: likes.clone() as Arc<dyn LikeCommand>,
        like_query: likes as Arc<dyn LikeQuery>,
        orders: Arc::new(OrderService::new(Arc::new(DieselOrderRepository::new(
            pool.clone(),
        )))),
        sizes: Arc::new(SizeService::new(Arc::new(DieselSizeRepository::new(
            pool.clone(),
        )))),
    }
}

fn product(
    id: i64,
    name: &str,
    product_type: &str,
    price: i64,
    title: &str,
    likes: Value,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": product_type,
        "price": price,
        "discount": 0,
        "title": title,
        "description": DESCRIPTION,
        "categories": [],
        "configurations": [],
        "likes": likes,
    })
}

fn seeded_products() -> Vec<Value> {
    vec![
        product(
            1,
            "Methanol CV FS 9.3 XT",
            "road",
            4707,
            "ULTIMATE CROSS-COUNTRY RACE BIKE",
            json!([{ "id": 1, "userId": 1, "productId": 1 }]),
        ),
        product(
            2,
            "Methanol CV FS 9.2 XTR",
            "mtb",
            6195,
            "ULTIMATE CROSS-COUNTRY RACE BIKE",
            json!([{ "id": 2, "userId": 1, "productId": 2 }]),
        ),
        product(
            3,
            "Methanol CV FS 9.1 XX1",
            "mtb",
            9932,
            "ULTIMATE CROS-COUNTRY RACE BIKE",
            json!([{ "id": 3, "userId": 2, "productId": 3 }]),
        ),
    ]
}

#[fixture]
fn database() -> Option<CatalogueDatabase> {
    match provision_catalogue_database() {
        Ok(database) => Some(database),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

/// Run `requests` in order against a fresh app, returning status and body.
fn exchange(
    database: &CatalogueDatabase,
    requests: Vec<(Method, &str)>,
) -> Vec<(StatusCode, Value)> {
    let url = database.url().to_owned();
    let owned: Vec<(Method, String)> = requests
        .into_iter()
        .map(|(method, uri)| (method, uri.to_owned()))
        .collect();

    actix_web::rt::System::new().block_on(async move {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
            .await
            .expect("pool builds");
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(ports(&pool))))
                .wrap(Trace)
                .service(web::scope("/api").configure(configure_api)),
        )
        .await;

        let mut results = Vec::with_capacity(owned.len());
        for (method, uri) in owned {
            let req = actix_test::TestRequest::default()
                .method(method)
                .uri(&uri)
                .to_request();
            let res = actix_test::call_service(&app, req).await;
            let status = res.status();
            let bytes = actix_test::read_body(res).await;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON body")
            };
            results.push((status, body));
        }
        results
    })
}

fn get(database: &CatalogueDatabase, uri: &str) -> (StatusCode, Value) {
    exchange(database, vec![(Method::GET, uri)])
        .pop()
        .expect("one response")
}

#[rstest]
fn returns_product_by_id(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, "/api/products/1");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seeded_products()[0]);
}

#[rstest]
fn returns_all_products(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, "/api/products");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(seeded_products()));
}

#[rstest]
fn filters_products_by_type(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, "/api/products/type/road");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([seeded_products()[0]]));
}

#[rstest]
fn lists_favourites_of_user(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, "/api/products/favourites/1");

    let expected = seeded_products();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([expected[0], expected[1]]));
}

#[rstest]
fn searches_products_by_name_fragment(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, "/api/products/search/Meth");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(seeded_products()));
}

#[rstest]
#[case("/api/products/167", "The product does not exist")]
#[case("/api/products/favourites/198", "The user does not exist")]
#[case(
    "/api/products/likes/3/3",
    "Does not exist a result with this specifications"
)]
#[case("/api/orders/77", "The order does not exist")]
#[case("/api/sizes/9", "The size does not exist")]
fn missing_resources_return_not_found_body(
    database: Option<CatalogueDatabase>,
    #[case] uri: &str,
    #[case] message: &str,
) {
    let Some(db) = database else { return };

    let (status, body) = get(&db, uri);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": 404, "message": message }));
}

#[rstest]
fn like_lifecycle_round_trips_through_database(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let responses = exchange(
        &db,
        vec![
            (Method::GET, "/api/products/likes/3/2"),
            (Method::POST, "/api/products/likes/1/2"),
            (Method::POST, "/api/products/likes/1/2"),
            (Method::GET, "/api/products/likes/1/2"),
            (Method::DELETE, "/api/products/likes/1/2"),
            (Method::GET, "/api/products/likes/1/2"),
        ],
    );

    let statuses: Vec<StatusCode> = responses.iter().map(|(status, _)| *status).collect();
    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::NOT_FOUND,
        ]
    );
    assert_eq!(responses[0].1, json!({ "id": 3, "userId": 2, "productId": 3 }));
    assert_eq!(responses[1].1, Value::Null);
    assert_eq!(responses[3].1["productId"], 1);
    assert_eq!(responses[3].1["userId"], 2);
}

#[rstest]
#[case("/api/products/likes/99/1", "The product does not exist")]
#[case("/api/products/likes/1/99", "The user does not exist")]
fn adding_like_for_missing_reference_is_not_found(
    database: Option<CatalogueDatabase>,
    #[case] uri: &str,
    #[case] message: &str,
) {
    let Some(db) = database else { return };

    let (status, body) = exchange(&db, vec![(Method::POST, uri)])
        .pop()
        .expect("one response");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": 404, "message": message }));
}

#[rstest]
fn orders_and_sizes_are_served(database: Option<CatalogueDatabase>) {
    let Some(db) = database else { return };

    let responses = exchange(
        &db,
        vec![
            (Method::GET, "/api/orders/user/1"),
            (Method::GET, "/api/sizes"),
        ],
    );

    assert_eq!(responses[0].0, StatusCode::OK);
    assert_eq!(
        responses[0].1,
        json!([{
            "id": 1,
            "userId": 1,
            "address": "C/Muro n3",
            "price": 563.25,
            "lines": [{ "id": 1, "productId": 3, "quantity": 1 }],
        }])
    );
    assert_eq!(responses[1].0, StatusCode::OK);
    assert_eq!(
        responses[1].1,
        json!([
            { "id": 1, "size": "M", "configurations": [] },
            { "id": 2, "size": "S", "configurations": [] },
        ])
    );
}
