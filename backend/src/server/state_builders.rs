//! Builders for HTTP state ports backed by Diesel repositories or fixtures.

use std::sync::Arc;

use actix_web::web;

use bikes::domain::ports::{LikeCommand, LikeQuery};
use bikes::domain::{LikeService, OrderService, ProductService, SizeService};
use bikes::inbound::http::state::{HttpState, HttpStatePorts};
use bikes::outbound::persistence::{
    DbPool, DieselLikeRepository, DieselOrderRepository, DieselProductRepository,
    DieselSizeRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Wire every driving port to its service over the shared pool.
fn build_db_ports(pool: &DbPool) -> HttpStatePorts {
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

fn select_ports<Pool>(
    pool: Option<&Pool>,
    make_ports: impl FnOnce(&Pool) -> HttpStatePorts,
) -> HttpStatePorts {
    match pool {
        Some(pool) => make_ports(pool),
        None => HttpStatePorts::fixtures(),
    }
}

/// Build the shared HTTP state from the configured pool or fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(select_ports(
        config.db_pool.as_ref(),
        build_db_ports,
    )))
}
