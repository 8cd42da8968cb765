//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureLikeCommand, FixtureLikeQuery, FixtureOrderQuery, FixtureProductQuery,
    FixtureSizeQuery, LikeCommand, LikeQuery, OrderQuery, ProductQuery, SizeQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub products: Arc<dyn ProductQuery>,
    pub like_command: Arc<dyn LikeCommand>,
    pub like_query: Arc<dyn LikeQuery>,
    pub orders: Arc<dyn OrderQuery>,
    pub sizes: Arc<dyn SizeQuery>,
}

impl HttpStatePorts {
    /// Ports answering from the in-memory seed catalogue.
    pub fn fixtures() -> Self {
        Self {
            products: Arc::new(FixtureProductQuery),
            like_command: Arc::new(FixtureLikeCommand),
            like_query: Arc::new(FixtureLikeQuery),
            orders: Arc::new(FixtureOrderQuery),
            sizes: Arc::new(FixtureSizeQuery),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductQuery>,
    pub like_command: Arc<dyn LikeCommand>,
    pub like_query: Arc<dyn LikeQuery>,
    pub orders: Arc<dyn OrderQuery>,
    pub sizes: Arc<dyn SizeQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use bikes::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::fixtures());
    /// let _products = state.products.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            products,
            like_command,
            like_query,
            orders,
            sizes,
        } = ports;
        Self {
            products,
            like_command,
            like_query,
            orders,
            sizes,
        }
    }
}
