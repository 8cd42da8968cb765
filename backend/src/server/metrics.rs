//! Prometheus middleware that degrades to a pass-through when the registry
//! could not be built.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;

/// Request metrics layer wrapped around the whole application.
///
/// Both variants produce the same boxed service type so the app builder does
/// not need to branch on whether metrics are available.
#[derive(Clone)]
pub(crate) struct MetricsLayer {
    inner: Option<Arc<PrometheusMetrics>>,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        Self {
            inner: metrics.map(Arc::new),
        }
    }
}

type BoxedService = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxedService;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(metrics) = self.inner.clone() else {
            return Box::pin(async move {
                let passthrough = service.map(ServiceResponse::map_into_boxed_body);
                Ok(boxed::service(passthrough))
            });
        };

        let transform = Compat::new((*metrics).clone()).new_transform(service);
        Box::pin(async move { Ok(boxed::service(transform.await?)) })
    }
}
