//! Resolve the client address of each request

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use folio_models::ClientIp;
use tracing::{debug, error, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |mut request: Request, next: Next| {
            let client_ip = client_ip(&request, real_ip_config.as_deref());
            request.extensions_mut().insert(client_ip);
            next.run(request)
        }))
    }
}

fn client_ip(request: &Request, real_ip_config: Option<&RestServerRealIpConfig>) -> ClientIp {
    let Some(connect_ip) = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
    else {
        return ClientIp(None);
    };

    let Some(RestServerRealIpConfig { header, set_from }) = real_ip_config else {
        return ClientIp(Some(connect_ip));
    };

    let header_value = request.headers().get(header);

    if *set_from != connect_ip {
        if let Some(header_value) = header_value {
            debug!(%connect_ip, ?header_value, "ignoring real ip header value from untrusted source");
        }
        return ClientIp(Some(connect_ip));
    }

    let Some(header_value) = header_value else {
        warn!(%connect_ip, "real ip header not found");
        return ClientIp(Some(connect_ip));
    };

    let Some(real_ip) = header_value
        .to_str()
        .ok()
        .and_then(|real_ip| real_ip.parse().ok())
    else {
        error!(%connect_ip, ?header_value, "failed to parse real ip header value");
        return ClientIp(Some(connect_ip));
    };

    ClientIp(Some(real_ip))
}
