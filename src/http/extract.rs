//! Axum extractor for the resolved request origin.
//!
//! # Responsibilities
//! - Resolve host, proto and source from request parts
//! - Map the one resolution failure to a 500 response
//!
//! # Design Decisions
//! - The remote address comes from `ConnectInfo<SocketAddr>`, so the router
//!   must be served with `into_make_service_with_connect_info`
//! - A missing or malformed remote address is a deployment problem, not a
//!   client error, hence 500 rather than 400

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::origin::{resolve_origin, Origin, SourceError};

/// The origin the client saw, after accounting for forwarding proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrigin(pub Origin);

/// Rejection returned when the client source cannot be determined.
#[derive(Debug)]
pub struct OriginRejection(pub SourceError);

impl IntoResponse for OriginRejection {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "Rejecting request with unresolvable origin");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "error": self.0.to_string(),
            "code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl<S> FromRequestParts<S> for ClientOrigin
where
    S: Send + Sync,
{
    type Rejection = OriginRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_origin(&*parts).map(ClientOrigin).map_err(OriginRejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::Request;
    use std::net::SocketAddr;

    fn parts(request: Request<Body>, peer: Option<&str>) -> Parts {
        let (mut parts, _) = request.into_parts();
        if let Some(peer) = peer {
            let addr: SocketAddr = peer.parse().unwrap();
            parts.extensions.insert(ConnectInfo(addr));
        }
        parts
    }

    #[tokio::test]
    async fn resolves_from_connection() {
        let request = Request::builder()
            .uri("/")
            .header("Host", "service.internal")
            .body(Body::empty())
            .unwrap();
        let mut parts = parts(request, Some("10.1.2.3:40000"));

        let ClientOrigin(origin) = ClientOrigin::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(origin.host, "service.internal");
        assert_eq!(origin.proto, "http");
        assert_eq!(origin.source, "10.1.2.3");
    }

    #[tokio::test]
    async fn resolves_from_forwarding_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Host", "service.internal")
            .header("Forwarded", "for=192.0.2.60;proto=https;host=www.example")
            .body(Body::empty())
            .unwrap();
        let mut parts = parts(request, Some("10.1.2.3:40000"));

        let ClientOrigin(origin) = ClientOrigin::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(origin.host, "www.example");
        assert_eq!(origin.proto, "https");
        assert_eq!(origin.source, "192.0.2.60");
    }

    #[tokio::test]
    async fn rejects_without_connect_info() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let mut parts = parts(request, None);

        let rejection = ClientOrigin::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection.0, SourceError::UnparsableRemoteAddr(String::new()));

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 500);
        assert_eq!(body["error"], "could not extract the IP portion of ");
    }
}
