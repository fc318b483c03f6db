//! Static asset serving.
//!
//! Serves the site stylesheet and script under `/assets/`, using
//! `residocs-assets` in both embedded and filesystem modes.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Router for asset serving, nested under `/assets`.
pub(crate) fn asset_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve one asset. Unknown paths are 404; the page fallback never applies
/// inside the asset namespace.
async fn serve_asset(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    // Assets live in a flat namespace; parent segments never resolve.
    if path.is_empty() || path.split('/').any(|segment| segment == "..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    if let Some(content) = residocs_assets::get(path) {
        let mime = residocs_assets::mime_for(path);
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(content.into_owned()))
            .unwrap();
    }

    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_serve_stylesheet() {
        let response = tokio_test::block_on(serve_asset(request("/docs.css")));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600"
        );
    }

    #[test]
    fn test_serve_missing_asset_is_not_found() {
        let response = tokio_test::block_on(serve_asset(request("/missing.css")));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_parent_segments_never_resolve() {
        let response = tokio_test::block_on(serve_asset(request("/../Cargo.toml")));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_asset_router_builds() {
        let _router: Router<Arc<AppState>> = asset_router();
    }
}
