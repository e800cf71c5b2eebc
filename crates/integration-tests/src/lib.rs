//! Integration tests for ShopHub.
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so
//! no server or network port is needed:
//!
//! ```bash
//! cargo test -p shophub-integration-tests
//! ```
//!
//! [`TestClient`] plays one browser: it remembers the session cookie the
//! storefront hands out and sends it back on every later request.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use shophub_core::Catalog;
use shophub_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// A response with its body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }

    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// One simulated visitor talking to a storefront router.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A visitor on a fresh storefront with the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default(), Catalog::builtin());
        Self {
            app: app(state),
            cookie: None,
        }
    }

    /// A second visitor on the same storefront, with no session yet.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request.expect("valid request")).await
    }

    /// Post an urlencoded form body, e.g. `product_id=1&delta=-1`.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()));
        self.send(request.expect("valid request")).await
    }

    /// Convenience: fetch `/api/cart` as JSON.
    pub async fn cart_json(&mut self) -> serde_json::Value {
        let response = self.get("/api/cart").await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
