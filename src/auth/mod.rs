//! HTTP Basic authentication for the admin area.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use subtle::ConstantTimeEq;

/// Challenge sent with every 401.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"Admin Area\"";

/// Body sent with every 401.
pub const UNAUTHORIZED_BODY: &str =
    "You really want to see all the gripes?\nYou're going to have to log in.";

/// The single admin credential pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Evaluate both comparisons so timing does not reveal which one failed.
        let user_ok = constant_time_compare(username, &self.username);
        let pass_ok = constant_time_compare(password, &self.password);
        user_ok & pass_ok
    }
}

/// Basic auth layer function that takes the expected credentials as a parameter.
pub async fn basic_auth_layer(
    expected: Arc<Credentials>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic);

    match provided {
        Some((username, password)) if expected.matches(&username, &password) => {
            next.run(request).await
        }
        Some((username, _)) => {
            tracing::warn!("Rejected admin login for user {:?}", username);
            unauthorized_response()
        }
        None => unauthorized_response(),
    }
}

/// Decode an `Authorization` header value of the form `Basic <base64(user:pass)>`.
pub fn parse_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Create the 401 challenge response.
fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(BASIC_CHALLENGE),
        )],
        UNAUTHORIZED_BODY,
    )
        .into_response()
}
