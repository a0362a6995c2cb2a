// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session extraction middleware.

use crate::models::Session;
use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

/// Cookie holding the backend access token set by the front-end auth flow.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Middleware that requires a backend session.
///
/// The token is not verified here; the backend rejects invalid tokens and
/// row-level security scopes every query to the session's user.
pub async fn require_session(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(request.headers())
        .or_else(|| {
            jar.get(ACCESS_TOKEN_COOKIE)
                .map(|cookie| cookie.value().to_string())
        })
        .filter(|token| !token.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(Session::new(token));

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}
