// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category field click handling for server-driven pages.
//!
//! Client storage is carried as a cookie; navigation is returned in the body.

use crate::browser::{ClientStorage, Navigator};
use crate::error::Result;
use crate::models::Category;
use crate::services::category_field::{CategoryField, CategoryItem, ScreenContext};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/category-field/click", post(click_category))
}

#[derive(Debug, Deserialize)]
pub struct CategoryClickRequest {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub is_clickable: bool,
    /// Explicit screen; takes precedence over `path`
    #[serde(default)]
    pub screen: Option<ScreenContext>,
    /// Current front-end path, e.g. `/mypage`
    #[serde(default)]
    pub path: Option<String>,
    pub clicked: String,
}

impl CategoryClickRequest {
    fn screen(&self) -> ScreenContext {
        match (self.screen, self.path.as_deref()) {
            (Some(screen), _) => screen,
            (None, Some(path)) => ScreenContext::from_path(path),
            (None, None) => ScreenContext::Other,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryClickResponse {
    pub categories: Vec<CategoryItem>,
    /// Name to hand to the page's selection callback
    pub selected: Option<String>,
    pub navigate_to: Option<String>,
}

/// Client storage backed by response cookies.
///
/// Values are percent-encoded so JSON and non-ASCII text survive the header.
struct CookieStorage {
    jar: CookieJar,
}

impl ClientStorage for CookieStorage {
    fn set_item(&mut self, key: &str, value: String) {
        let cookie = Cookie::build((key.to_string(), urlencoding::encode(&value).into_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .build();
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar.add(cookie);
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.jar
            .get(key)
            .and_then(|cookie| urlencoding::decode(cookie.value()).ok())
            .map(|value| value.into_owned())
    }
}

#[derive(Default)]
struct PendingNavigation {
    target: Option<String>,
}

impl Navigator for PendingNavigation {
    fn push(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}

async fn click_category(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<CategoryClickRequest>,
) -> Result<(CookieJar, Json<CategoryClickResponse>)> {
    let screen = request.screen();
    let mut field = CategoryField::new(
        request.categories,
        request.is_clickable,
        screen,
        state.config.category_catalog.clone(),
    );

    let outcome = field.click(&request.clicked)?;

    let mut storage = CookieStorage { jar };
    let mut navigation = PendingNavigation::default();
    outcome.apply(&mut storage, &mut navigation)?;

    Ok((
        storage.jar,
        Json(CategoryClickResponse {
            categories: field.items(),
            selected: outcome.selected,
            navigate_to: navigation.target,
        }),
    ))
}
