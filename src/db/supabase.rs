// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hosted backend client with typed operations.
//!
//! Talks to two APIs of the backend:
//! - Auth (`/auth/v1`) to resolve the session's user
//! - REST (`/rest/v1`) for select/insert/update on tables

use crate::db::{tables, UserStore};
use crate::error::AppError;
use crate::models::{AllClearRow, AuthUser, NewUser, Session, User, UserUpdate};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Deserialize;

/// Hosted backend client.
#[derive(Clone)]
pub struct SupabaseDb {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseDb {
    /// Create a new client for a project URL and its public anon key.
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Attach the project key and the session's bearer token.
    fn authorize(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(session.access_token())
    }

    /// Equality filter in the REST query syntax.
    fn eq_filter(value: &str) -> String {
        format!("eq.{}", value)
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_backend_status(status, body))
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_backend_status(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
    }

    /// Select `columns` from `table` filtered by `user_id`.
    async fn select_by_user<T: for<'de> Deserialize<'de>>(
        &self,
        session: &Session,
        table: &str,
        columns: &str,
        user_id: &str,
    ) -> Result<Vec<T>, AppError> {
        let request = self.http.get(self.table_url(table)).query(&[
            ("select", columns.to_string()),
            ("user_id", Self::eq_filter(user_id)),
        ]);

        let response = self
            .authorize(request, session)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        self.check_response_json(response).await
    }
}

#[async_trait]
impl UserStore for SupabaseDb {
    async fn auth_user(&self, session: &Session) -> Result<AuthUser, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .authorize(self.http.get(&url), session)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("Auth request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    async fn select_users(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<User>, AppError> {
        self.select_by_user(session, tables::USER, "*", user_id)
            .await
    }

    async fn select_all_clear(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<AllClearRow>, AppError> {
        self.select_by_user(session, tables::USER, "is_all_clear", user_id)
            .await
    }

    async fn insert_user(&self, session: &Session, user: &NewUser) -> Result<(), AppError> {
        let request = self
            .http
            .post(self.table_url(tables::USER))
            .header("Prefer", "return=minimal")
            .json(user);

        let response = self
            .authorize(request, session)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        self.check_response(response).await?;
        tracing::debug!(user_id = %user.user_id, "User row inserted");
        Ok(())
    }

    async fn update_user(
        &self,
        session: &Session,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<(), AppError> {
        let request = self
            .http
            .patch(self.table_url(tables::USER))
            .query(&[("user_id", Self::eq_filter(user_id))])
            .header("Prefer", "return=minimal")
            .json(&update.to_row());

        let response = self
            .authorize(request, session)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        self.check_response(response).await?;
        tracing::debug!(user_id, field = %update.field(), "User row updated");
        Ok(())
    }
}
