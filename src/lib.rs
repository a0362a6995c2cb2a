// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ecospot: eco-challenge web application core
//!
//! This crate provides the user data access layer over the hosted backend,
//! the category selection logic and presentational components, and the
//! HTTP API that exposes them to the front-end.

pub mod browser;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;

use config::Config;
use db::UserStore;
use models::Session;
use services::UserDataAccess;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// User data access on behalf of `session`.
    pub fn user_data(&self, session: Session) -> UserDataAccess {
        UserDataAccess::new(self.store.clone(), session)
    }
}
