// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User data access.
//!
//! Thin wrappers over the backend's `user` table. Failures never reach the
//! caller as errors: each one is logged and turned into `None` or `false`.

use crate::db::UserStore;
use crate::models::nickname::random_nickname;
use crate::models::{AuthUserInfo, NewUser, Session, User, UserUpdate};
use std::sync::Arc;

/// Session-scoped access to the `user` table.
#[derive(Clone)]
pub struct UserDataAccess {
    store: Arc<dyn UserStore>,
    session: Session,
}

impl UserDataAccess {
    pub fn new(store: Arc<dyn UserStore>, session: Session) -> Self {
        Self { store, session }
    }

    /// Id of the logged-in user, if the session is valid.
    pub async fn get_current_user_id(&self) -> Option<String> {
        self.get_current_auth_user().await.map(|info| info.id)
    }

    /// Identity of the logged-in user as needed for [`Self::create_user`].
    pub async fn get_current_auth_user(&self) -> Option<AuthUserInfo> {
        match self.store.auth_user(&self.session).await {
            Ok(user) => Some(user.into()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to find the logged-in user");
                None
            }
        }
    }

    /// All rows for `id`.
    pub async fn get_user_info(&self, id: &str) -> Option<Vec<User>> {
        if id.is_empty() {
            tracing::error!("User id is missing");
            return None;
        }

        match self.store.select_users(&self.session, id).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                tracing::error!(user_id = id, error = %e, "Failed to load user info");
                None
            }
        }
    }

    /// `is_all_clear` of the first row for `id`; `None` when unknown.
    pub async fn get_user_is_all_clear(&self, id: &str) -> Option<bool> {
        if id.is_empty() {
            tracing::error!("User id is missing");
            return None;
        }

        match self.store.select_all_clear(&self.session, id).await {
            Ok(rows) => {
                let flag = rows.first().and_then(|row| row.is_all_clear);
                if flag.is_none() {
                    tracing::warn!(user_id = id, "No all-clear flag for user");
                }
                flag
            }
            Err(e) => {
                tracing::error!(user_id = id, error = %e, "Failed to load user info");
                None
            }
        }
    }

    /// Insert a new row with a random nickname and default goal/points.
    ///
    /// Not idempotent: a second call for the same id fails on the backend's
    /// uniqueness constraint and returns `false`. See [`Self::ensure_user`].
    pub async fn create_user(&self, info: &AuthUserInfo) -> bool {
        let row = NewUser::from_auth(info, random_nickname());

        match self.store.insert_user(&self.session, &row).await {
            Ok(()) => {
                tracing::info!(user_id = %row.user_id, nickname = %row.nickname, "User created");
                true
            }
            Err(e) => {
                tracing::error!(user_id = %info.id, error = %e, "Failed to create user");
                false
            }
        }
    }

    /// Create the row for `info` unless one already exists.
    ///
    /// Returns `true` if a row exists when this returns.
    pub async fn ensure_user(&self, info: &AuthUserInfo) -> bool {
        match self.get_user_info(&info.id).await {
            Some(rows) if !rows.is_empty() => true,
            Some(_) => self.create_user(info).await,
            None => false,
        }
    }

    /// Change a single field of the row for `id`.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> bool {
        if id.is_empty() {
            tracing::error!(field = %update.field(), "User id is missing");
            return false;
        }

        match self.store.update_user(&self.session, id, update).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    user_id = id,
                    field = %update.field(),
                    error = %e,
                    "Failed to update user info"
                );
                false
            }
        }
    }
}
