// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (hosted backend REST API).

pub mod supabase;

pub use supabase::SupabaseDb;

use crate::error::AppError;
use crate::models::{AllClearRow, AuthUser, NewUser, Session, User, UserUpdate};
use async_trait::async_trait;

/// Table names as constants.
pub mod tables {
    pub const USER: &str = "user";
}

/// Backend operations used by the user data-access layer.
///
/// Every call is scoped to the caller's [`Session`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve the auth provider's user for a session.
    async fn auth_user(&self, session: &Session) -> Result<AuthUser, AppError>;

    /// Select all columns of rows where `user_id = user_id`.
    async fn select_users(&self, session: &Session, user_id: &str)
        -> Result<Vec<User>, AppError>;

    /// Select only `is_all_clear` of rows where `user_id = user_id`.
    async fn select_all_clear(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<AllClearRow>, AppError>;

    async fn insert_user(&self, session: &Session, user: &NewUser) -> Result<(), AppError>;

    /// Apply a single-field update to rows where `user_id = user_id`.
    async fn update_user(
        &self,
        session: &Session,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<(), AppError>;
}
