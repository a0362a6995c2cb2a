// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use ecospot::config::Config;
use ecospot::db::UserStore;
use ecospot::error::AppError;
use ecospot::models::session::AuthUserMetadata;
use ecospot::models::{AllClearRow, AuthUser, NewUser, Session, User, UserUpdate};
use ecospot::routes::create_router;
use ecospot::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A backend call observed by [`RecordingStore`].
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    AuthUser(String),
    SelectUsers(String),
    SelectAllClear(String),
    Insert(NewUser),
    Update(String, UserUpdate),
}

/// In-memory `user` table that records every call.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    rows: Mutex<Vec<User>>,
    /// Token accepted by `auth_user`, with the user it resolves to.
    session_user: Option<(String, AuthUser)>,
    failing: AtomicBool,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as the session of `user_id`.
    pub fn with_session_user(mut self, token: &str, user_id: &str, email: &str) -> Self {
        self.session_user = Some((
            token.to_string(),
            AuthUser {
                id: user_id.to_string(),
                email: Some(email.to_string()),
                user_metadata: AuthUserMetadata {
                    avatar_url: Some("https://img.example/avatar.png".to_string()),
                },
            },
        ));
        self
    }

    pub fn with_row(self, user: User) -> Self {
        self.rows.lock().unwrap().push(user);
        self
    }

    /// Make every subsequent call fail with a backend error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Backend("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for RecordingStore {
    async fn auth_user(&self, session: &Session) -> Result<AuthUser, AppError> {
        self.record(StoreCall::AuthUser(session.access_token().to_string()))?;
        match &self.session_user {
            Some((token, user)) if token == session.access_token() => Ok(user.clone()),
            _ => Err(AppError::Unauthorized),
        }
    }

    async fn select_users(
        &self,
        _session: &Session,
        user_id: &str,
    ) -> Result<Vec<User>, AppError> {
        self.record(StoreCall::SelectUsers(user_id.to_string()))?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn select_all_clear(
        &self,
        _session: &Session,
        user_id: &str,
    ) -> Result<Vec<AllClearRow>, AppError> {
        self.record(StoreCall::SelectAllClear(user_id.to_string()))?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.user_id == user_id)
            .map(|u| AllClearRow {
                is_all_clear: u.is_all_clear,
            })
            .collect())
    }

    async fn insert_user(&self, _session: &Session, user: &NewUser) -> Result<(), AppError> {
        self.record(StoreCall::Insert(user.clone()))?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.user_id == user.user_id) {
            return Err(AppError::Conflict("duplicate key value".to_string()));
        }
        rows.push(User {
            user_id: user.user_id.clone(),
            email: Some(user.email.clone()),
            avatar_url: Some(user.avatar_url.clone()),
            nickname: user.nickname.clone(),
            goal: user.goal,
            point: user.point,
            is_all_clear: None,
        });
        Ok(())
    }

    async fn update_user(
        &self,
        _session: &Session,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<(), AppError> {
        self.record(StoreCall::Update(user_id.to_string(), update.clone()))?;
        for row in self.rows.lock().unwrap().iter_mut() {
            if row.user_id != user_id {
                continue;
            }
            match update {
                UserUpdate::Nickname(v) => row.nickname = v.clone(),
                UserUpdate::AvatarUrl(v) => row.avatar_url = Some(v.clone()),
                UserUpdate::Goal(v) => row.goal = *v,
                UserUpdate::Point(v) => row.point = *v,
            }
        }
        Ok(())
    }
}

/// A stored user row with default goal/points.
#[allow(dead_code)]
pub fn user_row(user_id: &str, is_all_clear: bool) -> User {
    User {
        user_id: user_id.to_string(),
        email: Some(format!("{user_id}@example.com")),
        avatar_url: None,
        nickname: "초록지구".to_string(),
        goal: 3,
        point: 0,
        is_all_clear: Some(is_all_clear),
    }
}

/// Create a test app backed by `store`.
#[allow(dead_code)]
pub fn create_test_app(store: Arc<RecordingStore>) -> axum::Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        store,
    });
    create_router(state)
}
