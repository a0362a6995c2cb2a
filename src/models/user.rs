// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Goal assigned to every new user.
pub const DEFAULT_GOAL: i32 = 3;
/// Points assigned to every new user.
pub const DEFAULT_POINT: i32 = 0;

/// Row of the `user` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct User {
    /// Identity from the auth provider
    pub user_id: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub nickname: String,
    /// Weekly challenge goal
    pub goal: i32,
    pub point: i32,
    /// Whether every category has been completed; `None` until it is set
    #[serde(default)]
    pub is_all_clear: Option<bool>,
}

/// Identity of an authenticated session, used to create the user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct AuthUserInfo {
    #[validate(length(min = 1, message = "user id must not be empty"))]
    pub id: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Insert payload for a new user row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub user_id: String,
    pub email: String,
    pub avatar_url: String,
    pub nickname: String,
    pub goal: i32,
    pub point: i32,
}

impl NewUser {
    /// Build a row with default goal and points for an authenticated user.
    pub fn from_auth(info: &AuthUserInfo, nickname: impl Into<String>) -> Self {
        Self {
            user_id: info.id.clone(),
            email: info.email.clone(),
            avatar_url: info.avatar_url.clone(),
            nickname: nickname.into(),
            goal: DEFAULT_GOAL,
            point: DEFAULT_POINT,
        }
    }
}

/// Projection used when only the all-clear flag is selected.
#[derive(Debug, Clone, Deserialize)]
pub struct AllClearRow {
    pub is_all_clear: Option<bool>,
}

/// Columns of the `user` table that may be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Nickname,
    AvatarUrl,
    Goal,
    Point,
}

impl UserField {
    /// Column name in the `user` table.
    pub fn column(self) -> &'static str {
        match self {
            UserField::Nickname => "nickname",
            UserField::AvatarUrl => "avatar_url",
            UserField::Goal => "goal",
            UserField::Point => "point",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for UserField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nickname" => Ok(UserField::Nickname),
            "avatar_url" => Ok(UserField::AvatarUrl),
            "goal" => Ok(UserField::Goal),
            "point" => Ok(UserField::Point),
            other => Err(AppError::BadRequest(format!(
                "field '{}' cannot be updated",
                other
            ))),
        }
    }
}

/// A single-field change to a user row.
///
/// Serialized as `{"field": "goal", "value": 5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum UserUpdate {
    Nickname(String),
    AvatarUrl(String),
    Goal(i32),
    Point(i32),
}

impl UserUpdate {
    /// Build an update from a field name and an untyped JSON value.
    pub fn parse(field: &str, value: serde_json::Value) -> Result<Self, AppError> {
        let field: UserField = field.parse()?;
        let mismatch = |e: serde_json::Error| {
            AppError::BadRequest(format!("invalid value for {}: {}", field, e))
        };

        Ok(match field {
            UserField::Nickname => {
                UserUpdate::Nickname(serde_json::from_value(value).map_err(mismatch)?)
            }
            UserField::AvatarUrl => {
                UserUpdate::AvatarUrl(serde_json::from_value(value).map_err(mismatch)?)
            }
            UserField::Goal => UserUpdate::Goal(serde_json::from_value(value).map_err(mismatch)?),
            UserField::Point => {
                UserUpdate::Point(serde_json::from_value(value).map_err(mismatch)?)
            }
        })
    }

    pub fn field(&self) -> UserField {
        match self {
            UserUpdate::Nickname(_) => UserField::Nickname,
            UserUpdate::AvatarUrl(_) => UserField::AvatarUrl,
            UserUpdate::Goal(_) => UserField::Goal,
            UserUpdate::Point(_) => UserField::Point,
        }
    }

    /// Request body for the backend: `{<column>: value}`.
    pub fn to_row(&self) -> serde_json::Value {
        let value = match self {
            UserUpdate::Nickname(v) | UserUpdate::AvatarUrl(v) => serde_json::json!(v),
            UserUpdate::Goal(v) | UserUpdate::Point(v) => serde_json::json!(v),
        };

        let mut row = serde_json::Map::new();
        row.insert(self.field().column().to_string(), value);
        serde_json::Value::Object(row)
    }
}
