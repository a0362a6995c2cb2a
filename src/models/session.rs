// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend session of the calling user.

use serde::Deserialize;
use std::fmt;

/// Access token issued by the hosted auth provider.
///
/// Forwarded as the bearer token on every backend request so row-level
/// security applies to the calling user.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// User object returned by the auth provider's `/user` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: AuthUserMetadata,
}

/// Provider-specific profile data attached to an auth user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthUserMetadata {
    pub avatar_url: Option<String>,
}

impl From<AuthUser> for crate::models::AuthUserInfo {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            avatar_url: user.user_metadata.avatar_url.unwrap_or_default(),
        }
    }
}
