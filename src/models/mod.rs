// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod category;
pub mod nickname;
pub mod session;
pub mod user;

pub use category::{Category, CategoryStatus, ViewResultCategory};
pub use session::{AuthUser, Session};
pub use user::{AllClearRow, AuthUserInfo, NewUser, User, UserField, UserUpdate};
