// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod category_field;
pub mod user;

pub use category_field::{CategoryCatalog, CategoryField, ClickOutcome, ScreenContext};
pub use user::UserDataAccess;
