// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge category model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Client storage key for the category whose badge result is being viewed.
pub const VIEW_RESULT_CATEGORY_KEY: &str = "viewResultCategory";

/// Progress of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Default,
    Selected,
    Completed,
}

/// A category as provided by the caller of the category field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: CategoryStatus,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>, status: CategoryStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}

/// Lookup record persisted before navigating to the badge view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/types/generated/")
)]
pub struct ViewResultCategory {
    /// 1-based position in the category catalog
    pub id: u32,
    pub name: String,
}
