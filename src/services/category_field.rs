// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category field selection state.
//!
//! Holds the caller's category list and applies click events to it:
//! - single selection among non-completed categories
//! - completed categories are never re-selected
//! - on the my-page screen, a completed category opens its badge result

use crate::browser::{ClientStorage, Navigator, Route};
use crate::models::category::VIEW_RESULT_CATEGORY_KEY;
use crate::models::{Category, CategoryStatus, ViewResultCategory};
use serde::{Deserialize, Serialize};

/// Canonical category order used when no catalog is configured.
pub const DEFAULT_CATEGORY_NAMES: [&str; 6] = [
    "수질오염",
    "대기오염",
    "토양오염",
    "지구온난화",
    "분리수거",
    "에너지 절약",
];

/// Screen on which the field is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenContext {
    /// Category listing (`/category`): completed items are locked.
    Category,
    /// User page (`/mypage`): completed items open their badge result.
    MyPage,
    #[default]
    Other,
}

impl ScreenContext {
    pub fn from_path(path: &str) -> Self {
        if path == Route::Category.path() {
            ScreenContext::Category
        } else if path == Route::MyPage.path() {
            ScreenContext::MyPage
        } else {
            ScreenContext::Other
        }
    }
}

/// Ordered table of category names.
///
/// A category's badge id is its 1-based position in this table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    names: Vec<String>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_NAMES.iter().map(|n| n.to_string()).collect())
    }
}

impl CategoryCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 1-based position of `name`, if it is in the catalog.
    pub fn position(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| u32::try_from(i + 1).ok())
    }

    /// Badge id recorded for `name`: its position, or 0 when it is missing.
    pub fn lookup_id(&self, name: &str) -> u32 {
        self.position(name).unwrap_or(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Failed to encode stored category: {0}")]
    Storage(#[from] serde_json::Error),
}

/// Render data for one category item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryItem {
    pub id: u32,
    pub name: String,
    pub status: CategoryStatus,
    pub clickable: bool,
}

/// Effects requested by a click, to be carried out by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Name reported to the selection callback (non-completed items only).
    pub selected: Option<String>,
    /// Record to persist under [`VIEW_RESULT_CATEGORY_KEY`].
    pub view_result: Option<ViewResultCategory>,
    pub navigate_to: Option<Route>,
}

impl ClickOutcome {
    /// Persist the view-result record, then navigate.
    pub fn apply<S, N>(&self, storage: &mut S, navigator: &mut N) -> Result<(), CategoryError>
    where
        S: ClientStorage + ?Sized,
        N: Navigator + ?Sized,
    {
        if let Some(record) = &self.view_result {
            storage.set_item(VIEW_RESULT_CATEGORY_KEY, serde_json::to_string(record)?);
        }
        if let Some(route) = self.navigate_to {
            navigator.push(route.path());
        }
        Ok(())
    }
}

/// Selection state of a category field.
#[derive(Debug, Clone)]
pub struct CategoryField {
    categories: Vec<Category>,
    clickable: bool,
    screen: ScreenContext,
    catalog: CategoryCatalog,
}

impl CategoryField {
    pub fn new(
        categories: Vec<Category>,
        clickable: bool,
        screen: ScreenContext,
        catalog: CategoryCatalog,
    ) -> Self {
        Self {
            categories,
            clickable,
            screen,
            catalog,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace local state with a fresh list from the caller.
    pub fn reset(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn is_item_clickable(&self, status: CategoryStatus) -> bool {
        if !self.clickable {
            return false;
        }
        !(self.screen == ScreenContext::Category && status == CategoryStatus::Completed)
    }

    pub fn items(&self) -> Vec<CategoryItem> {
        self.categories
            .iter()
            .map(|c| CategoryItem {
                id: c.id,
                name: c.name.clone(),
                status: c.status,
                clickable: self.is_item_clickable(c.status),
            })
            .collect()
    }

    /// Handle a click on the category called `name`.
    pub fn click(&mut self, name: &str) -> Result<ClickOutcome, CategoryError> {
        let status = self
            .categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.status)
            .ok_or_else(|| CategoryError::UnknownCategory(name.to_string()))?;

        let mut outcome = ClickOutcome::default();
        if status != CategoryStatus::Completed {
            outcome.selected = Some(name.to_string());
        }

        if !self.is_item_clickable(status) {
            return Ok(outcome);
        }

        if self.screen == ScreenContext::MyPage && status == CategoryStatus::Completed {
            let id = self.catalog.lookup_id(name);
            if id == 0 {
                tracing::warn!(category = name, "Completed category not in catalog");
            }
            outcome.view_result = Some(ViewResultCategory {
                id,
                name: name.to_string(),
            });
            outcome.navigate_to = Some(Route::Badge);
        }

        self.select(name);
        Ok(outcome)
    }

    fn select(&mut self, name: &str) {
        for category in &mut self.categories {
            if category.status == CategoryStatus::Completed {
                continue;
            }
            category.status = if category.name == name {
                CategoryStatus::Selected
            } else {
                CategoryStatus::Default
            };
        }
    }
}
