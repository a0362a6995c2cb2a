// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side host capabilities: persistent key/value storage and navigation.

use std::collections::HashMap;

/// Front-end routes that server-side logic may navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Category,
    MyPage,
    Badge,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Category => "/category",
            Route::MyPage => "/mypage",
            Route::Badge => "/badge",
        }
    }
}

/// Client-local persistent storage. Writes are last-write-wins.
pub trait ClientStorage {
    fn set_item(&mut self, key: &str, value: String);
    fn get_item(&self, key: &str) -> Option<String>;
}

/// Client-side navigation.
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// In-memory storage, used by tests and server-side rendering.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl ClientStorage for MemoryStorage {
    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

/// Navigator that records pushed paths instead of performing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub history: Vec<String>,
}

impl RecordingNavigator {
    /// Most recently pushed path.
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, path: &str) {
        self.history.push(path.to_string());
    }
}
