// src/session.rs

use crate::constants::{LEVEL_KEY, SCENARIO_KEY};
use crate::models::SessionContext;
use std::collections::HashMap;

/// Session-scoped key/value storage. Lives as long as the client that owns it.
#[derive(Debug, Default, Clone)]
pub struct SessionStorage {
    items: HashMap<String, String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.items.insert(key.to_string(), value.into());
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store_context(&mut self, context: &SessionContext) {
        self.set_item(SCENARIO_KEY, context.scenario.clone());
        self.set_item(LEVEL_KEY, context.level.clone());
    }

    /// The stored scenario/level pair, if both keys are present.
    pub fn context(&self) -> Option<SessionContext> {
        Some(SessionContext {
            scenario: self.get_item(SCENARIO_KEY)?.to_string(),
            level: self.get_item(LEVEL_KEY)?.to_string(),
        })
    }
}
