//! Per-tab session marker: tells a fresh session from a reload.
//!
//! The host keeps a tiny string store scoped to the browser tab (or window).
//! On startup the wizard checks for its marker: missing means a new session and
//! the draft is reset, present means a reload and the draft is kept.

use std::collections::HashMap;

use crate::config::WizardConfig;
use crate::state::WizardState;

/// Key/value store scoped to one tab session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    fn remove(&mut self, key: &str);
}

/// Session storage kept in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStorage {
    entries: HashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// How [`SessionMarker::begin`] found the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// No marker: the draft was reset.
    Fresh,
    /// Marker present: the draft was left untouched.
    Resumed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    key: String,
}

impl SessionMarker {
    const ACTIVE: &'static str = "true";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new(config.session_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_set(&self, storage: &impl SessionStorage) -> bool {
        storage.get(&self.key).is_some_and(|value| value == Self::ACTIVE)
    }

    /// Reset the draft on a fresh session and set the marker.
    pub fn begin(&self, storage: &mut impl SessionStorage, state: &mut WizardState) -> SessionStart {
        if self.is_set(storage) {
            tracing::debug!(key = %self.key, "resuming wizard session");
            return SessionStart::Resumed;
        }
        state.reset();
        storage.set(&self.key, Self::ACTIVE);
        tracing::debug!(key = %self.key, "started fresh wizard session");
        SessionStart::Fresh
    }

    /// Clear the marker; call on tab/window unload.
    pub fn end(&self, storage: &mut impl SessionStorage) {
        storage.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_resets_and_marks() {
        let mut storage = MemorySessionStorage::new();
        let mut state = WizardState::new();
        state.set_offering_name("Leftover");
        let marker = SessionMarker::from_config(state.config());

        assert_eq!(marker.begin(&mut storage, &mut state), SessionStart::Fresh);
        assert!(marker.is_set(&storage));
        assert_eq!(state.draft().offering_name, "");
    }

    #[test]
    fn reload_keeps_the_draft() {
        let mut storage = MemorySessionStorage::new();
        let mut state = WizardState::new();
        let marker = SessionMarker::new("tab");
        marker.begin(&mut storage, &mut state);

        state.set_offering_name("Keep me");
        state.next_step();
        assert_eq!(marker.begin(&mut storage, &mut state), SessionStart::Resumed);
        assert_eq!(state.draft().offering_name, "Keep me");
        assert_eq!(state.current_step(), 2);
    }

    #[test]
    fn ending_the_session_clears_the_marker() {
        let mut storage = MemorySessionStorage::new();
        let mut state = WizardState::new();
        let marker = SessionMarker::new("tab");
        marker.begin(&mut storage, &mut state);
        marker.end(&mut storage);
        assert!(!marker.is_set(&storage));

        state.set_tagline("stale");
        assert_eq!(marker.begin(&mut storage, &mut state), SessionStart::Fresh);
        assert_eq!(state.draft().tagline, "");
    }

    #[test]
    fn foreign_values_do_not_count_as_marker() {
        let mut storage = MemorySessionStorage::new();
        storage.set("tab", "maybe");
        assert!(!SessionMarker::new("tab").is_set(&storage));
    }
}
