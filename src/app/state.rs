//! Sidebar state of the layout shell
//!
//! `ShellState` owns the active selection. A link click goes through
//! [`ShellState::follow`], which updates the selection and hands back the
//! route to navigate to, so the two effects cannot be separated.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::domain::models::{AccountAction, ActiveSelection, NavigationEntry, NAVIGATION};
use crate::shared::errors::{Result, ShellError};
use crate::shared::logging::{log_navigation, log_placeholder_action};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellState {
    entries: &'static [NavigationEntry],
    selection: ActiveSelection,
}

impl ShellState {
    /// Validate `entries` and select the first one
    pub fn new(entries: &'static [NavigationEntry]) -> Result<Self> {
        validate_navigation(entries)?;
        let selection = ActiveSelection::first_of(entries).ok_or(ShellError::EmptyNavigation)?;
        Ok(Self { entries, selection })
    }

    pub fn entries(&self) -> &'static [NavigationEntry] {
        self.entries
    }

    pub fn selection(&self) -> ActiveSelection {
        self.selection
    }

    /// Select `entry` and return the route its link points at.
    /// Entries outside the configured sequence leave the state untouched.
    pub fn follow(&mut self, entry: &NavigationEntry) -> Result<Route> {
        if !self.entries.contains(entry) {
            return Err(ShellError::UnknownEntry(entry.label.to_string()));
        }
        let route = Route::resolve(entry.path)?;

        self.selection = ActiveSelection::of(entry);
        log_navigation(entry.label, entry.path);
        Ok(route)
    }

    /// Account affordances have no behavior; nothing changes.
    pub fn trigger(&self, action: AccountAction) {
        log_placeholder_action(action.as_str());
    }

    pub fn is_marked(&self, entry: &NavigationEntry) -> bool {
        self.selection.is(entry)
    }

    /// The link drawn as active, if any
    pub fn marked(&self) -> Option<&'static NavigationEntry> {
        self.entries.iter().find(|entry| self.is_marked(entry))
    }
}

/// Component-local sidebar state, created once per mounted shell
pub fn use_shell_state() -> Result<Signal<ShellState>> {
    use_hook(|| ShellState::new(NAVIGATION).map(Signal::new))
}

/// Check a navigation sequence: non-empty, unique labels, every path routed
/// to real content rather than the fallback.
pub fn validate_navigation(entries: &[NavigationEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(ShellError::EmptyNavigation);
    }

    let mut labels = HashSet::new();
    for entry in entries {
        if !labels.insert(entry.label) {
            return Err(ShellError::DuplicateLabel(entry.label.to_string()));
        }
        if Route::resolve(entry.path)?.is_fallback() {
            return Err(ShellError::UnroutablePath(entry.path.to_string()));
        }
    }

    Ok(())
}
