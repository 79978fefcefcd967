// crates/guardian-desk-core/src/core/state.rs
// ============================================================================
// Module: Guardian Desk View State
// Description: Dashboard view state and its pure reducer.
// Purpose: Model ephemeral UI state as explicit records transitioned by actions.
// Dependencies: crate::runtime::filter, serde
// ============================================================================

//! ## Overview
//! View state is an explicit immutable record transitioned by a pure reducer
//! over discrete action types. There is exactly one logical actor driving
//! transitions one at a time; each action is applied atomically and derived
//! view data is recomputed from the resulting state. State is never
//! persisted and resets with the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::runtime::filter::SearchQuery;

// ============================================================================
// SECTION: Tabs
// ============================================================================

/// Navigation tabs exposed by the dashboard shell.
///
/// # Invariants
/// - Variants are stable for serialization and API matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    /// Overview with stat cards, activity feed, and document list.
    Dashboard,
    /// Scanner surface (presentational only in this scope).
    Scanner,
    /// Settings surface (presentational only in this scope).
    Settings,
}

// ============================================================================
// SECTION: View State
// ============================================================================

/// Ephemeral dashboard view state.
///
/// # Invariants
/// - Owned by the view layer; never persisted.
/// - Transitions happen only through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Currently active navigation tab.
    pub active_tab: DashboardTab,
    /// Current name-search term.
    pub name_term: String,
    /// Current tag-search term.
    pub tag_term: String,
    /// Whether the upload modal is visible.
    pub upload_modal_open: bool,
}

impl ViewState {
    /// Returns the search query derived from the current terms.
    #[must_use]
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(self.name_term.clone(), self.tag_term.clone())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::Dashboard,
            name_term: String::new(),
            tag_term: String::new(),
            upload_modal_open: false,
        }
    }
}

// ============================================================================
// SECTION: Actions
// ============================================================================

/// Discrete view actions driven by user input events.
///
/// # Invariants
/// - Variants are stable for serialization and API matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewAction {
    /// Switch the active navigation tab.
    TabChange {
        /// Tab to activate.
        tab: DashboardTab,
    },
    /// Replace the name-search term.
    NameSearchChange {
        /// New name-search term.
        term: String,
    },
    /// Replace the tag-search term.
    TagSearchChange {
        /// New tag-search term.
        term: String,
    },
    /// Toggle upload modal visibility.
    ModalToggle,
}

// ============================================================================
// SECTION: Reducer
// ============================================================================

/// Applies a view action to the current state and returns the next state.
#[must_use]
pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::TabChange {
            tab,
        } => ViewState {
            active_tab: tab,
            ..state
        },
        ViewAction::NameSearchChange {
            term,
        } => ViewState {
            name_term: term,
            ..state
        },
        ViewAction::TagSearchChange {
            term,
        } => ViewState {
            tag_term: term,
            ..state
        },
        ViewAction::ModalToggle => ViewState {
            upload_modal_open: !state.upload_modal_open,
            ..state
        },
    }
}
