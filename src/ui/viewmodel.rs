//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like highlight ranges and selection state; they hold no
//! business logic.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer after every handled event (explicit pull, no observation).

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the
/// windowed display rows, selection state, header and footer text, and the
/// optional input bar and empty state.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows to display, favorites group first, then non-favorites.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (title and counts summary).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional empty state message (empty roster or empty filter result).
    pub empty_state: Option<EmptyState>,

    /// Optional input bar (when the shared text field is open).
    pub input_bar: Option<InputBarInfo>,
}

/// Display information for a single roster row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Display name, possibly truncated to the terminal width.
    pub name: String,

    /// Whether the entry is in the favorites group (drawn with a heart marker).
    pub is_favorite: bool,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges to highlight (occurrences of the applied filter).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices with
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Counts summary line: whole-roster favorite and non-favorite counts,
    /// plus the applied filter when one is active.
    pub summary: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  f: favorite  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when the roster has no entries or the filter matches nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Roster is empty").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press Esc to clear the filter").
    pub subtitle: String,
}

/// Input bar display information.
///
/// Contains the shared text buffer for rendering the input box.
#[derive(Debug, Clone)]
pub struct InputBarInfo {
    /// Current text buffer content.
    pub buffer: String,

    /// Whether the field has typing focus (drawn with a cursor mark).
    pub typing: bool,
}
