//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It owns the canonical roster and every mutation and query operation
//! on it: add, delete, toggle-favorite, the applied search filter, partitioned
//! filtered reads, and whole-list counts. It is the single source of truth for
//! all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the entry list, the applied query) from
//! derived state (the visible partitioned sequence, the selection cursor).
//! Nothing is cached: every read recomputes from the entry list, and the
//! rendering layer pulls a fresh view model after each handled event.
//!
//! # Mutation semantics
//!
//! - Adds append at the end; the seed order dictates the baseline order.
//! - Blank input (no non-whitespace character) is silently rejected on add.
//! - Delete and toggle address entries by stable id, so duplicate names never
//!   alias together.
//! - Setting the search query never touches the list; counts always cover the
//!   whole roster regardless of the active filter.

use super::modes::{InputFocus, InputMode};
use crate::domain::{Entry, EntryId};
use crate::ui::theme::Theme;

/// Central application state container.
///
/// Holds the roster plus all transient UI state: the shared text buffer, the
/// applied search query, the selection cursor, and the input mode. Mutated by
/// the event handler in response to user input; view models are computed
/// on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical roster, in insertion order.
    ///
    /// Seeded at plugin load; new entries append at the end. Never reordered.
    pub entries: Vec<Entry>,

    /// Next id to hand out. Monotonic, never reused within a pane session.
    next_id: EntryId,

    /// The applied search filter.
    ///
    /// Changed only by an explicit search submit (or cleared by Escape);
    /// typing in the text field does not refilter. Empty matches everything.
    pub search_query: String,

    /// The shared text field backing both submit affordances.
    ///
    /// Applying it as a search keeps the buffer; adding it as an entry clears
    /// the buffer, mirroring a search-or-add field.
    pub input_buffer: String,

    /// Zero-based cursor into the visible (filtered, partitioned) sequence.
    ///
    /// Clamped after every mutation. Wraps around during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state seeded with the given names.
    ///
    /// Each seed name becomes a non-favorite entry; seed order dictates the
    /// baseline list order. Blank seed names are skipped with the same
    /// blank-check used by [`add_entry`](Self::add_entry).
    #[must_use]
    pub fn new(seed_names: Vec<String>, theme: Theme) -> Self {
        let mut state = Self {
            entries: Vec::with_capacity(seed_names.len()),
            next_id: 0,
            search_query: String::new(),
            input_buffer: String::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        };
        for name in seed_names {
            state.add_entry(&name);
        }
        state
    }

    /// Appends a new entry with the given raw name.
    ///
    /// If `raw` contains no non-whitespace character the call is a silent
    /// no-op: nothing is created and no error is raised. Otherwise the name is
    /// stored exactly as given (untrimmed) with `favorite = false`.
    pub fn add_entry(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            tracing::debug!(len = raw.len(), "rejecting blank entry name");
            return;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry::new(id, raw.to_string()));

        tracing::debug!(id = id, name = %raw, total = self.entries.len(), "entry added");
    }

    /// Removes the entry with the given id.
    ///
    /// No-op if no entry carries that id. Clamps the selection cursor
    /// afterwards so it stays within the visible sequence.
    pub fn delete_entry(&mut self, id: EntryId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);

        if self.entries.len() == before {
            tracing::debug!(id = id, "delete target not found");
        } else {
            tracing::debug!(id = id, remaining = self.entries.len(), "entry deleted");
        }

        self.clamp_selection();
    }

    /// Flips the favorite flag of the entry with the given id.
    ///
    /// No-op if no entry carries that id. Only the identified entry changes;
    /// other entries with the same name keep their flag. Clamps the selection
    /// cursor since the entry moves between partitions.
    pub fn toggle_favorite(&mut self, id: EntryId) {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.favorite = !entry.favorite;
                tracing::debug!(id = id, favorite = entry.favorite, "favorite toggled");
            }
            None => tracing::debug!(id = id, "toggle target not found"),
        }

        self.clamp_selection();
    }

    /// Stores the search filter used by the visible reads.
    ///
    /// Does not mutate the entry list. An empty query matches every entry.
    /// Clamps the selection cursor to the new visible sequence.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        tracing::debug!(query = %self.search_query, "search query applied");
        self.clamp_selection();
    }

    /// Favorite entries whose name contains the applied query, in list order.
    pub fn visible_favorites(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.favorite && entry.matches(&self.search_query))
    }

    /// Non-favorite entries whose name contains the applied query, in list order.
    pub fn visible_non_favorites(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|entry| !entry.favorite && entry.matches(&self.search_query))
    }

    /// The full visible sequence: favorites group first, then non-favorites,
    /// each in list order.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.visible_favorites()
            .chain(self.visible_non_favorites())
            .collect()
    }

    /// Number of favorite entries across the whole roster, ignoring the filter.
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.favorite).count()
    }

    /// Number of non-favorite entries across the whole roster, ignoring the filter.
    #[must_use]
    pub fn non_favorite_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.favorite).count()
    }

    /// Moves the selection cursor down by one, wrapping to the top at the end.
    ///
    /// No-op if the visible sequence is empty.
    pub fn move_selection_down(&mut self) {
        let visible = self.visible_entries().len();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves the selection cursor up by one, wrapping to the bottom at the top.
    ///
    /// No-op if the visible sequence is empty.
    pub fn move_selection_up(&mut self) {
        let visible = self.visible_entries().len();
        if visible == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = visible - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected entry, if the visible sequence is
    /// non-empty.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.visible_entries().get(self.selected_index).copied()
    }

    /// Clamps the selection cursor to the bounds of the visible sequence.
    fn clamp_selection(&mut self) {
        let visible = self.visible_entries().len();
        if visible == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles windowing (a slice of the visible sequence centered on the
    /// selection), substring match highlighting for the applied query, and
    /// empty state handling.
    ///
    /// # Windowing
    ///
    /// 1. Subtract UI chrome from `rows` to get the available list height
    /// 2. Center the window on the selected index
    /// 3. Shift the window when near the end to keep it full
    /// 4. Express the selection relative to the window start
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> crate::ui::viewmodel::UIViewModel {
        let visible = self.visible_entries();

        let empty_state = if self.entries.is_empty() {
            Some(crate::ui::viewmodel::EmptyState {
                message: "Roster is empty".to_string(),
                subtitle: "Press 'a' and Ctrl+a to add an entry".to_string(),
            })
        } else if visible.is_empty() {
            Some(crate::ui::viewmodel::EmptyState {
                message: format!("No matches for \"{}\"", self.search_query),
                subtitle: "Press Esc to clear the filter".to_string(),
            })
        } else {
            None
        };

        if empty_state.is_some() {
            return crate::ui::viewmodel::UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                empty_state,
                input_bar: self.compute_input_bar(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<crate::ui::viewmodel::DisplayItem> = visible
            [visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(entry, absolute_idx, cols)
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        crate::ui::viewmodel::UIViewModel {
            display_items,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            input_bar: self.compute_input_bar(),
        }
    }

    /// Computes the display item for a single entry in the visible window.
    fn compute_display_item(
        &self,
        entry: &Entry,
        absolute_idx: usize,
        cols: usize,
    ) -> crate::ui::viewmodel::DisplayItem {
        const SAFETY_MARGIN: usize = 6;

        let is_selected = absolute_idx == self.selected_index;
        let max_name_width = cols.saturating_sub(SAFETY_MARGIN);

        let name = if entry.name.chars().count() > max_name_width {
            let truncated: String = entry
                .name
                .chars()
                .take(max_name_width.saturating_sub(3))
                .collect();
            format!("{truncated}...")
        } else {
            entry.name.clone()
        };

        let highlight_ranges = if self.search_query.is_empty() {
            vec![]
        } else {
            Self::match_ranges(&name, &self.search_query)
        };

        crate::ui::viewmodel::DisplayItem {
            name,
            is_favorite: entry.favorite,
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes character index ranges where `query` occurs in `text`
    /// case-insensitively.
    ///
    /// Occurrences are non-overlapping and scanned left to right. Ranges are
    /// `(start, end)` character indices with exclusive end, matching what the
    /// highlight renderer expects.
    fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
        let text_chars: Vec<char> = text.chars().collect();
        let query_chars: Vec<char> = query.chars().collect();

        if query_chars.is_empty() || query_chars.len() > text_chars.len() {
            return vec![];
        }

        let eq_ci = |a: char, b: char| a.to_lowercase().eq(b.to_lowercase());

        let mut ranges = Vec::new();
        let mut i = 0;
        while i + query_chars.len() <= text_chars.len() {
            let matched = query_chars
                .iter()
                .enumerate()
                .all(|(j, &qc)| eq_ci(text_chars[i + j], qc));
            if matched {
                ranges.push((i, i + query_chars.len()));
                i += query_chars.len();
            } else {
                i += 1;
            }
        }

        ranges
    }

    /// Computes header information: title plus the whole-list counts summary.
    fn compute_header(&self) -> crate::ui::viewmodel::HeaderInfo {
        let summary = if self.search_query.is_empty() {
            format!(
                "\u{2665} {}  \u{00b7} {}",
                self.favorite_count(),
                self.non_favorite_count()
            )
        } else {
            format!(
                "\u{2665} {}  \u{00b7} {}  filter: {}",
                self.favorite_count(),
                self.non_favorite_count(),
                self.search_query
            )
        };

        crate::ui::viewmodel::HeaderInfo {
            title: format!(" Roster ({}) ", self.entries.len()),
            summary,
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> crate::ui::viewmodel::FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Input(InputFocus::Typing) => {
                "Enter: search  Ctrl+a: add  ESC: close field  Ctrl+n/p: navigate".to_string()
            }
            InputMode::Input(InputFocus::Navigating) => {
                "j/k: navigate  f: favorite  d: delete  /: edit field  ESC: close field"
                    .to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  f: favorite  d: delete  /: search or add  ESC: clear filter  q: quit"
                    .to_string()
            }
        };

        crate::ui::viewmodel::FooterInfo { keybindings }
    }

    /// Computes the input bar state if the text field is open.
    fn compute_input_bar(&self) -> Option<crate::ui::viewmodel::InputBarInfo> {
        if matches!(self.input_mode, InputMode::Input(_)) {
            Some(crate::ui::viewmodel::InputBarInfo {
                buffer: self.input_buffer.clone(),
                typing: matches!(self.input_mode, InputMode::Input(InputFocus::Typing)),
            })
        } else {
            None
        }
    }

    /// Rows left for the list after subtracting UI chrome.
    ///
    /// Normal mode reserves 6 rows (blank, title, summary, border, border,
    /// footer); input mode reserves 3 more for the input box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Input(_) => total_rows.saturating_sub(9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> AppState {
        AppState::new(
            names.iter().map(|n| (*n).to_string()).collect(),
            Theme::default(),
        )
    }

    fn names(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn id_of(state: &AppState, name: &str) -> EntryId {
        state
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id)
            .unwrap()
    }

    #[test]
    fn add_non_blank_grows_list_by_one() {
        let mut state = state_with(&["Ann"]);
        state.add_entry("Bob");
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.entries[1].name, "Bob");
        assert!(!state.entries[1].favorite);
    }

    #[test]
    fn add_blank_or_whitespace_is_rejected() {
        let mut state = state_with(&["Ann"]);
        state.add_entry("");
        state.add_entry("   ");
        state.add_entry("\t\n");
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn add_keeps_surrounding_whitespace_when_non_blank() {
        let mut state = state_with(&[]);
        state.add_entry("  Bob ");
        assert_eq!(state.entries[0].name, "  Bob ");
    }

    #[test]
    fn added_entries_append_in_order() {
        let mut state = state_with(&["Ann", "Bob"]);
        state.add_entry("Cara");
        assert_eq!(
            names(&state.visible_non_favorites().collect::<Vec<_>>()),
            vec!["Ann", "Bob", "Cara"]
        );
    }

    #[test]
    fn delete_removes_exactly_the_identified_entry() {
        let mut state = state_with(&["Ann", "Bob", "Ann"]);
        let first_ann = state.entries[0].id;
        state.delete_entry(first_ann);
        assert_eq!(
            names(&state.entries.iter().collect::<Vec<_>>()),
            vec!["Bob", "Ann"]
        );
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut state = state_with(&["Ann"]);
        state.delete_entry(999);
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn double_toggle_restores_flag() {
        let mut state = state_with(&["Ann"]);
        let id = id_of(&state, "Ann");
        state.toggle_favorite(id);
        assert!(state.entries[0].favorite);
        state.toggle_favorite(id);
        assert!(!state.entries[0].favorite);
    }

    #[test]
    fn duplicate_names_do_not_alias_on_toggle() {
        let mut state = state_with(&["Ann", "Ann"]);
        let first = state.entries[0].id;
        state.toggle_favorite(first);
        assert!(state.entries[0].favorite);
        assert!(!state.entries[1].favorite);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut state = state_with(&["Ann"]);
        state.toggle_favorite(42);
        assert!(!state.entries[0].favorite);
    }

    #[test]
    fn counts_partition_the_whole_list() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        state.toggle_favorite(id_of(&state, "Cara"));
        state.set_search_query("zzz");

        // Counts ignore the active filter.
        assert_eq!(state.favorite_count(), 1);
        assert_eq!(state.non_favorite_count(), 2);
        assert_eq!(
            state.favorite_count() + state.non_favorite_count(),
            state.entries.len()
        );
    }

    #[test]
    fn counts_invariant_holds_across_mutations() {
        let mut state = state_with(&["Ann", "Bob"]);
        state.add_entry("Cara");
        state.toggle_favorite(id_of(&state, "Bob"));
        state.delete_entry(id_of(&state, "Ann"));
        state.toggle_favorite(id_of(&state, "Cara"));
        assert_eq!(
            state.favorite_count() + state.non_favorite_count(),
            state.entries.len()
        );
    }

    #[test]
    fn empty_query_matches_every_entry() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        state.toggle_favorite(id_of(&state, "Bob"));
        assert_eq!(state.visible_entries().len(), 3);
    }

    #[test]
    fn non_matching_query_yields_empty_partitions() {
        let mut state = state_with(&["Ann", "Bob"]);
        state.set_search_query("xyz");
        assert_eq!(state.visible_favorites().count(), 0);
        assert_eq!(state.visible_non_favorites().count(), 0);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        state.set_search_query("A");
        assert_eq!(
            names(&state.visible_entries()),
            vec!["Ann", "Cara"]
        );
    }

    #[test]
    fn partitions_keep_list_order_favorites_first() {
        let mut state = state_with(&["Ann", "Bob", "Cara", "Dave"]);
        state.toggle_favorite(id_of(&state, "Cara"));
        state.toggle_favorite(id_of(&state, "Ann"));
        // Favorites group preserves list order (Ann before Cara),
        // then non-favorites in list order.
        assert_eq!(
            names(&state.visible_entries()),
            vec!["Ann", "Cara", "Bob", "Dave"]
        );
    }

    #[test]
    fn scenario_from_three_seeded_entries() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        state.toggle_favorite(id_of(&state, "Cara"));

        state.toggle_favorite(id_of(&state, "Ann"));
        assert_eq!(
            names(&state.visible_favorites().collect::<Vec<_>>()),
            vec!["Ann", "Cara"]
        );
        assert_eq!(
            names(&state.visible_non_favorites().collect::<Vec<_>>()),
            vec!["Bob"]
        );

        state.add_entry("Dave");
        assert_eq!(
            names(&state.visible_non_favorites().collect::<Vec<_>>()),
            vec!["Bob", "Dave"]
        );

        state.delete_entry(id_of(&state, "Bob"));
        assert_eq!(
            names(&state.visible_non_favorites().collect::<Vec<_>>()),
            vec!["Dave"]
        );

        state.set_search_query("a");
        assert_eq!(
            names(&state.visible_favorites().collect::<Vec<_>>()),
            vec!["Ann", "Cara"]
        );
        assert_eq!(
            names(&state.visible_non_favorites().collect::<Vec<_>>()),
            vec!["Dave"]
        );
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with(&["Ann", "Bob"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_clamps_after_delete() {
        let mut state = state_with(&["Ann", "Bob"]);
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        state.delete_entry(id_of(&state, "Bob"));
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_entry().map(|e| e.name.as_str()), Some("Ann"));
    }

    #[test]
    fn selected_entry_none_when_filtered_out() {
        let mut state = state_with(&["Ann"]);
        state.set_search_query("zzz");
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(AppState::match_ranges("Cara", "a"), vec![(1, 2), (3, 4)]);
        assert_eq!(AppState::match_ranges("Ann", "AN"), vec![(0, 2)]);
        assert_eq!(AppState::match_ranges("Bob", "x"), vec![]);
    }

    #[test]
    fn viewmodel_reports_empty_state_for_no_matches() {
        let mut state = state_with(&["Ann"]);
        state.set_search_query("zzz");
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let seed: Vec<String> = (1..=40).map(|i| format!("Entry {i}")).collect();
        let mut state = AppState::new(seed, Theme::default());
        for _ in 0..30 {
            state.move_selection_down();
        }
        let vm = state.compute_viewmodel(24, 80);
        // 24 rows minus 6 rows of chrome leaves 18 list rows.
        assert_eq!(vm.display_items.len(), 18);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert!(vm.display_items[vm.selected_index]
            .name
            .contains("Entry 31"));
    }

    #[test]
    fn viewmodel_header_carries_counts_summary() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        state.toggle_favorite(id_of(&state, "Ann"));
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.header.summary.contains('1'));
        assert!(vm.header.summary.contains('2'));
    }
}
