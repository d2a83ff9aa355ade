//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the primary
//! control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Key events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. A render flag and actions are returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Row controls**: `ToggleFavorite`, `DeleteSelected`
//! - **Text field**: `StartInput`, `FocusInput`, `ExitInput`, `Char`, `Backspace`
//! - **Submit affordances**: `SubmitSearch`, `SubmitAdd`
//! - **Lifecycle**: `Escape`, `CloseFocus`
//!
//! One shared text buffer backs both submit affordances, like a combined
//! search-or-add field: a search submit applies the buffer as the filter and
//! keeps it, an add submit feeds the buffer to the roster and clears it.

use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Flips the favorite flag of the selected entry.
    ToggleFavorite,
    /// Deletes the selected entry.
    DeleteSelected,
    /// Opens the shared text field with typing focus.
    StartInput,
    /// Refocuses the text field (from navigating focus).
    FocusInput,
    /// Closes the text field without changing the applied filter.
    ExitInput,
    /// Applies the buffer as the search filter (the "search" affordance).
    SubmitSearch,
    /// Adds the buffer as a new entry and clears it (the "add" affordance).
    SubmitAdd,
    /// Appends a character to the text buffer.
    Char(char),
    /// Removes the last character from the text buffer.
    Backspace,
    /// Clears the applied filter and the buffer (normal mode).
    Escape,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions.
/// It pattern-matches on event types, calls state mutation methods, and
/// collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions). The render flag is `false` when the
/// event was ignored in the current mode or left the state unchanged.
///
/// # Errors
///
/// Currently infallible; the `Result` return keeps the signature stable for
/// fallible state operations.
///
/// # Example
///
/// ```rust
/// use zroster::{handle_event, AppState, Event};
/// use zroster::Theme;
///
/// let mut state = AppState::new(vec!["Ann".to_string()], Theme::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// # Ok::<(), zroster::ZrosterError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    use super::modes::{InputFocus, InputMode};

    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleFavorite => {
            let Some(id) = state.selected_entry().map(|entry| entry.id) else {
                tracing::debug!("no entry selected to toggle");
                return Ok((false, vec![]));
            };
            state.toggle_favorite(id);
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(id) = state.selected_entry().map(|entry| entry.id) else {
                tracing::debug!("no entry selected to delete");
                return Ok((false, vec![]));
            };
            state.delete_entry(id);
            Ok((true, vec![]))
        }
        Event::StartInput => {
            tracing::debug!("opening text field");
            state.input_mode = InputMode::Input(InputFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            if !matches!(state.input_mode, InputMode::Input(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Input(InputFocus::Typing);
            Ok((true, vec![]))
        }
        Event::ExitInput => {
            if !matches!(state.input_mode, InputMode::Input(_)) {
                return Ok((false, vec![]));
            }
            tracing::debug!(buffer = %state.input_buffer, "closing text field");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if !matches!(state.input_mode, InputMode::Input(_)) {
                return Ok((false, vec![]));
            }

            // The buffer survives a search submit; only an add clears it.
            let query = state.input_buffer.clone();
            state.set_search_query(query);

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Input(InputFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::SubmitAdd => {
            if !matches!(state.input_mode, InputMode::Input(_)) {
                return Ok((false, vec![]));
            }

            let raw = std::mem::take(&mut state.input_buffer);
            state.add_entry(&raw);
            state.input_mode = InputMode::Input(InputFocus::Typing);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Input(InputFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.input_buffer.push(*c);
            tracing::trace!(buffer = %state.input_buffer, char = %c, "text buffer updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Input(InputFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.input_buffer.pop();
            Ok((true, vec![]))
        }
        Event::Escape => {
            tracing::debug!(query = %state.search_query, "clearing filter");
            state.input_mode = InputMode::Normal;
            state.input_buffer = String::new();
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputFocus, InputMode};
    use crate::ui::theme::Theme;

    fn state_with(names: &[&str]) -> AppState {
        AppState::new(
            names.iter().map(|n| (*n).to_string()).collect(),
            Theme::default(),
        )
    }

    fn drive(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state_with(&["Ann"]);
        let (should_render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!should_render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn chars_are_ignored_outside_typing_focus() {
        let mut state = state_with(&["Ann"]);
        let (should_render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!should_render);
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn typing_edits_the_buffer_without_refiltering() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "bo");

        assert_eq!(state.input_buffer, "bo");
        // Filtering only changes on an explicit search submit.
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible_entries().len(), 2);
    }

    #[test]
    fn submit_search_applies_buffer_and_keeps_it() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "bo");
        drive(&mut state, &[Event::SubmitSearch]);

        assert_eq!(state.search_query, "bo");
        assert_eq!(state.input_buffer, "bo");
        assert_eq!(state.visible_entries().len(), 1);
        assert_eq!(state.input_mode, InputMode::Input(InputFocus::Navigating));
    }

    #[test]
    fn submit_search_with_empty_buffer_clears_filter() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "bo");
        drive(&mut state, &[Event::SubmitSearch]);

        drive(&mut state, &[Event::FocusInput, Event::Backspace, Event::Backspace]);
        drive(&mut state, &[Event::SubmitSearch]);

        assert!(state.search_query.is_empty());
        assert_eq!(state.visible_entries().len(), 2);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn submit_add_appends_entry_and_clears_buffer() {
        let mut state = state_with(&["Ann"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "Dave");
        drive(&mut state, &[Event::SubmitAdd]);

        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.entries[1].name, "Dave");
        assert!(state.input_buffer.is_empty());
        assert_eq!(state.input_mode, InputMode::Input(InputFocus::Typing));
    }

    #[test]
    fn submit_add_with_blank_buffer_is_silent_noop() {
        let mut state = state_with(&["Ann"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "   ");
        drive(&mut state, &[Event::SubmitAdd]);

        assert_eq!(state.entries.len(), 1);
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn add_does_not_disturb_active_filter() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "a");
        drive(&mut state, &[Event::SubmitSearch, Event::FocusInput]);

        // Replace the buffer with a name that misses the filter.
        drive(&mut state, &[Event::Backspace]);
        type_text(&mut state, "Bo");
        drive(&mut state, &[Event::SubmitAdd]);

        assert_eq!(state.search_query, "a");
        assert_eq!(state.entries.len(), 3);
        // The new entry exists but is filtered out of the visible view.
        assert_eq!(state.visible_entries().len(), 1);
    }

    #[test]
    fn toggle_and_delete_target_the_selected_entry() {
        let mut state = state_with(&["Ann", "Bob", "Cara"]);
        drive(&mut state, &[Event::KeyDown, Event::ToggleFavorite]);

        // Bob became a favorite and moved to the head of the visible sequence.
        assert!(state.entries[1].favorite);
        assert_eq!(state.visible_entries()[0].name, "Bob");

        drive(&mut state, &[Event::DeleteSelected]);
        assert_eq!(state.entries.len(), 2);
    }

    #[test]
    fn row_controls_are_noops_with_nothing_visible() {
        let mut state = state_with(&[]);
        let (should_render, _) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(!should_render);
        let (should_render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!should_render);
    }

    #[test]
    fn exit_input_keeps_applied_filter() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "ann");
        drive(&mut state, &[Event::SubmitSearch, Event::ExitInput]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "ann");
        assert_eq!(state.visible_entries().len(), 1);
    }

    #[test]
    fn escape_clears_filter_and_buffer() {
        let mut state = state_with(&["Ann", "Bob"]);
        drive(&mut state, &[Event::StartInput]);
        type_text(&mut state, "ann");
        drive(&mut state, &[Event::SubmitSearch, Event::ExitInput, Event::Escape]);

        assert!(state.search_query.is_empty());
        assert!(state.input_buffer.is_empty());
        assert_eq!(state.visible_entries().len(), 2);
    }
}
