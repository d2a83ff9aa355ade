//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction.
//! These types determine which keybindings are active and how typed characters
//! are processed.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Input**: The shared text field is open, with typing or result
//!   navigation focus
//!
//! The same text field feeds both submit affordances: applying the buffer as
//! the search filter, and adding the buffer as a new roster entry.

/// Focus state within input mode.
///
/// Determines whether keystrokes edit the text field or navigate the filtered
/// list below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// User is typing in the shared text field.
    ///
    /// Accepts character input, backspace, enter (apply as search) and
    /// Ctrl+a (add as new entry).
    Typing,

    /// User is navigating the list while the field stays visible.
    ///
    /// Accepts j/k for movement, f/d for row controls, and / to return
    /// to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the input bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / or a (open text field),
    /// f (toggle favorite), d (delete), esc (clear filter), q (quit).
    Normal,

    /// Text field open, with a [`InputFocus`] variant indicating whether the
    /// user is typing or navigating results.
    Input(InputFocus),
}
