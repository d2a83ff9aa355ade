//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input. Actions bridge
//! pure state transformations and effectful operations against the Zellij API.
//!
//! The roster itself lives entirely in memory, so the only remaining effect is
//! dismissing the pane; everything else is a state mutation followed by a
//! re-render.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    /// The roster state is discarded with the pane.
    CloseFocus,
}
