//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. It handles mode switching
//! (normal, input, empty state) and ensures proper layout filling.
//!
//! The renderer follows a two-step process: transform `AppState` into a
//! `UIViewModel`, then delegate to the specialized component renderers.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate rendering mode (normal, input, or empty state).
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// Prints ANSI-styled output to stdout. Does not clear the screen or manage
/// cursor position beyond explicit positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// Chooses the rendering strategy based on view model state:
/// - Empty state: header plus a centered message
/// - Input mode: header, input bar, list, footer
/// - Normal mode: header, list, footer
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_mode(vm, empty, theme, cols, rows);
        return;
    }

    if let Some(input) = &vm.input_bar {
        components::render_input_mode(vm, input, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
