//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component is responsible for rendering a specific part of
//! the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar and whole-roster counts summary
//! - [`footer`]: Help text and keybinding hints
//! - [`input`]: Shared text field box (border, buffer text)
//! - [`list`]: Roster rows with favorite markers and match highlighting
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + List + Footer
//! - [`render_input_mode`]: Header + Input bar + List + Footer
//! - [`render_empty_mode`]: Header + Empty message + Footer

mod empty;
mod footer;
mod header;
mod input;
mod list;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, InputBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_bar;
use list::render_list_rows;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/list, list/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no input bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Counts summary]
/// [Border]
/// [List rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 lines for chrome; the rest goes to list rows.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_list_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the input mode layout (with the text field box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Title]
/// [Counts summary]
/// [Border]
/// [Input bar - 3 lines]
/// [List rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 9 lines for chrome (the input box takes 3).
pub fn render_input_mode(
    vm: &UIViewModel,
    input: &InputBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_bar(current_row, input, theme, cols);
    let _current_row = render_list_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the empty state layout.
///
/// Keeps the header (so the counts summary stays visible) and the footer, with
/// a centered message in between. The input bar is drawn when the text field
/// is open so the user can still type a first entry.
pub fn render_empty_mode(
    vm: &UIViewModel,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(input) = &vm.input_bar {
        current_row = render_input_bar(current_row, input, theme, cols);
    }

    render_empty_state(current_row + 1, empty, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
