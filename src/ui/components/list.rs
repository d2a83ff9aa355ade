//! List component renderer.
//!
//! This module renders the visible roster rows. Favorites come first (the
//! partition order is fixed by the view model), each row showing a favorite
//! marker, the entry name with optional filter match highlighting, and a
//! selection background.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders all visible rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single roster row at the specified row position.
///
/// Displays one entry with:
/// - A favorite marker (`♥` for favorites, `·` otherwise)
/// - The entry name with filter match highlighting
/// - Selection background spanning the full terminal width
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Filter match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.is_favorite {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.favorite_fg));
        }
        print!(" \u{2665} ");
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!(" \u{00b7} ");
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    }

    let marker_len = 3;
    let line_len = marker_len + item.name.chars().count();
    let padding = cols.saturating_sub(line_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}
