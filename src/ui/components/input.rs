//! Input bar component renderer.
//!
//! This module renders the shared text field as a bordered box. The same
//! buffer feeds both submit affordances (apply as filter, add as entry), so
//! the box is labeled accordingly.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Renders the input box at the specified row.
///
/// Displays a 3-line bordered box containing the buffer text. The box is
/// horizontally centered with margins on both sides. When the field has
/// typing focus a cursor mark is appended to the buffer.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Find or add: ... │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
pub fn render_input_bar(row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor_mark = if input.typing { "\u{2588}" } else { "" };
    let field_text = format!(" Find or add: {}{}", input.buffer, cursor_mark);
    let padding = inner_width.saturating_sub(field_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("\u{2502}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{field_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
