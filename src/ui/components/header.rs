//! Header component renderer.
//!
//! This module renders the title bar plus the whole-roster counts summary:
//! how many entries are favorites and how many are not, independent of the
//! active filter, with the applied filter echoed when one is set.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at the specified row.
///
/// Draws two lines: the centered bold title, then the counts summary line
/// (favorite marker, favorite count, dot marker, non-favorite count). Both
/// lines are padded to fill the terminal width.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information (title, counts summary)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let summary_len = header.summary.chars().count();
    let summary_padding = (cols.saturating_sub(summary_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.favorite_fg));
    print!("{}", " ".repeat(summary_padding));
    print!("{}", header.summary);
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(summary_padding + summary_len))
    );
    print!("{}", Theme::reset());

    row + 2
}
