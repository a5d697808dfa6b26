use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::model::RenderedRow;

use super::Theme;

/// Graph glyphs for a row, coloured by column
pub fn graph_spans(row: &RenderedRow, theme: &Theme, bg: Color) -> Vec<Span<'static>> {
    row.iter()
        .map(|cell| {
            Span::styled(
                cell.symbol.as_str(),
                Style::default().fg(theme.branch_color(cell.color)).bg(bg),
            )
        })
        .collect()
}

/// Shorten `text` to at most `max_width` characters, ending in `...` when
/// there is room for it
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let mut out: String = text.chars().take(max_width - 3).collect();
    out.push_str("...");
    out
}

/// Width of the detail sidebar for a terminal `width` columns wide, or
/// `None` when it does not fit
pub fn sidebar_width(width: u16) -> Option<u16> {
    (width >= 60).then(|| (width / 3).max(30))
}
