use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::repository::HistorySource;
use crate::util::format_commit_time;
use crate::viewmodel::AppViewModel;

use super::Theme;

pub fn render<S: HistorySource>(
    frame: &mut Frame,
    app: &AppViewModel<S>,
    theme: &Theme,
    area: Rect,
) {
    let panel = Style::default().fg(theme.text).bg(theme.panel_bg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.panel_border).bg(theme.panel_bg))
        .style(panel);

    let Some(entry) = app.log.selected_entry() else {
        let empty = Paragraph::new("No commit selected").block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            entry.short_id.as_str(),
            Style::default().fg(theme.accent_alt).add_modifier(Modifier::BOLD),
        )),
        Line::from(entry.author()),
        Line::from(format_commit_time(entry.time())),
        Line::default(),
    ];
    lines.extend(entry.commit.message.trim().lines().map(Line::from));

    if app.show_files() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Changed files",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        for path in app.log.selected_files().unwrap_or_default() {
            lines.push(Line::from(format!("- {}", path)));
        }
    }

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(details, area);
}
