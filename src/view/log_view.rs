use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::CommitEntry;
use crate::repository::HistorySource;
use crate::viewmodel::{AppViewModel, FOOTER_ROWS, HEADER_ROWS, SEARCH_ROWS};

use super::sidebar_view;
use super::ui_fmt::{self, graph_spans, truncate_text};
use super::Theme;

const HINTS: &str = "up/down k/j move | enter files | / search | tab sidebar | q quit";

pub fn render<S: HistorySource>(frame: &mut Frame, app: &AppViewModel<S>, theme: &Theme) {
    let area = frame.area();
    let mut constraints = vec![
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(FOOTER_ROWS),
    ];
    if app.is_search_mode() {
        constraints.push(Constraint::Length(SEARCH_ROWS));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_header(frame, app, theme, chunks[0]);
    render_body(frame, app, theme, chunks[1]);
    render_footer(frame, app, theme, chunks[2]);
    if let Some(query) = app.search_query() {
        render_search(frame, query, theme, chunks[3]);
    }
}

fn render_body<S: HistorySource>(
    frame: &mut Frame,
    app: &AppViewModel<S>,
    theme: &Theme,
    area: Rect,
) {
    let sidebar = ui_fmt::sidebar_width(area.width).filter(|_| app.show_sidebar());
    match sidebar {
        None => render_list(frame, app, theme, area),
        Some(width) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(width)])
                .split(area);
            render_list(frame, app, theme, chunks[0]);
            sidebar_view::render(frame, app, theme, chunks[1]);
        }
    }
}

fn render_header<S: HistorySource>(
    frame: &mut Frame,
    app: &AppViewModel<S>,
    theme: &Theme,
    area: Rect,
) {
    let bar = Style::default().bg(theme.bar_bg);
    let mut left = vec![
        Span::raw(" "),
        Span::styled("arbor", bar.fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", bar.fg(theme.text_dim)),
        Span::styled(app.repo_path(), bar.fg(theme.text)),
    ];
    let filter = app.log.filter();
    if filter.is_active() {
        left.push(Span::styled(format!(" /{}", filter.query()), bar.fg(theme.accent_alt)));
    }
    if !app.head_name().is_empty() {
        left.push(Span::raw(" "));
        left.push(Span::styled(
            format!(" branch {} ", app.head_name()),
            Style::default().fg(theme.highlight_text).bg(theme.accent),
        ));
    }

    let right = format!(
        "{} visible | {} loaded ",
        app.log.list_len(),
        app.log.loaded()
    );
    render_bar(frame, area, Line::from(left), Span::styled(right, bar.fg(theme.text_dim)), theme);
}

fn render_footer<S: HistorySource>(
    frame: &mut Frame,
    app: &AppViewModel<S>,
    theme: &Theme,
    area: Rect,
) {
    let bar = Style::default().bg(theme.bar_bg);
    let log = &app.log;

    let total = log.list_len();
    let position = if total > 0 { log.viewport().cursor() + 1 } else { 0 };
    let more = if log.has_more() { "+" } else { "" };
    let mut status = vec![
        format!("{}/{}", position, total),
        format!("loaded {}{}", log.loaded(), more),
    ];
    if log.filter().is_active() {
        status.insert(0, format!("filter {:?}", log.filter().query()));
    }
    let status = format!("{} ", status.join(" | "));

    let room = (area.width as usize).saturating_sub(status.chars().count() + 2);
    let hints = Line::from(vec![
        Span::raw(" "),
        Span::styled(truncate_text(HINTS, room), bar.fg(theme.text_muted)),
    ]);
    render_bar(frame, area, hints, Span::styled(status, bar.fg(theme.accent)), theme);
}

/// Left-aligned content with a right-aligned status on one bar row
fn render_bar(frame: &mut Frame, area: Rect, left: Line, right: Span, theme: &Theme) {
    let style = Style::default().fg(theme.text).bg(theme.bar_bg);
    let right_width = (right.content.chars().count() as u16).min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);
    frame.render_widget(Paragraph::new(left).style(style), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right)).style(style).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_search(frame: &mut Frame, query: &str, theme: &Theme, area: Rect) {
    let prompt = Paragraph::new(Line::from(vec![
        Span::raw(" /"),
        Span::styled(query, Style::default().fg(theme.accent_alt)),
        Span::styled("█", Style::default().fg(theme.text)),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.bar_bg));
    frame.render_widget(prompt, area);
}

fn render_list<S: HistorySource>(
    frame: &mut Frame,
    app: &AppViewModel<S>,
    theme: &Theme,
    area: Rect,
) {
    let log = &app.log;
    let cursor = log.viewport().cursor();

    let mut lines: Vec<Line> = log
        .visible_entries()
        .map(|(i, entry)| render_row(entry, i == cursor, i % 2 == 1, theme))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No commits",
            Style::default().fg(theme.text_dim),
        )));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme.bg));
    frame.render_widget(list, area);
}

fn render_row<'a>(entry: &'a CommitEntry, selected: bool, alt: bool, theme: &Theme) -> Line<'a> {
    let (bg, subject_fg, author_fg) = if selected {
        (theme.highlight_bg, theme.highlight_text, theme.highlight_text)
    } else if alt {
        (theme.bg_alt, theme.text, theme.text_muted)
    } else {
        (theme.bg, theme.text, theme.text_muted)
    };
    let base = Style::default().bg(bg);

    let mut spans: Vec<Span<'a>> = graph_spans(&entry.row, theme, bg);
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(
        entry.short_id.as_str(),
        base.fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(
        entry.subject(),
        base.fg(subject_fg).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" - ", base.fg(theme.text_dim)));
    spans.push(Span::styled(entry.author(), base.fg(author_fg)));

    Line::from(spans).style(base)
}
