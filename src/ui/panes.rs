//! Rendering logic for each TUI pane

use crate::list::CursorList;
use crate::ui::app::InputForm;
use crate::ui::theme::DEFAULT_THEME;
use crate::workbench::CommandLog;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset against the content size and return the visible
/// window. `usize::MAX` means "stick to the bottom".
fn visible_range(total_items: usize, area: Rect, scroll_offset: &mut usize) -> (usize, usize) {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
    (*scroll_offset, visible_height)
}

/// Render the roster pane: the active item header plus the numbered chain
/// in order, with the active row highlighted
pub fn render_roster_pane(
    frame: &mut Frame,
    area: Rect,
    list: &CursorList,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Roster ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines: Vec<Line> = Vec::new();

    let active_span = match list.peek_active() {
        Some(record) => Span::styled(record.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        None => Span::styled("NULL", Style::default().fg(DEFAULT_THEME.comment)),
    };
    lines.push(Line::from(vec![
        Span::styled(
            "Active item: ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        active_span,
    ]));
    lines.push(Line::from(""));

    if list.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty list)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        let active_position = list.active_position();
        for (position, record) in list.iter().enumerate() {
            let is_active_row = active_position == Some(position);
            let style = if is_active_row {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .bg(DEFAULT_THEME.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let marker = if is_active_row { "▶" } else { " " };
            lines.push(Line::from(Span::styled(
                format!("{} {}. {}", marker, position + 1, record),
                style,
            )));
        }
    }

    let total_items = lines.len();
    let (offset, visible_height) = visible_range(total_items, area, scroll_offset);

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    let list_widget = List::new(visible_items).block(block);
    frame.render_widget(list_widget, area);
}

/// Render the command log pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &CommandLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no commands yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let (offset, visible_height) = visible_range(log.len(), area, scroll_offset);

    let visible_items: Vec<ListItem> = log
        .entries()
        .iter()
        .skip(offset)
        .take(visible_height)
        .map(|line| {
            let style = if line.contains("failed") || line.starts_with("Unknown option") {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let list_widget = List::new(visible_items).block(block);
    frame.render_widget(list_widget, area);
}

/// Render the record entry form shown while a command is collecting input
pub fn render_input_pane(frame: &mut Frame, area: Rect, form: &InputForm) {
    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 0, 0, 0));

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", form.prompt()),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::styled(form.buffer(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    list: &CursorList,
    is_input: bool,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    // Left side: item count and the last outcome message
    let count_text = format!(" {} item(s) ", list.len());
    let left_spans = vec![
        Span::styled(
            count_text,
            Style::default()
                .bg(if is_input {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" 0-9/A ", key_style),
        Span::styled(" command ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" M ", key_style),
        Span::styled(" menu ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if is_input {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ⌨ INPUT ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
