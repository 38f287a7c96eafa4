// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, status bar, and pane rendering helpers used by TUI drawing.
const MIN_LIST_WIDTH: u16 = 26;
const MIN_PAGE: usize = 3;
const KEY_HINTS: &str = "j/k move  l enter  h up  / filter  . hidden  q quit";

fn list_pane_width(width: u16) -> u16 {
    (width / 3).max(MIN_LIST_WIDTH).min(width)
}

/// Inner size of the bordered preview pane for a terminal of `width` x `height`.
fn preview_viewport(width: u16, height: u16) -> Viewport {
    let preview_width = width.saturating_sub(list_pane_width(width)).saturating_sub(2);
    let preview_height = height.saturating_sub(1).saturating_sub(2);
    Viewport::new(preview_width, preview_height)
}

fn page_size(preview_height: u16) -> usize {
    (preview_height as usize / 3).max(MIN_PAGE)
}

fn list_item(row: &ListEntry) -> ListItem<'static> {
    if row.is_dir() {
        let style = Style::default().fg(DIR_COLOR).add_modifier(Modifier::BOLD);
        ListItem::new(Line::from(Span::styled(format!("{}/", row.name()), style)))
    } else {
        ListItem::new(Line::from(row.name().to_owned()))
    }
}

fn preview_body(app: &App, height: usize) -> Text<'static> {
    let state = app.pipeline.state();
    if state.is_loading() {
        return Text::from(Line::from(Span::styled(LOADING_TEXT, Style::default().fg(STATUS_FG))));
    }
    if state.content().is_empty() {
        return Text::from(Line::from(Span::styled(EMPTY_TEXT, Style::default().fg(STATUS_FG))));
    }
    let lines = app.preview_text.lines.iter().skip(app.preview_offset).take(height).cloned();
    Text::from(lines.collect::<Vec<_>>())
}

fn status_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    let position = match app.visible.len() {
        0 => "0/0".to_owned(),
        total => format!("{}/{total}", app.selected + 1),
    };
    spans.push(Span::styled(format!(" {position} "), Style::default().fg(STATUS_FG)));

    if app.filter_editing || !app.filter.is_empty() {
        let cursor = if app.filter_editing { "_" } else { "" };
        spans.push(Span::styled(
            format!(" /{}{cursor} ", app.filter),
            Style::default().fg(FILTER_COLOR),
        ));
    }
    if app.show_hidden {
        spans.push(Span::styled(" hidden ", Style::default().fg(STATUS_FG)));
    }
    let tail = match &app.status {
        Some(message) => Span::styled(format!(" {message}"), Style::default().fg(Color::Red)),
        None => Span::styled(format!(" {KEY_HINTS}"), Style::default().fg(STATUS_FG)),
    };
    spans.push(tail);
    Line::from(spans)
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(list_pane_width(area.width)), Constraint::Min(0)])
        .split(main_area);

    let items: Vec<ListItem<'static>> = app.visible_entries().map(list_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", app.cwd().display())))
        .highlight_style(Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD));
    let mut list_state = ListState::default();
    if !app.visible.is_empty() {
        list_state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, panes[0], &mut list_state);

    let title = app.selected_entry().map(|row| format!(" {} ", row.name())).unwrap_or_default();
    let preview_block = Block::default().borders(Borders::ALL).title(title);
    let inner_height = preview_block.inner(panes[1]).height as usize;
    let preview = Paragraph::new(preview_body(app, inner_height)).block(preview_block);
    frame.render_widget(preview, panes[1]);

    frame.render_widget(Paragraph::new(status_line(app)), status_area);
}
