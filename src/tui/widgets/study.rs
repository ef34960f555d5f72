use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::store::KeyValueStore;
use crate::tui::App;

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Card
        ])
        .split(area);

    draw_progress(f, app, chunks[0]);
    draw_card(f, app, chunks[1]);
}

fn draw_progress<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (done, total) = app.session_progress();
    let shown = match app.browse {
        Some(idx) => idx + 1,
        None => (done + 1).min(total.max(1)),
    };

    let mut spans = vec![
        Span::styled("Card ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", shown, total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.settings.direction.label(),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if app.browse.is_some() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "viewing",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Session ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}

fn draw_card<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Study ")
        .title_style(Style::default().fg(Color::Yellow));

    let Some(item) = app.displayed_item() else {
        let (_, total) = app.session_progress();
        let message = if total > 0 {
            "Session complete. Press n to start a fresh one."
        } else {
            "No cards to study. Load a catalog first."
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Green))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.front(app.settings.direction),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("[{}]", item.category.as_deref().unwrap_or("uncategorized")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", item.difficulty_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    if app.revealed {
        text.push(Line::from(Span::styled(
            "─".repeat(24),
            Style::default().fg(Color::DarkGray),
        )));
        text.push(Line::from(Span::styled(
            item.back(app.settings.direction),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("1", Style::default().fg(Color::Green)),
            Span::raw(" Mastered  "),
            Span::styled("2", Style::default().fg(Color::Yellow)),
            Span::raw(" Learning  "),
            Span::styled("3", Style::default().fg(Color::Red)),
            Span::raw(" Needs practice"),
        ]));
    } else {
        text.push(Line::from(Span::styled(
            "Press <Space> to reveal",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
