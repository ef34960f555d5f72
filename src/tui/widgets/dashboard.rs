use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::store::KeyValueStore;
use crate::tui::App;
use crate::wordofday::word_for_date;

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Stats + session row
            Constraint::Length(4), // Word of the day teaser
            Constraint::Min(0),    // Categories
        ])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_stats(f, app, top_chunks[0]);
    draw_session(f, app, top_chunks[1]);
    draw_word_teaser(f, app, chunks[1]);
    draw_categories(f, app, chunks[2]);
}

fn draw_stats<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = &app.stats;

    let text = vec![
        Line::from(vec![
            Span::styled("Cards: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.total_items),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("New: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.new_items),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Learning: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.learning),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled("Needs practice: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.needs_practice),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled("Mastered: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.mastered),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Due today: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.due_today),
                Style::default().fg(if stats.due_today > 0 {
                    Color::Yellow
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Avg streak: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}", stats.avg_streak),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Stats ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_session<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (done, total) = app.session_progress();

    let mut text = vec![Line::from(vec![
        Span::styled("Progress: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", done, total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            progress_bar(done, total),
            Style::default().fg(Color::Green),
        ),
    ])];

    match app.current_item() {
        Some(item) => {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Up next: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    item.front(app.settings.direction),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
        None if total > 0 => {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "Session complete",
                Style::default().fg(Color::Green),
            )));
        }
        None => {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "No cards to study",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Today ({}) ", app.today.format("%b %d")))
        .title_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_word_teaser<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = match word_for_date(&app.words, app.today) {
        Some(entry) => Line::from(vec![
            Span::styled(
                &entry.word,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(&entry.translation, Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(
                format!("({})", entry.word_type),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            "No word list loaded",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Word of the Day ")
        .title_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn draw_categories<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|(name, count)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", name), Style::default().fg(Color::White)),
                Span::styled(format!("{} cards", count), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Categories ")
        .title_style(Style::default().fg(Color::Cyan));

    if items.is_empty() {
        let paragraph = Paragraph::new("Catalog is empty. Load one with: wortschatz catalog load")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
    } else {
        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }
}

fn progress_bar(done: usize, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let width = 10usize;
    let filled = (done * width) / total;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
