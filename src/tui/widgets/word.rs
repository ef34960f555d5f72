use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::store::KeyValueStore;
use crate::tui::App;
use crate::wordofday::{word_for_date, WordEntry};

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Word card
            Constraint::Min(0),    // Drill
        ])
        .split(area);

    let entry = word_for_date(&app.words, app.today);

    draw_word(f, app, entry, chunks[0]);
    draw_drill(f, app, entry, chunks[1]);
}

fn draw_word<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<S>,
    entry: Option<&WordEntry>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Word of the Day ")
        .title_style(Style::default().fg(Color::Yellow));

    let Some(entry) = entry else {
        let paragraph = Paragraph::new("No word list loaded")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut headline = vec![Span::styled(
        &entry.word,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if app.settings.show_pronunciation {
        headline.push(Span::raw("  "));
        headline.push(Span::styled(
            &entry.pronunciation,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut text = vec![
        Line::from(headline),
        Line::from(vec![
            Span::styled(&entry.word_type, Style::default().fg(Color::Cyan)),
            Span::raw(" - "),
            Span::styled(&entry.translation, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Example: ", Style::default().fg(Color::Gray)),
            Span::styled(&entry.example, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("         "),
            Span::styled(
                &entry.example_translation,
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if !entry.note.is_empty() {
        text.push(Line::from(vec![
            Span::styled("Note: ", Style::default().fg(Color::Gray)),
            Span::styled(&entry.note, Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_drill<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<S>,
    entry: Option<&WordEntry>,
    area: Rect,
) {
    let title = match app.drill_mode {
        Some(mode) => format!(" Drill: {} ", mode.label()),
        None => " Drills ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan));

    let (Some(entry), Some(mode)) = (entry, app.drill_mode) else {
        let line = Line::from(vec![
            Span::styled("1", Style::default().fg(Color::Cyan)),
            Span::raw(" Translation  "),
            Span::styled("2", Style::default().fg(Color::Cyan)),
            Span::raw(" Example  "),
            Span::styled("3", Style::default().fg(Color::Cyan)),
            Span::raw(" Usage"),
        ]);
        let paragraph = Paragraph::new(line).block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let drill = entry.drill(mode);

    let mut text = vec![
        Line::from(Span::styled(
            drill.question,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.drill_revealed {
        text.push(Line::from(vec![
            Span::styled("Answer: ", Style::default().fg(Color::Gray)),
            Span::styled(drill.answer, Style::default().fg(Color::Green)),
        ]));
        // Notes can span several lines (model sentences, variations)
        for note_line in drill.note.lines() {
            text.push(Line::from(Span::styled(
                note_line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        text.push(Line::from(Span::styled(
            "Press r to reveal",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
