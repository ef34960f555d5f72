use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::KeyValueStore;
use crate::tui::App;

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Min(0),    // Question
        ])
        .split(area);

    draw_score(f, app, chunks[0]);
    draw_question(f, app, chunks[1]);
}

fn draw_score<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", app.quiz.correct, app.quiz.total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("({:.0}%)", app.quiz.accuracy()),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Round ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}

fn draw_question<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Der, die oder das? ")
        .title_style(Style::default().fg(Color::Yellow));

    let Some(noun) = app.quiz.current() else {
        let paragraph = Paragraph::new("No nouns loaded")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("___ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                &noun.noun,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("[{}]", noun.category), Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(
                difficulty_stars(noun.difficulty),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];

    if app.quiz.is_answered() {
        let correct = app.last_guess == Some(noun.gender);
        let (verdict, color) = if correct {
            ("Richtig!", Color::Green)
        } else {
            ("Leider nein.", Color::Red)
        };

        text.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(vec![
            Span::styled(
                format!("{} {}", noun.gender.as_str(), noun.noun),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("  (plural: die {})", noun.plural),
                Style::default().fg(Color::Gray),
            ),
        ]));
        text.push(Line::from(Span::styled(
            &noun.meaning,
            Style::default().fg(Color::White),
        )));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Press n for the next noun",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        text.push(Line::from(vec![
            Span::styled("1", Style::default().fg(Color::Cyan)),
            Span::raw(" der  "),
            Span::styled("2", Style::default().fg(Color::Cyan)),
            Span::raw(" die  "),
            Span::styled("3", Style::default().fg(Color::Cyan)),
            Span::raw(" das"),
        ]));
    }

    let paragraph = Paragraph::new(text).block(block);
    f.render_widget(paragraph, area);
}

fn difficulty_stars(difficulty: i32) -> String {
    let filled = difficulty.clamp(1, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
