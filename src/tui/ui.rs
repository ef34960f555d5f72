use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{dashboard, gender, study, trivia, word};
use super::{App, View};
use crate::store::KeyValueStore;

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_help_bar(f, app, chunks[2]);
}

fn draw_tabs<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let tab_titles = vec!["Dashboard", "Study", "Gender", "Trivia", "Word of Day"];
    let selected = match app.view {
        View::Dashboard => 0,
        View::Study => 1,
        View::Gender => 2,
        View::Trivia => 3,
        View::Word => 4,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(" Wortschatz "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    match app.view {
        View::Dashboard => dashboard::draw(f, app, area),
        View::Study => study::draw(f, app, area),
        View::Gender => gender::draw(f, app, area),
        View::Trivia => trivia::draw(f, app, area),
        View::Word => word::draw(f, app, area),
    }
}

fn draw_help_bar<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" Views  "),
    ];

    match app.view {
        View::Dashboard => {}
        View::Study => {
            spans.extend(vec![
                Span::styled("<Space>", Style::default().fg(Color::Cyan)),
                Span::raw(" Flip  "),
                Span::styled("j/k", Style::default().fg(Color::Cyan)),
                Span::raw(" Cards  "),
                Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
                Span::raw(" Mastered/Learning/Practice  "),
                Span::styled("n", Style::default().fg(Color::Cyan)),
                Span::raw(" New session  "),
            ]);
        }
        View::Gender => {
            spans.extend(vec![
                Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
                Span::raw(" der/die/das  "),
                Span::styled("n", Style::default().fg(Color::Cyan)),
                Span::raw(" Next  "),
            ]);
        }
        View::Trivia => {
            spans.extend(vec![
                Span::styled("n", Style::default().fg(Color::Cyan)),
                Span::raw(" Next  "),
                Span::styled("f", Style::default().fg(Color::Cyan)),
                Span::raw(" Favorite  "),
                Span::styled("c", Style::default().fg(Color::Cyan)),
                Span::raw(" Country  "),
            ]);
        }
        View::Word => {
            spans.extend(vec![
                Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
                Span::raw(" Drills  "),
                Span::styled("r", Style::default().fg(Color::Cyan)),
                Span::raw(" Reveal  "),
                Span::styled("<Esc>", Style::default().fg(Color::Cyan)),
                Span::raw(" Card  "),
            ]);
        }
    }

    spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    f.render_widget(help, area);
}
