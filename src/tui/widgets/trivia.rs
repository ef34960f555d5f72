use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::store::KeyValueStore;
use crate::tui::App;

pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = match app.deck.filter {
        Some(country) => format!(" Trivia ({}) ", country.label()),
        None => " Trivia (all countries) ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Magenta));

    let fact = app
        .current_fact_id
        .and_then(|id| app.deck.fact_by_id(id));

    let Some(fact) = fact else {
        let paragraph = Paragraph::new("No facts for this filter. Press c to change country.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let favorite = app.favorites.contains(&fact.id);
    let star = if favorite { "★ " } else { "" };

    let mut text = vec![
        Line::from(vec![
            Span::styled(star, Style::default().fg(Color::Yellow)),
            Span::styled(
                &fact.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("[{}]", fact.country.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", fact.category),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(fun_meter(fact.fun_rating), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(&fact.fact, Style::default().fg(Color::White))),
    ];

    if let Some(source) = &fact.source {
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Source: ", Style::default().fg(Color::Gray)),
            Span::styled(source, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn fun_meter(rating: i32) -> String {
    "✦".repeat(rating.clamp(1, 5) as usize)
}
