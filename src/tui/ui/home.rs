//! Home page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::HomeCard;

/// Renders the screen

pub fn render_home(f: &mut Frame, app: &App) {
    let size = f.size();

    let screen = match &app.home_screen {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Account line
            Constraint::Min(8),    // Course cards
            Constraint::Length(8), // AI suggestions
            Constraint::Length(3), // Status message
            Constraint::Length(4), // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new("MicroLearn - Courses for you")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Account line
    let account_text = match &screen.user {
        Some(user) => {
            let who = if user.name.is_empty() {
                user.email.as_str()
            } else {
                user.name.as_str()
            };
            match user.last_login_display() {
                Some(last) => format!("Signed in as {} | Last login: {}", who, last),
                None => format!("Signed in as {}", who),
            }
        }
        None => "Signed in".to_string(),
    };
    let account_widget = Paragraph::new(account_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Account"));
    f.render_widget(account_widget, chunks[1]);

    // Course cards
    let mut card_items: Vec<ListItem> = HomeCard::all()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let content = if i == screen.selected_index {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        card.label(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(card.label(), Style::default().fg(Color::White)),
                ])
            };
            ListItem::new(content)
        })
        .collect();

    // Teaser cards with no behavior yet
    for teaser in ["Learn for new role", "General skill/English Proficiency"] {
        card_items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(teaser, Style::default().fg(Color::DarkGray)),
        ])));
    }

    let cards = List::new(card_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Courses for you")
            .style(Style::default()),
    );
    f.render_widget(cards, chunks[2]);

    // AI suggestions fetched from the dashboard endpoint
    if screen.suggestions.is_empty() {
        let placeholder = Paragraph::new("No suggestions yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Recommended by AI"),
            );
        f.render_widget(placeholder, chunks[3]);
    } else {
        let suggestion_items: Vec<ListItem> = screen
            .suggestions
            .iter()
            .map(|s| {
                let content = vec![
                    Line::from(vec![
                        Span::styled(s.title.as_str(), Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!(" ({})", s.level),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            s.short_description.as_str(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ];
                ListItem::new(content)
            })
            .collect();

        let suggestions = List::new(suggestion_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recommended by AI"),
        );
        f.render_widget(suggestions, chunks[3]);
    }

    // Status message
    let status_text = screen
        .status_message
        .as_ref()
        .map(|s| s.as_str())
        .unwrap_or("");
    let status_color = if screen.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let status_widget = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_widget, chunks[4]);

    // Help text
    let selected = screen.selected_card();
    let help_text = vec![
        Line::from(selected.description()).style(Style::default().fg(Color::White)),
        Line::from(vec![
            Span::styled("Navigation: ", Style::default().fg(Color::DarkGray)),
            Span::styled("↑↓ or j/k", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Open: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Logout: ", Style::default().fg(Color::DarkGray)),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Quit: ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Red)),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[5]);
}
