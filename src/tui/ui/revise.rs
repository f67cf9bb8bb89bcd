//! Revise with Yoda page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;
use crate::tui::screens::{
    ReviseScreen, PRACTICE_OPTIONS, PRACTICE_QUESTION, REVISE_SUMMARY, REVISE_SUMMARY_TOPIC,
};
use crate::tui::types::ReviseTab;

/// Renders the screen

pub fn render_revise(f: &mut Frame, app: &App) {
    let size = f.size();

    let screen = match &app.revise_screen {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Tabs
            Constraint::Min(10),    // Tab body
            Constraint::Length(3),  // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new("Revise with Yoda 🧙")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Tabs
    let tab_line = Line::from(vec![
        tab_span(ReviseTab::Notes, screen.tab),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        tab_span(ReviseTab::ShortClips, screen.tab),
    ]);
    let tabs = Paragraph::new(tab_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, chunks[1]);

    // Tab body
    match screen.tab {
        ReviseTab::Notes => render_notes(f, chunks[2], screen),
        ReviseTab::ShortClips => render_short_clips(f, chunks[2]),
    }

    // Help text
    let help_text = "t: Switch Tab | ↑↓: Choose Option | b/Esc: Back | q: Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Style one tab label, highlighting the active tab
fn tab_span(tab: ReviseTab, active: ReviseTab) -> Span<'static> {
    if tab == active {
        Span::styled(
            tab.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(tab.label(), Style::default().fg(Color::DarkGray))
    }
}

/// Render the AI summary and the practice question
fn render_notes(f: &mut Frame, area: Rect, screen: &ReviseScreen) {
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // AI summary
            Constraint::Min(8),    // Practice question
            Constraint::Length(1), // Reminder link
        ])
        .split(area);

    // AI summary
    let summary_lines = vec![
        Line::from(Span::styled(
            REVISE_SUMMARY_TOPIC,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(REVISE_SUMMARY),
    ];
    let summary = Paragraph::new(summary_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("AI Summary"));
    f.render_widget(summary, body[0]);

    // Practice question
    let mut practice_items: Vec<ListItem> = vec![
        ListItem::new(Line::from(Span::styled(
            PRACTICE_QUESTION,
            Style::default().fg(Color::White),
        ))),
        ListItem::new(Line::from("")),
    ];
    practice_items.extend(PRACTICE_OPTIONS.iter().enumerate().map(|(i, option)| {
        let content = if i == screen.selected_option {
            Line::from(vec![
                Span::styled("→ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    *option,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(*option, Style::default().fg(Color::White)),
            ])
        };
        ListItem::new(content)
    }));

    let practice = List::new(practice_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Practice Question"),
    );
    f.render_widget(practice, body[1]);

    // Reminder link
    let reminder = Paragraph::new("Set reminder to revise everyday")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(reminder, body[2]);
}

/// Render the short clips placeholder
fn render_short_clips(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Short lecture clips are coming soon",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Short Lecture Clips"),
    );
    f.render_widget(placeholder, area);
}
