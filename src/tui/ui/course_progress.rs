//! Course progress page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::screens::{COURSE_MODULES, COURSE_PROGRESS_PERCENT, COURSE_TIME_LEFT, COURSE_TITLE};
use crate::tui::types::CourseAction;

/// Renders the screen

pub fn render_course_progress(f: &mut Frame, app: &App) {
    let size = f.size();

    let screen = match &app.course_progress_screen {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(6), // Modules
            Constraint::Length(4), // Progress summary
            Constraint::Min(6),    // Actions
            Constraint::Length(3), // Status message
            Constraint::Length(4), // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new(COURSE_TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Modules with completion percentages
    let module_items: Vec<ListItem> = COURSE_MODULES
        .iter()
        .map(|(name, percent)| {
            let color = match *percent {
                100 => Color::Green,
                0 => Color::DarkGray,
                _ => Color::Yellow,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", name), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{}% Completed", percent),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    let modules = List::new(module_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Modules"),
    );
    f.render_widget(modules, chunks[1]);

    // Progress summary with a textual bar
    let bar_width = chunks[2].width.saturating_sub(2) as usize;
    let filled = (bar_width as f64 * COURSE_PROGRESS_PERCENT / 100.0) as usize;
    let bar: String = "█".repeat(filled.min(bar_width));
    let progress_text = vec![
        Line::from(Span::styled(bar, Style::default().fg(Color::Green))),
        Line::from(vec![
            Span::styled(
                format!("{}% Complete", COURSE_PROGRESS_PERCENT),
                Style::default().fg(Color::White),
            ),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(COURSE_TIME_LEFT, Style::default().fg(Color::Yellow)),
        ]),
    ];
    let progress = Paragraph::new(progress_text)
        .block(Block::default().borders(Borders::ALL).title("Progress"));
    f.render_widget(progress, chunks[2]);

    // Actions
    let action_items: Vec<ListItem> = CourseAction::all()
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let content = if i == screen.selected_index {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        action.label(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(action.label(), Style::default().fg(Color::White)),
                ])
            };
            ListItem::new(content)
        })
        .collect();

    let actions = List::new(action_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Dashboard Summary"),
    );
    f.render_widget(actions, chunks[3]);

    // Status message
    let status_text = screen
        .status_message
        .as_ref()
        .map(|s| s.as_str())
        .unwrap_or("");
    let status_widget = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_widget, chunks[4]);

    // Help text
    let selected = screen.selected_action();
    let help_text = vec![
        Line::from(selected.description()).style(Style::default().fg(Color::White)),
        Line::from(vec![
            Span::styled("Navigation: ", Style::default().fg(Color::DarkGray)),
            Span::styled("↑↓ or j/k", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Select: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Back: ", Style::default().fg(Color::DarkGray)),
            Span::styled("b/Esc", Style::default().fg(Color::Yellow)),
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
