//! SkillFit dashboard page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;
use crate::tui::screens::{CORE_LEARNING_INFO, COURSE_TITLE, YODA_REMARK};

/// Renders the screen

pub fn render_skillfit_dashboard(f: &mut Frame, app: &App) {
    let size = f.size();

    let screen = match &app.skillfit_dashboard_screen {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(12),    // Panel grid
            Constraint::Length(3),  // Status message
            Constraint::Length(3),  // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new(format!("Dashboard - {}", COURSE_TITLE))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Two-column panel grid
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[1]);

    // Leaderboards placeholder
    let leaderboards = Paragraph::new("Coming soon")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Leaderboards"));
    f.render_widget(leaderboards, left[0]);

    // Core learning info bullets
    let info_lines: Vec<Line> = CORE_LEARNING_INFO
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect();
    let info = Paragraph::new(info_lines)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Core Learning Info"),
        );
    f.render_widget(info, left[1]);

    // Yoda's remarks
    let remarks = Paragraph::new(YODA_REMARK)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🏆 Yoda's remarks!"),
        );
    f.render_widget(remarks, right[0]);

    // Weaknesses placeholder
    let weaknesses_lines = vec![
        Line::from("subject/topic-wise breakdown"),
        Line::from("AI powered course suggestions"),
    ];
    let weaknesses = Paragraph::new(weaknesses_lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Weaknesses"));
    f.render_widget(weaknesses, right[1]);

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
    f.render_widget(status_widget, chunks[2]);

    // Help text
    let help_text = "b/Esc: Back | q: Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
