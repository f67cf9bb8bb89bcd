//! UI helper functions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Format remaining seconds as M:SS for the assessment timer
pub fn format_timer(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Title, border and focus style for a form input field
pub fn input_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Create a centered rectangle for dialog
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the blocking alert popup over the current screen
pub fn render_alert_popup(f: &mut Frame, message: &str) {
    let size = f.size();

    // Create a centered popup area
    let popup_width = 60;
    let popup_height = 9;

    let popup_area = Rect {
        x: size.width.saturating_sub(popup_width) / 2,
        y: size.height.saturating_sub(popup_height) / 2,
        width: popup_width.min(size.width),
        height: popup_height.min(size.height),
    };

    let popup_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Dismiss hint
        ])
        .split(popup_area);

    // Clear the popup area with a background block
    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    f.render_widget(background, popup_area);

    // Title
    let title = Paragraph::new("Error")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, popup_chunks[0]);

    // Message
    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(body, popup_chunks[1]);

    // Dismiss hint
    let hint = Paragraph::new(Line::from("Press any key to dismiss"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, popup_chunks[2]);
}
