//! Login screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::ui::helpers::input_block;

/// Renders the screen

pub fn render_login(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.login_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // User id field
                Constraint::Length(3), // Password field
                Constraint::Length(3), // Status message
                Constraint::Min(0),    // Spacer
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("MicroLearn - Welcome! Sign Up or Login")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // User id field
        let user_id_widget = Paragraph::new(screen.user_id.as_str())
            .style(Style::default().fg(Color::White))
            .block(input_block("User Id", screen.focused_field == 0));
        f.render_widget(user_id_widget, chunks[1]);

        // Password field, masked
        let masked = "*".repeat(screen.password.chars().count());
        let password_widget = Paragraph::new(masked)
            .style(Style::default().fg(Color::White))
            .block(input_block("Password", screen.focused_field == 1));
        f.render_widget(password_widget, chunks[2]);

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
        f.render_widget(status_widget, chunks[3]);

        // Help text
        let help_text = "Tab: Switch Field | Enter: Next | Ctrl+V: Paste | Esc: Quit";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[5]);
    }
}
