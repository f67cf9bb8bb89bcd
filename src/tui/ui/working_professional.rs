//! Working professional onboarding form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::ui::helpers::{centered_rect, input_block};

/// Render the working professional onboarding dialog
pub fn render_working_professional(f: &mut Frame, app: &App) {
    let screen = match &app.working_professional_screen {
        Some(s) => s,
        None => return,
    };

    // Create centered dialog area
    let area = centered_rect(60, 80, f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Current role
            Constraint::Length(3), // Organization
            Constraint::Length(3), // Interested profession
            Constraint::Length(2), // Status message
            Constraint::Min(0),    // Spacer
            Constraint::Length(2), // Footer
        ])
        .split(area);

    // Render border around entire dialog
    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Working Professional ");
    f.render_widget(dialog_block, area);

    // Title
    let title = Paragraph::new("Tell us more about you!")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // Subtitle
    let subtitle = Paragraph::new("Helps us craft courses just for you")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[1]);

    // Current role
    let role_widget = Paragraph::new(screen.current_role.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block(
            "What is your current role?",
            screen.focused_field == 0,
        ));
    f.render_widget(role_widget, chunks[2]);

    // Organization
    let organization_widget = Paragraph::new(screen.organization.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block("Organization?", screen.focused_field == 1));
    f.render_widget(organization_widget, chunks[3]);

    // Interested profession
    let profession_widget = Paragraph::new(screen.interested_profession.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block(
            "Interested Profession",
            screen.focused_field == 2,
        ));
    f.render_widget(profession_widget, chunks[4]);

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
        .alignment(Alignment::Center);
    f.render_widget(status_widget, chunks[5]);

    // Footer with instructions
    let footer_text =
        "Tab: Next Field | Enter: Next | Ctrl+T: I am a college student | Ctrl+V: Paste | Esc: Close";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[7]);
}
