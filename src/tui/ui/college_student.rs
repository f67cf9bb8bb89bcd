//! College student onboarding form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::ui::helpers::{centered_rect, input_block};

/// Render the college student onboarding dialog
pub fn render_college_student(f: &mut Frame, app: &App) {
    let screen = match &app.college_student_screen {
        Some(s) => s,
        None => return,
    };

    // Create centered dialog area
    let area = centered_rect(60, 90, f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Degree
            Constraint::Length(3), // Specialisation
            Constraint::Length(3), // College/organization
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
        .title(" College Student ");
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

    // Degree dropdown
    let degree_line = option_line(screen.degree());
    let degree_widget = Paragraph::new(degree_line).block(input_block(
        "What is your degree?",
        screen.focused_field == 0,
    ));
    f.render_widget(degree_widget, chunks[2]);

    // Specialisation dropdown
    let specialisation_line = option_line(screen.specialisation());
    let specialisation_widget = Paragraph::new(specialisation_line).block(input_block(
        "Specialisation?",
        screen.focused_field == 1,
    ));
    f.render_widget(specialisation_widget, chunks[3]);

    // College/organization
    let college_widget = Paragraph::new(screen.college_organization.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block(
            "College/ Organization?",
            screen.focused_field == 2,
        ));
    f.render_widget(college_widget, chunks[4]);

    // Interested profession
    let profession_widget = Paragraph::new(screen.interested_profession.as_str())
        .style(Style::default().fg(Color::White))
        .block(input_block(
            "Interested profession?",
            screen.focused_field == 3,
        ));
    f.render_widget(profession_widget, chunks[5]);

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
    f.render_widget(status_widget, chunks[6]);

    // Footer with instructions
    let footer_text = "Tab: Next Field | Left/Right: Choose | Enter: Next | Ctrl+T: I am a working professional | Esc: Close";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[8]);
}

/// Selected dropdown value, or a picker hint when nothing is selected yet
fn option_line(value: &str) -> Line<'_> {
    if value.is_empty() {
        Line::from(Span::styled(
            "Left/Right to select",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
        ])
    }
}
