//! SkillFit assessment page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;
use crate::tui::screens::{AssessmentPhase, AssessmentScreen};
use crate::tui::ui::helpers::format_timer;

/// Renders the screen

pub fn render_assessment(f: &mut Frame, app: &App) {
    let size = f.size();

    let screen = match &app.assessment_screen {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Phase body
            Constraint::Length(3), // Status message
            Constraint::Length(3), // Help text
        ])
        .split(size);

    // Title, with the session timer while a question is live
    let title_text = match screen.time_left {
        Some(secs) if screen.phase == AssessmentPhase::Question => {
            format!("SkillFit Assessment | {}", format_timer(secs))
        }
        _ => "SkillFit Assessment".to_string(),
    };
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Phase body
    match screen.phase {
        AssessmentPhase::Question => render_question(f, chunks[1], screen),
        AssessmentPhase::Feedback => render_feedback(f, chunks[1], screen),
        AssessmentPhase::Report => render_report(f, chunks[1], screen),
        AssessmentPhase::Failed => render_failed(f, chunks[1]),
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
    f.render_widget(status_widget, chunks[2]);

    // Help text
    let help_text = match screen.phase {
        AssessmentPhase::Question => {
            "↑↓: Choose | Enter: Submit | h: Get a Hint! | b/Esc: Back | q: Quit"
        }
        AssessmentPhase::Feedback => "Enter/n: Next Question | b/Esc: Back | q: Quit",
        AssessmentPhase::Report => "r: Restart | b/Esc: Back | q: Quit",
        AssessmentPhase::Failed => "r: Retry | b/Esc: Back | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Render a live question with its options and hint panel
fn render_question(f: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let item = match &screen.item {
        Some(item) => item,
        None => return,
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Question
            Constraint::Min(6),    // Options
            Constraint::Length(4), // Hint
        ])
        .split(area);

    // Question header and text
    let difficulty_color = match item.difficulty.as_str() {
        "E" => Color::Green,
        "M" => Color::Yellow,
        "H" => Color::Red,
        _ => Color::White,
    };
    let question_lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Q{}) ", screen.entries.len() + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                item.difficulty_label(),
                Style::default().fg(difficulty_color),
            ),
        ]),
        Line::from(""),
        Line::from(item.text.as_str()),
    ];
    let question = Paragraph::new(question_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, body[0]);

    // Options
    let option_items: Vec<ListItem> = item
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let content = if i == screen.selected_option {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        option.as_str(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(option.as_str(), Style::default().fg(Color::White)),
                ])
            };
            ListItem::new(content)
        })
        .collect();

    let options = List::new(option_items)
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, body[1]);

    // Hint
    let (hint_text, hint_color) = match &screen.hint {
        Some(hint) => (hint.as_str(), Color::Yellow),
        None => ("Press h to get a hint", Color::DarkGray),
    };
    let hint = Paragraph::new(hint_text)
        .style(Style::default().fg(hint_color))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Hint"));
    f.render_widget(hint, body[2]);
}

/// Render the verdict for the last submitted answer
fn render_feedback(f: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let verdict = match &screen.last_verdict {
        Some(v) => v,
        None => return,
    };

    let mut lines = vec![Line::from("")];
    if verdict.correct {
        lines.push(Line::from(Span::styled(
            "✓ Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "✗ Wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        if let Some(item) = &screen.item {
            if let Some(answer) = item.options.get(verdict.correct_index) {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(answer.as_str(), Style::default().fg(Color::Green)),
                ]));
            }
        }
    }

    let state = &verdict.state;
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Band: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.band.as_str(), Style::default().fg(Color::Cyan)),
        Span::styled("  Asked: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.asked.to_string(), Style::default().fg(Color::White)),
        Span::styled("  Ability: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2}", state.ability),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Mastery: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2}", state.mastery),
            Style::default().fg(Color::White),
        ),
    ]));

    let feedback = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(feedback, area);
}

/// Render the end-of-session report with per-item explanations
fn render_report(f: &mut Frame, area: Rect, screen: &AssessmentScreen) {
    let report = match &screen.report {
        Some(r) => r,
        None => return,
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary
            Constraint::Min(6),    // Explanations
        ])
        .split(area);

    // Summary
    let mut summary_lines = vec![
        Line::from(Span::styled(
            report.classification.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", report.score, report.asked),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Ability: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", report.ability),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Mastery: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", report.mastery),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Fatigue: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", report.fatigue),
                Style::default().fg(Color::White),
            ),
        ]),
    ];
    if let Some(reason) = &screen.end_reason {
        summary_lines.push(Line::from(vec![
            Span::styled("Session ended: ", Style::default().fg(Color::DarkGray)),
            Span::styled(reason.as_str(), Style::default().fg(Color::Yellow)),
        ]));
    }
    let summary = Paragraph::new(summary_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Report"));
    f.render_widget(summary, body[0]);

    // Explanations, matched back to the answered items for their text
    let mut explanation_lines: Vec<Line> = Vec::new();
    for (i, explanation) in report.explanations.iter().enumerate() {
        let correct = explanation.chosen_index == explanation.correct_index;
        let (mark, mark_color) = if correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        let question_text = screen
            .entries
            .iter()
            .find(|e| e.item_id == explanation.item_id)
            .map(|e| e.item_text.as_str())
            .unwrap_or(explanation.item_id.as_str());

        explanation_lines.push(Line::from(vec![
            Span::styled(
                format!("{} Q{}: ", mark, i + 1),
                Style::default().fg(mark_color),
            ),
            Span::styled(question_text, Style::default().fg(Color::White)),
        ]));
        explanation_lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                explanation.explanation.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if explanation_lines.is_empty() {
        explanation_lines.push(Line::from(Span::styled(
            "No items were answered",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let explanations = Paragraph::new(explanation_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Explanations"));
    f.render_widget(explanations, body[1]);
}

/// Render the failure body; the status line carries the detail
fn render_failed(f: &mut Frame, area: Rect) {
    let failed = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "✗ The assessment could not continue",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(failed, area);
}
