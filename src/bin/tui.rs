//! MicroLearn TUI (Terminal User Interface)
//!
//! A terminal-based client for the MicroLearn course platform.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use microlearn::tui::clipboard::SystemClipboard;
use microlearn::tui::{ui::ui, App, AssessmentPhase, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new()?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut clipboard = SystemClipboard::new().ok();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // A blocking alert swallows every key
                if app.alert.is_some() {
                    app.dismiss_alert();
                    continue;
                }

                match app.current_screen {
                    Screen::Login => {
                        match key.code {
                            KeyCode::Esc => {
                                app.quit();
                            }
                            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.next_field();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_login();
                            }
                            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                if clipboard.is_none() {
                                    clipboard = SystemClipboard::new().ok();
                                }
                                if let Some(cb) = clipboard.as_mut() {
                                    app.paste_into_focused_field(cb);
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.login_screen {
                                    screen.backspace();
                                }
                            }
                            _ => {}
                        }
                    }
                    Screen::WorkingProfessional => {
                        match key.code {
                            KeyCode::Esc => {
                                app.close_to_login();
                            }
                            KeyCode::Tab | KeyCode::Down => {
                                if let Some(screen) = &mut app.working_professional_screen {
                                    screen.next_field();
                                }
                            }
                            KeyCode::BackTab | KeyCode::Up => {
                                if let Some(screen) = &mut app.working_professional_screen {
                                    screen.previous_field();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_working_professional();
                            }
                            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.toggle_profile_type();
                            }
                            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                if clipboard.is_none() {
                                    clipboard = SystemClipboard::new().ok();
                                }
                                if let Some(cb) = clipboard.as_mut() {
                                    app.paste_into_focused_field(cb);
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.working_professional_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.working_professional_screen {
                                    screen.backspace();
                                }
                            }
                            _ => {}
                        }
                    }
                    Screen::CollegeStudent => {
                        match key.code {
                            KeyCode::Esc => {
                                app.close_to_login();
                            }
                            KeyCode::Tab | KeyCode::Down => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.next_field();
                                }
                            }
                            KeyCode::BackTab | KeyCode::Up => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.previous_field();
                                }
                            }
                            KeyCode::Left => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.previous_option();
                                }
                            }
                            KeyCode::Right => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.next_option();
                                }
                            }
                            KeyCode::Enter => {
                                app.submit_college_student();
                            }
                            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.toggle_profile_type();
                            }
                            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                if clipboard.is_none() {
                                    clipboard = SystemClipboard::new().ok();
                                }
                                if let Some(cb) = clipboard.as_mut() {
                                    app.paste_into_focused_field(cb);
                                }
                            }
                            KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.add_char(c);
                                }
                            }
                            KeyCode::Backspace => {
                                if let Some(screen) = &mut app.college_student_screen {
                                    screen.backspace();
                                }
                            }
                            _ => {}
                        }
                    }
                    Screen::Home => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => {
                                app.quit();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.home_screen {
                                    screen.next();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.home_screen {
                                    screen.previous();
                                }
                            }
                            KeyCode::Enter => {
                                app.select_home_card();
                            }
                            KeyCode::Char('l') => {
                                app.logout();
                            }
                            _ => {}
                        }
                    }
                    Screen::CourseProgress => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.quit();
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_home();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.course_progress_screen {
                                    screen.next();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.course_progress_screen {
                                    screen.previous();
                                }
                            }
                            KeyCode::Enter => {
                                app.select_course_action();
                            }
                            _ => {}
                        }
                    }
                    Screen::SkillfitDashboard => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.quit();
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_course_progress();
                            }
                            _ => {}
                        }
                    }
                    Screen::SkillfitAssessment => {
                        let phase = app
                            .assessment_screen
                            .as_ref()
                            .map(|screen| screen.phase.clone());

                        match key.code {
                            KeyCode::Char('q') => {
                                app.quit();
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_course_progress();
                            }
                            KeyCode::Down | KeyCode::Char('j')
                                if phase == Some(AssessmentPhase::Question) =>
                            {
                                if let Some(screen) = &mut app.assessment_screen {
                                    screen.next_option();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k')
                                if phase == Some(AssessmentPhase::Question) =>
                            {
                                if let Some(screen) = &mut app.assessment_screen {
                                    screen.previous_option();
                                }
                            }
                            KeyCode::Enter if phase == Some(AssessmentPhase::Question) => {
                                app.submit_assessment_answer();
                            }
                            KeyCode::Char('h') if phase == Some(AssessmentPhase::Question) => {
                                app.fetch_assessment_hint();
                            }
                            KeyCode::Enter | KeyCode::Char('n')
                                if phase == Some(AssessmentPhase::Feedback) =>
                            {
                                app.advance_assessment();
                            }
                            KeyCode::Char('r')
                                if phase == Some(AssessmentPhase::Report)
                                    || phase == Some(AssessmentPhase::Failed) =>
                            {
                                app.restart_assessment();
                            }
                            _ => {}
                        }
                    }
                    Screen::ReviseYoda => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.quit();
                            }
                            KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_course_progress();
                            }
                            KeyCode::Char('t') => {
                                if let Some(screen) = &mut app.revise_screen {
                                    screen.toggle_tab();
                                }
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if let Some(screen) = &mut app.revise_screen {
                                    screen.next_option();
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if let Some(screen) = &mut app.revise_screen {
                                    screen.previous_option();
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
