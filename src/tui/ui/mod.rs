//! UI rendering module - screen-specific rendering functions
//!
//! This module contains the UI rendering logic organized by screen type.
//! Each screen has its own file for better maintainability.

mod login;
mod working_professional;
mod college_student;
mod home;
mod course_progress;
mod skillfit_dashboard;
mod assessment;
mod revise;
mod helpers;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use login::render_login;
pub use working_professional::render_working_professional;
pub use college_student::render_college_student;
pub use home::render_home;
pub use course_progress::render_course_progress;
pub use skillfit_dashboard::render_skillfit_dashboard;
pub use assessment::render_assessment;
pub use revise::render_revise;

// Re-export helper functions
pub use helpers::format_timer;

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Login => render_login(f, app),
        Screen::WorkingProfessional => render_working_professional(f, app),
        Screen::CollegeStudent => render_college_student(f, app),
        Screen::Home => render_home(f, app),
        Screen::CourseProgress => render_course_progress(f, app),
        Screen::SkillfitDashboard => render_skillfit_dashboard(f, app),
        Screen::SkillfitAssessment => render_assessment(f, app),
        Screen::ReviseYoda => render_revise(f, app),
    }

    // Alert popup covers whichever screen raised it
    if let Some(message) = &app.alert {
        helpers::render_alert_popup(f, message);
    }
}
