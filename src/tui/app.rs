//! Main TUI application state and logic

use crate::api::{ApiClient, UserInfo};
use crate::quiz::{self, QuizClient};
use crate::session::{FileSessionStore, SessionStore};
use crate::tui::clipboard::ClipboardProvider;
use crate::tui::screens::*;
use crate::tui::types::{CourseAction, HomeCard, Screen};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::debug;

/// Application state
///
/// Exactly one screen is current at a time; every transition is an explicit
/// method. Network calls run to completion on the owned runtime before the
/// next key event is handled, so at most one request is ever in flight.
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Should quit
    pub should_quit: bool,
    /// Blocking alert message (submission failures)
    pub alert: Option<String>,
    /// Identifier entered at login, reused as the assessment session key
    pub user_identifier: Option<String>,
    /// Logged-in account returned by the gateway
    pub account: Option<UserInfo>,
    /// Login screen (when active)
    pub login_screen: Option<LoginScreen>,
    /// Working professional form (when active)
    pub working_professional_screen: Option<WorkingProfessionalScreen>,
    /// College student form (when active)
    pub college_student_screen: Option<CollegeStudentScreen>,
    /// Home page (when active)
    pub home_screen: Option<HomeScreen>,
    /// Course progress page (when active)
    pub course_progress_screen: Option<CourseProgressScreen>,
    /// SkillFit dashboard page (when active)
    pub skillfit_dashboard_screen: Option<SkillfitDashboardScreen>,
    /// Assessment page (when active)
    pub assessment_screen: Option<AssessmentScreen>,
    /// Revision page (when active)
    pub revise_screen: Option<ReviseScreen>,
    /// Platform API client
    api: ApiClient,
    /// Quiz engine client
    quiz: QuizClient,
    /// Tokio runtime for network calls from the event loop
    runtime: Runtime,
}

impl App {
    /// Create new application backed by the given session store
    ///
    /// Used by tests to run against an in-memory or temp-dir store instead
    /// of the user's token file.
    pub fn new_with_store(
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let api = ApiClient::from_env(session)?;
        Self::with_api(api)
    }

    /// Create new application talking to the given gateway address
    ///
    /// Used by tests to point the app at a mock gateway.
    pub fn new_with_gateway(
        base_url: &str,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let api = ApiClient::new(base_url, session)?;
        Self::with_api(api)
    }

    fn with_api(api: ApiClient) -> Result<Self, Box<dyn std::error::Error>> {
        let quiz = QuizClient::new(api.clone());
        let runtime = Runtime::new()?;

        Ok(Self {
            current_screen: Screen::Login,
            should_quit: false,
            alert: None,
            user_identifier: None,
            account: None,
            login_screen: Some(LoginScreen::new()),
            working_professional_screen: None,
            college_student_screen: None,
            home_screen: None,
            course_progress_screen: None,
            skillfit_dashboard_screen: None,
            assessment_screen: None,
            revise_screen: None,
            api,
            quiz,
            runtime,
        })
    }

    /// Create new application with the default file-backed session store
    ///
    /// Production sessions persist in ./app_data/token.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::new_with_store(Arc::new(FileSessionStore::default()))
    }

    /// Whether a session token is currently stored
    pub fn has_session(&self) -> bool {
        self.api.has_session()
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    /// Dismiss the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Request application exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Submit the login form
    ///
    /// On success moves to the working professional form; on failure shows
    /// a blocking alert and stays on the login screen.
    pub fn submit_login(&mut self) {
        let Some(login) = &self.login_screen else {
            return;
        };
        let user_id = login.trimmed_user_id();
        let password = login.password.clone();

        let result = self.runtime.block_on(self.api.login(&user_id, &password));

        match result {
            Ok(outcome) => {
                self.user_identifier = Some(user_id);
                self.account = outcome.user;
                self.show_working_professional();
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    /// Show the working professional form
    pub fn show_working_professional(&mut self) {
        if self.working_professional_screen.is_none() {
            self.working_professional_screen = Some(WorkingProfessionalScreen::new());
        }
        self.current_screen = Screen::WorkingProfessional;
    }

    /// Toggle between the two profile forms
    ///
    /// Values entered on the other form are kept.
    pub fn toggle_profile_type(&mut self) {
        match self.current_screen {
            Screen::WorkingProfessional => {
                if self.college_student_screen.is_none() {
                    self.college_student_screen = Some(CollegeStudentScreen::new());
                }
                self.current_screen = Screen::CollegeStudent;
            }
            _ => {
                if self.working_professional_screen.is_none() {
                    self.working_professional_screen = Some(WorkingProfessionalScreen::new());
                }
                self.current_screen = Screen::WorkingProfessional;
            }
        }
    }

    /// Close the profile form and return to login
    ///
    /// Entered values are kept for when the form is reopened.
    pub fn close_to_login(&mut self) {
        if self.login_screen.is_none() {
            self.login_screen = Some(LoginScreen::new());
        }
        self.current_screen = Screen::Login;
    }

    /// Submit the working professional form
    pub fn submit_working_professional(&mut self) {
        let Some(screen) = &self.working_professional_screen else {
            return;
        };
        let profile = screen.profile();

        let result = self
            .runtime
            .block_on(self.api.save_working_professional(&profile));

        match result {
            Ok(()) => self.finish_onboarding(),
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    /// Submit the college student form
    pub fn submit_college_student(&mut self) {
        let Some(screen) = &self.college_student_screen else {
            return;
        };
        let profile = screen.profile();

        let result = self
            .runtime
            .block_on(self.api.save_college_student(&profile));

        match result {
            Ok(()) => self.finish_onboarding(),
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    /// Drop both profile forms and land on home
    fn finish_onboarding(&mut self) {
        self.working_professional_screen = None;
        self.college_student_screen = None;
        self.show_home();
    }

    /// Show the home page and fetch course suggestions
    ///
    /// A failed fetch leaves the built-in cards in place and surfaces the
    /// error in the status line.
    pub fn show_home(&mut self) {
        let mut screen = HomeScreen::new(self.account.clone());

        match self.runtime.block_on(self.api.get_dashboard()) {
            Ok(dashboard) => screen.set_suggestions(dashboard.suggestions),
            Err(e) => screen.set_error(format!("Could not load suggestions: {}", e)),
        }

        self.home_screen = Some(screen);
        self.current_screen = Screen::Home;
    }

    /// Activate the selected home card
    ///
    /// Only the featured course navigates; the other cards are teasers.
    pub fn select_home_card(&mut self) {
        let Some(home) = &self.home_screen else {
            return;
        };
        match home.selected_card() {
            HomeCard::FeaturedCourse => self.show_course_progress(),
            HomeCard::SkillfitAssessment | HomeCard::StudyAbroad => {}
        }
    }

    /// Show the course progress page
    pub fn show_course_progress(&mut self) {
        self.course_progress_screen = Some(CourseProgressScreen::new());
        self.current_screen = Screen::CourseProgress;
    }

    /// Activate the selected course action
    pub fn select_course_action(&mut self) {
        let Some(progress) = &self.course_progress_screen else {
            return;
        };
        match progress.selected_action() {
            CourseAction::SeeDashboard => self.show_skillfit_dashboard(),
            CourseAction::SkillfitAssessment => self.show_skillfit_assessment(),
            CourseAction::ReviseWithYoda => self.show_revise_yoda(),
            CourseAction::ContinueLearning => {}
        }
    }

    /// Show the SkillFit dashboard page
    pub fn show_skillfit_dashboard(&mut self) {
        self.skillfit_dashboard_screen = Some(SkillfitDashboardScreen::new());
        self.current_screen = Screen::SkillfitDashboard;
    }

    /// Show the assessment page and start an engine session
    pub fn show_skillfit_assessment(&mut self) {
        let user_id = self
            .user_identifier
            .clone()
            .unwrap_or_else(quiz::anonymous_user_id);
        self.assessment_screen = Some(AssessmentScreen::new(
            user_id,
            quiz::DEFAULT_TOPIC.to_string(),
        ));
        self.current_screen = Screen::SkillfitAssessment;
        self.restart_assessment();
    }

    /// Start (or retry) the engine session for the assessment on screen
    ///
    /// The engine resets the session on start, so the screen is rebuilt and
    /// previously answered items are dropped.
    pub fn restart_assessment(&mut self) {
        let Some(screen) = &self.assessment_screen else {
            return;
        };
        let user_id = screen.user_id.clone();
        let topic = screen.topic.clone();
        self.assessment_screen = Some(AssessmentScreen::new(user_id.clone(), topic.clone()));

        let result = self.runtime.block_on(self.quiz.start(&user_id, &topic));

        match result {
            Ok(_) => self.advance_assessment(),
            Err(e) => {
                if let Some(screen) = &mut self.assessment_screen {
                    screen.fail(format!("Could not start assessment: {}", e));
                }
            }
        }
    }

    /// Fetch the next item, or finish the session when the engine ends it
    pub fn advance_assessment(&mut self) {
        let Some(screen) = &self.assessment_screen else {
            return;
        };
        let user_id = screen.user_id.clone();
        let topic = screen.topic.clone();

        let result = self.runtime.block_on(self.quiz.next(&user_id, &topic));

        match result {
            Ok(next) => {
                if let Some(item) = next.item {
                    if let Some(screen) = &mut self.assessment_screen {
                        screen.present_item(item, next.time_left);
                    }
                } else {
                    // Session over (or the engine served nothing): report time
                    if let Some(screen) = &mut self.assessment_screen {
                        screen.set_end_reason(next.reason);
                    }
                    self.finish_assessment();
                }
            }
            Err(e) => {
                if let Some(screen) = &mut self.assessment_screen {
                    screen.fail(format!("Could not fetch the next question: {}", e));
                }
            }
        }
    }

    /// Fetch a hint for the current item
    pub fn fetch_assessment_hint(&mut self) {
        let Some(screen) = &self.assessment_screen else {
            return;
        };
        if screen.phase != AssessmentPhase::Question {
            return;
        }
        let Some(item) = &screen.item else {
            return;
        };
        let user_id = screen.user_id.clone();
        let topic = screen.topic.clone();
        let item_id = item.id.clone();

        let result = self
            .runtime
            .block_on(self.quiz.hint(&user_id, &topic, &item_id));

        if let Some(screen) = &mut self.assessment_screen {
            match result {
                Ok(hint) => screen.set_hint(hint.hint),
                Err(e) => {
                    screen.status_message = Some(format!("Could not fetch a hint: {}", e));
                    screen.is_error = true;
                }
            }
        }
    }

    /// Submit the selected option for the current item
    pub fn submit_assessment_answer(&mut self) {
        let Some(screen) = &self.assessment_screen else {
            return;
        };
        if screen.phase != AssessmentPhase::Question {
            return;
        }
        let Some(item) = screen.item.clone() else {
            return;
        };
        let user_id = screen.user_id.clone();
        let topic = screen.topic.clone();
        let choice = screen.selected_option;
        let hint_used = screen.hint_used;
        let time_sec = screen.elapsed_secs();

        let result = self.runtime.block_on(self.quiz.answer(
            &user_id, &topic, &item.id, choice, hint_used, time_sec,
        ));

        if let Some(screen) = &mut self.assessment_screen {
            match result {
                Ok(verdict) => screen.record_answer(verdict, time_sec),
                Err(e) => screen.fail(format!("Could not submit the answer: {}", e)),
            }
        }
    }

    /// Collect the end-of-session report
    fn finish_assessment(&mut self) {
        let Some(screen) = &self.assessment_screen else {
            return;
        };
        let user_id = screen.user_id.clone();
        let topic = screen.topic.clone();
        let entries = screen.entries.clone();

        let result = self
            .runtime
            .block_on(self.quiz.explain_batch(&user_id, &topic, &entries));

        if let Some(screen) = &mut self.assessment_screen {
            match result {
                Ok(report) => screen.set_report(report),
                Err(e) => screen.fail(format!("Could not load the report: {}", e)),
            }
        }
    }

    /// Show the revision page
    pub fn show_revise_yoda(&mut self) {
        self.revise_screen = Some(ReviseScreen::new());
        self.current_screen = Screen::ReviseYoda;
    }

    /// Return to the home page
    pub fn back_to_home(&mut self) {
        self.course_progress_screen = None;
        self.skillfit_dashboard_screen = None;
        self.assessment_screen = None;
        self.revise_screen = None;

        if self.home_screen.is_none() {
            self.show_home();
        } else {
            self.current_screen = Screen::Home;
        }
    }

    /// Return to the course progress page
    pub fn back_to_course_progress(&mut self) {
        self.skillfit_dashboard_screen = None;
        self.assessment_screen = None;
        self.revise_screen = None;

        if self.course_progress_screen.is_none() {
            self.course_progress_screen = Some(CourseProgressScreen::new());
        }
        self.current_screen = Screen::CourseProgress;
    }

    /// Log out: end the server session, drop all screens, return to login
    pub fn logout(&mut self) {
        if let Err(e) = self.runtime.block_on(self.api.logout()) {
            debug!("Logout cleanup failed: {}", e);
        }

        self.account = None;
        self.user_identifier = None;
        self.working_professional_screen = None;
        self.college_student_screen = None;
        self.home_screen = None;
        self.course_progress_screen = None;
        self.skillfit_dashboard_screen = None;
        self.assessment_screen = None;
        self.revise_screen = None;
        self.login_screen = Some(LoginScreen::new());
        self.current_screen = Screen::Login;
    }

    /// Paste clipboard text into the focused field of the active form
    pub fn paste_into_focused_field(&mut self, clipboard: &mut dyn ClipboardProvider) {
        match self.current_screen {
            Screen::Login => {
                if let Some(screen) = &mut self.login_screen {
                    screen.paste_from_clipboard(clipboard);
                }
            }
            Screen::WorkingProfessional => {
                if let Some(screen) = &mut self.working_professional_screen {
                    screen.paste_from_clipboard(clipboard);
                }
            }
            Screen::CollegeStudent => {
                if let Some(screen) = &mut self.college_student_screen {
                    screen.paste_from_clipboard(clipboard);
                }
            }
            _ => {}
        }
    }
}
