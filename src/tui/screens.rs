//! Screen state structures for TUI

use crate::api::{CollegeStudentProfile, CourseSuggestion, UserInfo, WorkingProfessionalProfile};
use crate::quiz::{AnswerResponse, AssessmentReport, ExplainEntry, QuizItem};
use crate::tui::clipboard::ClipboardProvider;
use crate::tui::types::{CourseAction, HomeCard, ReviseTab};
use std::time::Instant;

/// Degree options on the college student form
pub const DEGREE_OPTIONS: &[&str] = &["B.E.", "M.E."];

/// Specialisation options on the college student form
pub const SPECIALISATION_OPTIONS: &[&str] =
    &["Computer Science", "Electrical", "Mechanical", "Civil"];

/// Title of the enrolled course, shown across the course pages
pub const COURSE_TITLE: &str = "Intro to Object Oriented Programming";

/// Module completion percentages for the enrolled course
pub const COURSE_MODULES: &[(&str, u16)] = &[
    ("Module 1", 100),
    ("Module 2", 53),
    ("Module 3", 0),
    ("Module 4", 0),
];

/// Overall course completion percentage
pub const COURSE_PROGRESS_PERCENT: f64 = 34.44;

/// Remaining study time estimate
pub const COURSE_TIME_LEFT: &str = "9h 10m left";

/// Yoda's remark on the SkillFit dashboard
pub const YODA_REMARK: &str = "\"You'll be exam-ready in 45 days if you follow this plan.\"";

/// Core learning info bullets on the SkillFit dashboard
pub const CORE_LEARNING_INFO: &[&str] = &[
    "Progress Tracker (% syllabus completed, chapters/topics covered.)",
    "Daily/Weekly Goals (bite-sized targets (e.g., \"Finish 10 flashcards today\"))",
    "Upcoming Tasks/Deadlines (quizzes, assignments, test dates.)",
    "Performance Summary (scores, accuracy, speed trends.)",
];

/// Practice question on the revision page
pub const PRACTICE_QUESTION: &str = "Which feature of OOP indicates code reusability?";

/// Options for the practice question
pub const PRACTICE_OPTIONS: &[&str] =
    &["Abstraction", "Polymorphism", "Encapsulation", "Inheritance"];

/// Topic of the AI summary on the revision page
pub const REVISE_SUMMARY_TOPIC: &str = "Inheritance";

/// AI summary text on the revision page
pub const REVISE_SUMMARY: &str = "Inheritance in object-oriented programming is a mechanism \
that allows one class (called the child or derived class) to acquire the properties and \
behaviors of another class (called the parent or base class).";

/// Login screen state
#[derive(Debug)]
pub struct LoginScreen {
    /// User id input buffer
    pub user_id: String,
    /// Password input buffer
    pub password: String,
    /// Currently focused field (0 = user id, 1 = password)
    pub focused_field: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl LoginScreen {
    /// Create new login screen
    pub fn new() -> Self {
        Self {
            user_id: String::new(),
            password: String::new(),
            focused_field: 0,
            status_message: Some("Enter your User Id and Password, then press Enter".to_string()),
            is_error: false,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.focused_field {
            0 => self.user_id.push(c),
            _ => self.password.push(c),
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            0 => {
                self.user_id.pop();
            }
            _ => {
                self.password.pop();
            }
        }
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % 2;
    }

    /// Paste clipboard text into the focused field
    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn ClipboardProvider) {
        match clipboard.get_text() {
            Ok(text) => {
                let text = text.trim().to_string();
                match self.focused_field {
                    0 => self.user_id = text,
                    _ => self.password = text,
                }
                self.status_message = Some("Pasted from clipboard".to_string());
                self.is_error = false;
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to paste: {}", e));
                self.is_error = true;
            }
        }
    }

    /// User id with surrounding whitespace removed, as sent to the gateway
    pub fn trimmed_user_id(&self) -> String {
        self.user_id.trim().to_string()
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
    }
}

/// Working professional onboarding form state
#[derive(Debug)]
pub struct WorkingProfessionalScreen {
    /// Current role input buffer
    pub current_role: String,
    /// Organization input buffer
    pub organization: String,
    /// Interested profession input buffer
    pub interested_profession: String,
    /// Currently focused field (0 = role, 1 = organization, 2 = profession)
    pub focused_field: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl WorkingProfessionalScreen {
    /// Number of form fields
    pub const FIELD_COUNT: usize = 3;

    /// Create new working professional form
    pub fn new() -> Self {
        Self {
            current_role: String::new(),
            organization: String::new(),
            interested_profession: String::new(),
            focused_field: 0,
            status_message: None,
            is_error: false,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.focused_field {
            0 => self.current_role.push(c),
            1 => self.organization.push(c),
            _ => self.interested_profession.push(c),
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            0 => {
                self.current_role.pop();
            }
            1 => {
                self.organization.pop();
            }
            _ => {
                self.interested_profession.pop();
            }
        }
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::FIELD_COUNT;
    }

    /// Move focus to the previous field
    pub fn previous_field(&mut self) {
        self.focused_field = (self.focused_field + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Paste clipboard text into the focused field
    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn ClipboardProvider) {
        match clipboard.get_text() {
            Ok(text) => {
                let text = text.trim().to_string();
                match self.focused_field {
                    0 => self.current_role = text,
                    1 => self.organization = text,
                    _ => self.interested_profession = text,
                }
                self.status_message = Some("Pasted from clipboard".to_string());
                self.is_error = false;
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to paste: {}", e));
                self.is_error = true;
            }
        }
    }

    /// Build the submission payload from the entered values
    pub fn profile(&self) -> WorkingProfessionalProfile {
        WorkingProfessionalProfile {
            current_role: self.current_role.clone(),
            organization: self.organization.clone(),
            interested_profession: self.interested_profession.clone(),
        }
    }
}

/// College student onboarding form state
///
/// Degree and specialisation are option fields; they start unselected and an
/// untouched field submits an empty string.
#[derive(Debug)]
pub struct CollegeStudentScreen {
    /// Selected degree option index
    pub degree_index: Option<usize>,
    /// Selected specialisation option index
    pub specialisation_index: Option<usize>,
    /// College/organization input buffer
    pub college_organization: String,
    /// Interested profession input buffer
    pub interested_profession: String,
    /// Currently focused field (0 = degree, 1 = specialisation,
    /// 2 = college, 3 = profession)
    pub focused_field: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl CollegeStudentScreen {
    /// Number of form fields
    pub const FIELD_COUNT: usize = 4;

    /// Create new college student form
    pub fn new() -> Self {
        Self {
            degree_index: None,
            specialisation_index: None,
            college_organization: String::new(),
            interested_profession: String::new(),
            focused_field: 0,
            status_message: None,
            is_error: false,
        }
    }

    /// Whether the focused field is an option field
    pub fn on_option_field(&self) -> bool {
        self.focused_field < 2
    }

    /// Add character to the focused text field
    pub fn add_char(&mut self, c: char) {
        match self.focused_field {
            2 => self.college_organization.push(c),
            3 => self.interested_profession.push(c),
            _ => {}
        }
    }

    /// Remove last character from the focused text field
    pub fn backspace(&mut self) {
        match self.focused_field {
            2 => {
                self.college_organization.pop();
            }
            3 => {
                self.interested_profession.pop();
            }
            _ => {}
        }
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::FIELD_COUNT;
    }

    /// Move focus to the previous field
    pub fn previous_field(&mut self) {
        self.focused_field = (self.focused_field + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Select the next option on the focused option field
    pub fn next_option(&mut self) {
        match self.focused_field {
            0 => Self::cycle(&mut self.degree_index, DEGREE_OPTIONS.len(), 1),
            1 => Self::cycle(&mut self.specialisation_index, SPECIALISATION_OPTIONS.len(), 1),
            _ => {}
        }
    }

    /// Select the previous option on the focused option field
    pub fn previous_option(&mut self) {
        match self.focused_field {
            0 => Self::cycle(&mut self.degree_index, DEGREE_OPTIONS.len(), -1),
            1 => Self::cycle(&mut self.specialisation_index, SPECIALISATION_OPTIONS.len(), -1),
            _ => {}
        }
    }

    fn cycle(index: &mut Option<usize>, count: usize, step: isize) {
        let next = match *index {
            None => 0,
            Some(current) => (current as isize + step).rem_euclid(count as isize) as usize,
        };
        *index = Some(next);
    }

    /// Selected degree, or empty when untouched
    pub fn degree(&self) -> &str {
        self.degree_index.map_or("", |i| DEGREE_OPTIONS[i])
    }

    /// Selected specialisation, or empty when untouched
    pub fn specialisation(&self) -> &str {
        self.specialisation_index.map_or("", |i| SPECIALISATION_OPTIONS[i])
    }

    /// Paste clipboard text into the focused text field
    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn ClipboardProvider) {
        if self.on_option_field() {
            self.status_message = Some("Use Left/Right to choose an option".to_string());
            self.is_error = false;
            return;
        }
        match clipboard.get_text() {
            Ok(text) => {
                let text = text.trim().to_string();
                match self.focused_field {
                    2 => self.college_organization = text,
                    _ => self.interested_profession = text,
                }
                self.status_message = Some("Pasted from clipboard".to_string());
                self.is_error = false;
            }
            Err(e) => {
                self.status_message = Some(format!("Failed to paste: {}", e));
                self.is_error = true;
            }
        }
    }

    /// Build the submission payload from the entered values
    pub fn profile(&self) -> CollegeStudentProfile {
        CollegeStudentProfile {
            degree: self.degree().to_string(),
            specialisation: self.specialisation().to_string(),
            college_organization: self.college_organization.clone(),
            interested_profession: self.interested_profession.clone(),
        }
    }
}

/// Home page state
#[derive(Debug)]
pub struct HomeScreen {
    /// Selected card index
    pub selected_index: usize,
    /// AI course suggestions fetched from the dashboard endpoint
    pub suggestions: Vec<CourseSuggestion>,
    /// Logged-in account shown in the header
    pub user: Option<UserInfo>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl HomeScreen {
    /// Create new home screen
    pub fn new(user: Option<UserInfo>) -> Self {
        Self {
            selected_index: 0,
            suggestions: Vec::new(),
            user,
            status_message: None,
            is_error: false,
        }
    }

    /// Move to next card
    pub fn next(&mut self) {
        let count = HomeCard::all().len();
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Move to previous card
    pub fn previous(&mut self) {
        let count = HomeCard::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    /// Currently selected card
    pub fn selected_card(&self) -> HomeCard {
        HomeCard::all()[self.selected_index]
    }

    /// Replace the suggestion list
    pub fn set_suggestions(&mut self, suggestions: Vec<CourseSuggestion>) {
        self.suggestions = suggestions;
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
    }
}

/// Course progress page state
#[derive(Debug)]
pub struct CourseProgressScreen {
    /// Selected action index
    pub selected_index: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl CourseProgressScreen {
    /// Create new course progress screen
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            status_message: None,
        }
    }

    /// Move to next action
    pub fn next(&mut self) {
        let count = CourseAction::all().len();
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Move to previous action
    pub fn previous(&mut self) {
        let count = CourseAction::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    /// Currently selected action
    pub fn selected_action(&self) -> CourseAction {
        CourseAction::all()[self.selected_index]
    }
}

/// SkillFit dashboard page state
#[derive(Debug)]
pub struct SkillfitDashboardScreen {
    /// Status message
    pub status_message: Option<String>,
}

impl SkillfitDashboardScreen {
    /// Create new dashboard screen
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }
}

/// Phase of a running assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// An item is on screen, waiting for an answer
    Question,
    /// The verdict for the last answer is on screen
    Feedback,
    /// The end-of-session report is on screen
    Report,
    /// The session could not start or advance
    Failed,
}

/// SkillFit assessment page state
///
/// Drives one engine session: items are answered one at a time and every
/// answered item is kept for the end-of-session explanations.
#[derive(Debug)]
pub struct AssessmentScreen {
    /// Session key sent with every engine call
    pub user_id: String,
    /// Assessment topic
    pub topic: String,
    /// Current phase
    pub phase: AssessmentPhase,
    /// Item being answered
    pub item: Option<QuizItem>,
    /// Selected option index
    pub selected_option: usize,
    /// Seconds remaining, as reported by the engine
    pub time_left: Option<u64>,
    /// Hint for the current item
    pub hint: Option<String>,
    /// Whether a hint was requested for the current item
    pub hint_used: bool,
    /// Verdict for the last submitted answer
    pub last_verdict: Option<AnswerResponse>,
    /// Answered items, in order
    pub entries: Vec<ExplainEntry>,
    /// End-of-session report
    pub report: Option<AssessmentReport>,
    /// Why the engine ended the session
    pub end_reason: Option<String>,
    /// When the current item was served
    pub item_started: Instant,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl AssessmentScreen {
    /// Create new assessment screen for a session key
    pub fn new(user_id: String, topic: String) -> Self {
        Self {
            user_id,
            topic,
            phase: AssessmentPhase::Question,
            item: None,
            selected_option: 0,
            time_left: None,
            hint: None,
            hint_used: false,
            last_verdict: None,
            entries: Vec::new(),
            report: None,
            end_reason: None,
            item_started: Instant::now(),
            status_message: None,
            is_error: false,
        }
    }

    /// Show a newly served item
    pub fn present_item(&mut self, item: QuizItem, time_left: Option<u64>) {
        self.item = Some(item);
        self.selected_option = 0;
        self.time_left = time_left;
        self.hint = None;
        self.hint_used = false;
        self.last_verdict = None;
        self.item_started = Instant::now();
        self.phase = AssessmentPhase::Question;
        self.status_message = None;
        self.is_error = false;
    }

    /// Move to the next answer option
    pub fn next_option(&mut self) {
        if let Some(item) = &self.item {
            if !item.options.is_empty() {
                self.selected_option = (self.selected_option + 1) % item.options.len();
            }
        }
    }

    /// Move to the previous answer option
    pub fn previous_option(&mut self) {
        if let Some(item) = &self.item {
            let count = item.options.len();
            if count > 0 {
                self.selected_option = (self.selected_option + count - 1) % count;
            }
        }
    }

    /// Seconds spent on the current item
    pub fn elapsed_secs(&self) -> f64 {
        self.item_started.elapsed().as_secs_f64()
    }

    /// Show a fetched hint
    pub fn set_hint(&mut self, hint: String) {
        self.hint = Some(hint);
        self.hint_used = true;
    }

    /// Record the verdict for the current item and show feedback
    pub fn record_answer(&mut self, verdict: AnswerResponse, time_sec: f64) {
        if let Some(item) = &self.item {
            self.entries.push(ExplainEntry {
                item_id: item.id.clone(),
                item_text: item.text.clone(),
                options: item.options.clone(),
                correct_index: item.correct_index,
                chosen_index: self.selected_option,
                hint_used: self.hint_used,
                time_sec,
            });
        }
        self.last_verdict = Some(verdict);
        self.phase = AssessmentPhase::Feedback;
    }

    /// Note why the engine ended the session
    pub fn set_end_reason(&mut self, reason: Option<String>) {
        self.end_reason = reason;
    }

    /// Show the end-of-session report
    pub fn set_report(&mut self, report: AssessmentReport) {
        self.report = Some(report);
        self.phase = AssessmentPhase::Report;
    }

    /// Mark the session as failed
    pub fn fail(&mut self, message: String) {
        self.phase = AssessmentPhase::Failed;
        self.status_message = Some(message);
        self.is_error = true;
    }
}

/// Revision page state
#[derive(Debug)]
pub struct ReviseScreen {
    /// Active tab
    pub tab: ReviseTab,
    /// Selected practice option index
    pub selected_option: usize,
}

impl ReviseScreen {
    /// Create new revision screen
    pub fn new() -> Self {
        Self {
            tab: ReviseTab::Notes,
            selected_option: 0,
        }
    }

    /// Switch to the other tab
    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggled();
    }

    /// Move to the next practice option
    pub fn next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % PRACTICE_OPTIONS.len();
    }

    /// Move to the previous practice option
    pub fn previous_option(&mut self) {
        let count = PRACTICE_OPTIONS.len();
        self.selected_option = (self.selected_option + count - 1) % count;
    }
}
