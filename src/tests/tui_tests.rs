//! TUI tests: navigation transitions, screen state and submit flows
//!
//! Network-backed flows run against the scripted mock gateway. The app owns
//! its own runtime and blocks on each call, so these tests are plain
//! synchronous functions; a separate runtime keeps the gateway task alive.

use super::helpers::{CannedResponse, MockGateway};
use crate::session::{MemorySessionStore, SessionStore};
use crate::tui::clipboard::mock::MockClipboard;
use crate::tui::screens::{
    AssessmentPhase, AssessmentScreen, CollegeStudentScreen, CourseProgressScreen, HomeScreen,
    LoginScreen, ReviseScreen, WorkingProfessionalScreen, DEGREE_OPTIONS, PRACTICE_OPTIONS,
    SPECIALISATION_OPTIONS,
};
use crate::tui::types::{CourseAction, HomeCard, ReviseTab, Screen};
use crate::tui::ui::format_timer;
use crate::tui::App;
use serde_json::json;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn gateway_with(responses: Vec<CannedResponse>) -> (Runtime, MockGateway) {
    let runtime = Runtime::new().expect("Failed to build runtime");
    let gateway = runtime.block_on(MockGateway::start(responses));
    (runtime, gateway)
}

fn app_for(gateway: &MockGateway, store: Arc<MemorySessionStore>) -> App {
    App::new_with_gateway(&gateway.base_url, store).expect("Failed to build app")
}

/// App pointed at nothing, for transitions that never touch the network
fn offline_app() -> App {
    let store = Arc::new(MemorySessionStore::new());
    App::new_with_gateway("http://127.0.0.1:1", store).expect("Failed to build app")
}

// ===== Navigation =====

#[test]
fn test_app_starts_on_login() {
    let app = offline_app();

    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.login_screen.is_some());
    assert!(app.working_professional_screen.is_none());
    assert!(app.college_student_screen.is_none());
    assert!(app.home_screen.is_none());
    assert!(app.alert.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_profile_toggle_lands_on_other_form() {
    let mut app = offline_app();
    app.show_working_professional();
    assert_eq!(app.current_screen, Screen::WorkingProfessional);

    app.toggle_profile_type();
    assert_eq!(app.current_screen, Screen::CollegeStudent);

    app.toggle_profile_type();
    assert_eq!(app.current_screen, Screen::WorkingProfessional);
}

#[test]
fn test_profile_toggle_preserves_entered_values() {
    let mut app = offline_app();
    app.show_working_professional();

    if let Some(screen) = &mut app.working_professional_screen {
        for c in "Backend Developer".chars() {
            screen.add_char(c);
        }
    }

    app.toggle_profile_type();
    if let Some(screen) = &mut app.college_student_screen {
        screen.next_field();
        screen.next_field();
        for c in "MIT".chars() {
            screen.add_char(c);
        }
    }

    app.toggle_profile_type();
    let professional = app.working_professional_screen.as_ref().unwrap();
    assert_eq!(professional.current_role, "Backend Developer");

    app.toggle_profile_type();
    let student = app.college_student_screen.as_ref().unwrap();
    assert_eq!(student.college_organization, "MIT");
}

#[test]
fn test_close_to_login_from_either_profile_form() {
    let mut app = offline_app();

    app.show_working_professional();
    app.close_to_login();
    assert_eq!(app.current_screen, Screen::Login);

    app.show_working_professional();
    app.toggle_profile_type();
    assert_eq!(app.current_screen, Screen::CollegeStudent);
    app.close_to_login();
    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.login_screen.is_some());
}

#[test]
fn test_alert_show_and_dismiss() {
    let mut app = offline_app();

    app.show_alert("Something broke".to_string());
    assert_eq!(app.alert.as_deref(), Some("Something broke"));

    app.dismiss_alert();
    assert!(app.alert.is_none());
}

#[test]
fn test_quit_sets_flag() {
    let mut app = offline_app();
    app.quit();
    assert!(app.should_quit);
}

// ===== Login flow =====

#[test]
fn test_submit_login_success_lands_on_working_professional() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(
        200,
        json!({
            "token": "tok-1",
            "user": {"id": 3, "email": "dev@example.com", "name": "Dev"}
        }),
    )]);
    let store = Arc::new(MemorySessionStore::new());
    let mut app = app_for(&gateway, store.clone());

    if let Some(screen) = &mut app.login_screen {
        for c in " dev@example.com ".chars() {
            screen.add_char(c);
        }
        screen.next_field();
        for c in "secret".chars() {
            screen.add_char(c);
        }
    }
    app.submit_login();

    assert_eq!(app.current_screen, Screen::WorkingProfessional);
    assert!(app.alert.is_none());
    assert_eq!(store.get().as_deref(), Some("tok-1"));
    // The identifier is trimmed before it is sent or kept
    assert_eq!(app.user_identifier.as_deref(), Some("dev@example.com"));
    assert_eq!(app.account.as_ref().unwrap().name, "Dev");
}

#[test]
fn test_submit_login_failure_stays_on_login_with_alert() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(
        401,
        json!({"message": "Invalid credentials"}),
    )]);
    let store = Arc::new(MemorySessionStore::new());
    let mut app = app_for(&gateway, store.clone());

    if let Some(screen) = &mut app.login_screen {
        for c in "dev@example.com".chars() {
            screen.add_char(c);
        }
    }
    app.submit_login();

    assert_eq!(app.current_screen, Screen::Login);
    assert_eq!(app.alert.as_deref(), Some("Invalid credentials"));
    assert!(store.get().is_none());
    // The entered identifier survives the failure
    assert_eq!(app.login_screen.as_ref().unwrap().user_id, "dev@example.com");
}

// ===== Profile submission =====

#[test]
fn test_submit_college_student_end_to_end() {
    let (_rt, gateway) = gateway_with(vec![
        CannedResponse::json(200, json!({"ok": true})),
        CannedResponse::json(200, json!({"suggestions": []})),
    ]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_working_professional();
    app.toggle_profile_type();

    let screen = app.college_student_screen.as_mut().unwrap();
    screen.next_option(); // degree -> B.E.
    screen.next_field();
    screen.next_option(); // specialisation -> Computer Science
    screen.next_field();
    for c in "MIT".chars() {
        screen.add_char(c);
    }
    screen.next_field();
    for c in "ML Engineer".chars() {
        screen.add_char(c);
    }

    app.submit_college_student();

    let requests = gateway.requests();
    assert_eq!(requests[0].path, "/api/profile/college-student");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "degree": "B.E.",
            "specialization": "Computer Science",
            "college": "MIT",
            "interested_profession": "ML Engineer"
        }))
    );

    assert_eq!(app.current_screen, Screen::Home);
    assert!(app.working_professional_screen.is_none());
    assert!(app.college_student_screen.is_none());
}

#[test]
fn test_submit_working_professional_lands_on_home_with_suggestions() {
    let (_rt, gateway) = gateway_with(vec![
        CannedResponse::json(200, json!({"ok": true})),
        CannedResponse::json(
            200,
            json!({"suggestions": [{"id": 7, "slug": "oop-basics", "title": "Intro to OOP"}]}),
        ),
    ]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_working_professional();
    let screen = app.working_professional_screen.as_mut().unwrap();
    for c in "Backend Developer".chars() {
        screen.add_char(c);
    }
    screen.next_field();
    for c in "Acme".chars() {
        screen.add_char(c);
    }
    screen.next_field();
    for c in "Platform Engineer".chars() {
        screen.add_char(c);
    }

    app.submit_working_professional();

    assert_eq!(app.current_screen, Screen::Home);
    let home = app.home_screen.as_ref().unwrap();
    assert_eq!(home.suggestions.len(), 1);
    assert_eq!(home.suggestions[0].title, "Intro to OOP");

    let requests = gateway.requests();
    assert_eq!(requests[0].path, "/api/profile/working-professional");
    assert_eq!(requests[1].path, "/api/suggest/dashboard");
}

#[test]
fn test_submit_failure_keeps_screen_and_draft_intact() {
    let (_rt, gateway) =
        gateway_with(vec![CannedResponse::json(500, json!({"message": "boom"}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_working_professional();
    if let Some(screen) = &mut app.working_professional_screen {
        for c in "Backend Developer".chars() {
            screen.add_char(c);
        }
    }

    app.submit_working_professional();

    assert_eq!(app.current_screen, Screen::WorkingProfessional);
    assert_eq!(app.alert.as_deref(), Some("boom"));
    let screen = app.working_professional_screen.as_ref().unwrap();
    assert_eq!(screen.current_role, "Backend Developer");
}

// ===== Home and course navigation =====

#[test]
fn test_home_dashboard_failure_keeps_built_in_cards() {
    let (_rt, gateway) =
        gateway_with(vec![CannedResponse::json(500, json!({"message": "down"}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_home();

    assert_eq!(app.current_screen, Screen::Home);
    assert!(app.alert.is_none(), "Read-only fetches never raise alerts");
    let home = app.home_screen.as_ref().unwrap();
    assert!(home.suggestions.is_empty());
    assert!(home.is_error);
    assert!(home
        .status_message
        .as_ref()
        .unwrap()
        .contains("Could not load suggestions"));
}

#[test]
fn test_featured_course_card_opens_course_progress() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(200, json!({"suggestions": []}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_home();
    app.select_home_card();

    assert_eq!(app.current_screen, Screen::CourseProgress);
    assert!(app.course_progress_screen.is_some());
}

#[test]
fn test_teaser_cards_do_not_navigate() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(200, json!({"suggestions": []}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_home();
    if let Some(home) = &mut app.home_screen {
        home.next(); // SkillFit Assessment teaser
    }
    app.select_home_card();
    assert_eq!(app.current_screen, Screen::Home);

    if let Some(home) = &mut app.home_screen {
        home.next(); // Study Abroad teaser
    }
    app.select_home_card();
    assert_eq!(app.current_screen, Screen::Home);
}

#[test]
fn test_course_actions_dispatch() {
    let mut app = offline_app();

    app.show_course_progress();
    assert_eq!(
        app.course_progress_screen.as_ref().unwrap().selected_action(),
        CourseAction::SeeDashboard
    );
    app.select_course_action();
    assert_eq!(app.current_screen, Screen::SkillfitDashboard);

    app.back_to_course_progress();
    if let Some(progress) = &mut app.course_progress_screen {
        progress.next();
        progress.next(); // Revise with Yoda
    }
    app.select_course_action();
    assert_eq!(app.current_screen, Screen::ReviseYoda);

    // Returning keeps the screen and its selection (Revise with Yoda)
    app.back_to_course_progress();
    if let Some(progress) = &mut app.course_progress_screen {
        progress.next(); // Continue Learning
    }
    app.select_course_action();
    // Continue Learning has no target yet
    assert_eq!(app.current_screen, Screen::CourseProgress);
}

#[test]
fn test_back_to_home_does_not_refetch_suggestions() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(200, json!({"suggestions": []}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_home();
    app.show_course_progress();
    app.back_to_home();

    assert_eq!(app.current_screen, Screen::Home);
    assert!(app.course_progress_screen.is_none());
    assert_eq!(gateway.requests().len(), 1, "Home was already loaded");
}

#[test]
fn test_logout_clears_session_and_screens() {
    let (_rt, gateway) = gateway_with(vec![CannedResponse::json(200, json!({"suggestions": []}))]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store.clone());

    app.show_home();
    app.logout();

    assert_eq!(app.current_screen, Screen::Login);
    assert!(store.get().is_none(), "Token should be cleared");
    assert!(app.home_screen.is_none());
    assert!(app.account.is_none());
    assert!(app.user_identifier.is_none());
    assert!(app.login_screen.is_some());
}

// ===== Assessment flow =====

#[test]
fn test_assessment_full_session_produces_report() {
    let (_rt, gateway) = gateway_with(vec![
        CannedResponse::json(200, json!({"ok": true})),
        CannedResponse::json(
            200,
            json!({
                "end": false,
                "item": {
                    "id": "inh_E_1",
                    "difficulty": "E",
                    "text": "Which feature of OOP indicates code reusability?",
                    "options": ["Abstraction", "Polymorphism", "Encapsulation", "Inheritance"],
                    "correct_index": 3
                },
                "time_left": 295
            }),
        ),
        CannedResponse::json(
            200,
            json!({
                "correct": false,
                "correct_index": 3,
                "state": {"band": "E", "asked": 1, "ability": -0.1,
                          "acc_last5": 0.0, "fatigue": 0, "mastery": 0.1}
            }),
        ),
        CannedResponse::json(200, json!({"end": true, "reason": "max_questions"})),
        CannedResponse::json(
            200,
            json!({
                "classification": "Beginner",
                "score": 0,
                "asked": 1,
                "explanations": [
                    {"item_id": "inh_E_1", "explanation": "Inheritance reuses base class code.",
                     "chosen_index": 1, "correct_index": 3}
                ]
            }),
        ),
    ]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);
    app.user_identifier = Some("dev@example.com".to_string());

    app.show_skillfit_assessment();

    assert_eq!(app.current_screen, Screen::SkillfitAssessment);
    {
        let screen = app.assessment_screen.as_ref().unwrap();
        assert_eq!(screen.phase, AssessmentPhase::Question);
        assert_eq!(screen.item.as_ref().unwrap().id, "inh_E_1");
        assert_eq!(screen.time_left, Some(295));
    }

    if let Some(screen) = &mut app.assessment_screen {
        screen.next_option(); // Polymorphism
    }
    app.submit_assessment_answer();

    {
        let screen = app.assessment_screen.as_ref().unwrap();
        assert_eq!(screen.phase, AssessmentPhase::Feedback);
        assert!(!screen.last_verdict.as_ref().unwrap().correct);
        assert_eq!(screen.entries.len(), 1);
        assert_eq!(screen.entries[0].chosen_index, 1);
        assert_eq!(screen.entries[0].correct_index, 3);
    }

    app.advance_assessment();

    let screen = app.assessment_screen.as_ref().unwrap();
    assert_eq!(screen.phase, AssessmentPhase::Report);
    assert_eq!(screen.end_reason.as_deref(), Some("max_questions"));
    let report = screen.report.as_ref().unwrap();
    assert_eq!(report.classification, "Beginner");
    assert_eq!(report.explanations.len(), 1);

    // All engine calls carry the same session key, in call order
    let requests = gateway.requests();
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "/api/quiz/session/start",
            "/api/quiz/session/next",
            "/api/quiz/session/answer",
            "/api/quiz/session/next",
            "/api/quiz/session/explain_batch"
        ]
    );
    for request in &requests {
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["user_id"], "dev@example.com");
    }
}

#[test]
fn test_assessment_start_failure_then_retry() {
    let (_rt, gateway) = gateway_with(vec![
        CannedResponse::json(503, json!({"message": "Engine unavailable"})),
        CannedResponse::json(200, json!({"ok": true})),
        CannedResponse::json(
            200,
            json!({
                "end": false,
                "item": {"id": "inh_E_2", "difficulty": "E", "text": "Q",
                         "options": ["a", "b"], "correct_index": 0},
                "time_left": 300
            }),
        ),
    ]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_skillfit_assessment();
    {
        let screen = app.assessment_screen.as_ref().unwrap();
        assert_eq!(screen.phase, AssessmentPhase::Failed);
        assert!(screen.is_error);
        assert!(screen
            .status_message
            .as_ref()
            .unwrap()
            .contains("Engine unavailable"));
    }

    app.restart_assessment();
    let screen = app.assessment_screen.as_ref().unwrap();
    assert_eq!(screen.phase, AssessmentPhase::Question);
    assert_eq!(screen.item.as_ref().unwrap().id, "inh_E_2");
}

#[test]
fn test_assessment_hint_marks_item() {
    let (_rt, gateway) = gateway_with(vec![
        CannedResponse::json(200, json!({"ok": true})),
        CannedResponse::json(
            200,
            json!({
                "end": false,
                "item": {"id": "inh_E_1", "difficulty": "E", "text": "Q",
                         "options": ["a", "b"], "correct_index": 0},
                "time_left": 300
            }),
        ),
        CannedResponse::json(200, json!({"hint": "Think about code reuse"})),
    ]);
    let store = Arc::new(MemorySessionStore::with_token("tok-1"));
    let mut app = app_for(&gateway, store);

    app.show_skillfit_assessment();
    app.fetch_assessment_hint();

    let screen = app.assessment_screen.as_ref().unwrap();
    assert_eq!(screen.hint.as_deref(), Some("Think about code reuse"));
    assert!(screen.hint_used);
    assert_eq!(gateway.requests()[2].path, "/api/quiz/session/hint");
}

// ===== Screen state =====

#[test]
fn test_login_screen_editing_and_focus() {
    let mut screen = LoginScreen::new();

    screen.add_char('a');
    screen.add_char('b');
    assert_eq!(screen.user_id, "ab");

    screen.next_field();
    screen.add_char('p');
    assert_eq!(screen.password, "p");

    screen.backspace();
    assert_eq!(screen.password, "");

    // Focus wraps between the two fields
    screen.next_field();
    assert_eq!(screen.focused_field, 0);
}

#[test]
fn test_login_screen_trims_user_id() {
    let mut screen = LoginScreen::new();
    for c in "  dev@example.com ".chars() {
        screen.add_char(c);
    }
    assert_eq!(screen.trimmed_user_id(), "dev@example.com");
}

#[test]
fn test_login_screen_paste() {
    let mut screen = LoginScreen::new();
    let mut clipboard = MockClipboard::with_text("  dev@example.com  ");

    screen.paste_from_clipboard(&mut clipboard);
    assert_eq!(screen.user_id, "dev@example.com");
    assert!(!screen.is_error);

    screen.next_field();
    let mut failing = MockClipboard::new_failing();
    screen.paste_from_clipboard(&mut failing);
    assert_eq!(screen.password, "");
    assert!(screen.is_error);
}

#[test]
fn test_working_professional_focus_cycles_both_ways() {
    let mut screen = WorkingProfessionalScreen::new();
    assert_eq!(screen.focused_field, 0);

    screen.previous_field();
    assert_eq!(screen.focused_field, WorkingProfessionalScreen::FIELD_COUNT - 1);

    screen.next_field();
    assert_eq!(screen.focused_field, 0);
}

#[test]
fn test_working_professional_paste_targets_focused_field() {
    let mut screen = WorkingProfessionalScreen::new();
    screen.next_field();

    let mut clipboard = MockClipboard::with_text("Acme");
    screen.paste_from_clipboard(&mut clipboard);

    assert_eq!(screen.organization, "Acme");
    assert_eq!(screen.current_role, "");
}

#[test]
fn test_college_student_option_cycling() {
    let mut screen = CollegeStudentScreen::new();
    assert!(screen.on_option_field());
    assert_eq!(screen.degree(), "");

    // First touch selects the first option, in either direction
    screen.next_option();
    assert_eq!(screen.degree(), DEGREE_OPTIONS[0]);
    screen.previous_option();
    assert_eq!(screen.degree(), DEGREE_OPTIONS[DEGREE_OPTIONS.len() - 1]);

    screen.next_field();
    screen.next_option();
    assert_eq!(screen.specialisation(), SPECIALISATION_OPTIONS[0]);
    screen.next_option();
    assert_eq!(screen.specialisation(), SPECIALISATION_OPTIONS[1]);
}

#[test]
fn test_college_student_untouched_options_submit_empty() {
    let screen = CollegeStudentScreen::new();
    let profile = screen.profile();

    assert_eq!(profile.degree, "");
    assert_eq!(profile.specialisation, "");
}

#[test]
fn test_college_student_text_editing_ignores_option_fields() {
    let mut screen = CollegeStudentScreen::new();

    // Typing on an option field is a no-op
    screen.add_char('x');
    assert_eq!(screen.college_organization, "");

    screen.next_field();
    screen.next_field();
    screen.add_char('M');
    screen.add_char('I');
    screen.add_char('T');
    assert_eq!(screen.college_organization, "MIT");
}

#[test]
fn test_college_student_paste_on_option_field_explains() {
    let mut screen = CollegeStudentScreen::new();
    let mut clipboard = MockClipboard::with_text("B.E.");

    screen.paste_from_clipboard(&mut clipboard);
    assert_eq!(screen.degree(), "", "Option fields do not accept pastes");
    assert!(screen.status_message.as_ref().unwrap().contains("Left/Right"));
}

#[test]
fn test_home_screen_selection_wraps() {
    let mut screen = HomeScreen::new(None);
    let count = HomeCard::all().len();

    assert_eq!(screen.selected_card(), HomeCard::FeaturedCourse);
    for _ in 0..count {
        screen.next();
    }
    assert_eq!(screen.selected_card(), HomeCard::FeaturedCourse);

    screen.previous();
    assert_eq!(screen.selected_card(), HomeCard::StudyAbroad);
}

#[test]
fn test_course_progress_selection_wraps() {
    let mut screen = CourseProgressScreen::new();

    screen.previous();
    assert_eq!(screen.selected_action(), CourseAction::ContinueLearning);
    screen.next();
    assert_eq!(screen.selected_action(), CourseAction::SeeDashboard);
}

#[test]
fn test_assessment_screen_present_item_resets_state() {
    let mut screen = AssessmentScreen::new("u".to_string(), "t".to_string());
    screen.set_hint("old hint".to_string());
    screen.selected_option = 2;

    let item = crate::quiz::QuizItem {
        id: "inh_E_1".to_string(),
        difficulty: "E".to_string(),
        text: "Q".to_string(),
        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        correct_index: 0,
    };
    screen.present_item(item, Some(120));

    assert_eq!(screen.phase, AssessmentPhase::Question);
    assert_eq!(screen.selected_option, 0);
    assert!(screen.hint.is_none());
    assert!(!screen.hint_used);
    assert_eq!(screen.time_left, Some(120));
}

#[test]
fn test_assessment_screen_option_selection_wraps() {
    let mut screen = AssessmentScreen::new("u".to_string(), "t".to_string());
    let item = crate::quiz::QuizItem {
        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ..Default::default()
    };
    screen.present_item(item, None);

    screen.previous_option();
    assert_eq!(screen.selected_option, 2);
    screen.next_option();
    assert_eq!(screen.selected_option, 0);
}

#[test]
fn test_assessment_screen_option_selection_without_item_is_noop() {
    let mut screen = AssessmentScreen::new("u".to_string(), "t".to_string());
    screen.next_option();
    screen.previous_option();
    assert_eq!(screen.selected_option, 0);
}

#[test]
fn test_revise_screen_tab_toggle_and_options() {
    let mut screen = ReviseScreen::new();
    assert_eq!(screen.tab, ReviseTab::Notes);

    screen.toggle_tab();
    assert_eq!(screen.tab, ReviseTab::ShortClips);
    screen.toggle_tab();
    assert_eq!(screen.tab, ReviseTab::Notes);

    screen.previous_option();
    assert_eq!(screen.selected_option, PRACTICE_OPTIONS.len() - 1);
    screen.next_option();
    assert_eq!(screen.selected_option, 0);
}

// ===== Types and helpers =====

#[test]
fn test_home_card_catalog() {
    let cards = HomeCard::all();
    assert_eq!(
        cards,
        [
            HomeCard::FeaturedCourse,
            HomeCard::SkillfitAssessment,
            HomeCard::StudyAbroad
        ]
    );
    assert_eq!(
        HomeCard::FeaturedCourse.label(),
        "Intro to Object Oriented Programming"
    );
    assert_eq!(HomeCard::FeaturedCourse.description(), "Enroll now!");
}

#[test]
fn test_course_action_catalog() {
    let actions = CourseAction::all();
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[0], CourseAction::SeeDashboard);
    assert_eq!(CourseAction::ReviseWithYoda.label(), "Revise with Yoda");
    for action in actions {
        assert!(!action.label().is_empty());
        assert!(!action.description().is_empty());
    }
}

#[test]
fn test_revise_tab_labels() {
    assert_eq!(ReviseTab::Notes.label(), "Notes");
    assert_eq!(ReviseTab::ShortClips.label(), "Short Lecture Clips");
}

#[test]
fn test_format_timer() {
    assert_eq!(format_timer(0), "0:00");
    assert_eq!(format_timer(65), "1:05");
    assert_eq!(format_timer(300), "5:00");
}
