//! Adaptive quiz client
//!
//! Typed client for the skill-assessment engine behind the gateway's
//! `/api/quiz` proxy. A session is keyed by `(user_id, topic)`; the engine
//! owns all session state and the client is a pass-through: it serves items,
//! reports answers, and collects the end-of-session report.

use crate::api::ApiClient;
use crate::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Default assessment topic
pub const DEFAULT_TOPIC: &str = "inheritance oops";

/// Default session length in seconds
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;

/// Default maximum number of questions per session
pub const DEFAULT_MAX_QUESTIONS: u32 = 10;

/// Default AI backend selector
pub const DEFAULT_AI_MODE: &str = "auto";

/// Session key for callers with no logged-in identity
pub fn anonymous_user_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Serialize)]
struct StartRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
    time_limit: u32,
    max_q: u32,
    ai: &'a str,
}

#[derive(Serialize)]
struct SessionRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
}

#[derive(Serialize)]
struct ItemRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
    item_id: &'a str,
}

#[derive(Serialize)]
struct AnswerRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
    item_id: &'a str,
    choice_index: usize,
    hint_used: bool,
    time_sec: f64,
}

#[derive(Serialize)]
struct ExplainBatchRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
    entries: &'a [ExplainEntry],
}

/// Acknowledgement of a session start
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartResponse {
    /// Whether the engine reset the session
    #[serde(default)]
    pub ok: bool,
}

/// One multiple-choice item served by the engine
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizItem {
    /// Engine-side item id
    #[serde(default)]
    pub id: String,

    /// Difficulty band (E, M or H)
    #[serde(default)]
    pub difficulty: String,

    /// Question text
    #[serde(default)]
    pub text: String,

    /// Answer options
    #[serde(default)]
    pub options: Vec<String>,

    /// Index of the correct option; carried for the end-of-session report,
    /// never shown while answering
    #[serde(default)]
    pub correct_index: usize,
}

impl QuizItem {
    /// Difficulty band expanded for display
    pub fn difficulty_label(&self) -> &str {
        match self.difficulty.as_str() {
            "E" => "Easy",
            "M" => "Medium",
            "H" => "Hard",
            other => other,
        }
    }
}

/// Next step in a running session: another item, or the session end
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextResponse {
    /// True when the session is over
    #[serde(default)]
    pub end: bool,

    /// Why the session ended (when `end` is true)
    #[serde(default)]
    pub reason: Option<String>,

    /// The served item (when `end` is false)
    #[serde(default)]
    pub item: Option<QuizItem>,

    /// Seconds remaining in the session
    #[serde(default)]
    pub time_left: Option<u64>,
}

/// Hint for the current item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HintResponse {
    /// AI-generated hint text
    #[serde(default)]
    pub hint: String,
}

/// Engine-side learner state snapshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearnerState {
    /// Current difficulty band
    #[serde(default)]
    pub band: String,

    /// Items asked so far
    #[serde(default)]
    pub asked: u32,

    /// Ability estimate
    #[serde(default)]
    pub ability: f64,

    /// Accuracy over the last five answers
    #[serde(default)]
    pub acc_last5: f64,

    /// Fatigue score
    #[serde(default)]
    pub fatigue: f64,

    /// Mastery estimate
    #[serde(default)]
    pub mastery: f64,
}

/// Verdict for one submitted answer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerResponse {
    /// Whether the chosen option was correct
    #[serde(default)]
    pub correct: bool,

    /// Index of the correct option
    #[serde(default)]
    pub correct_index: usize,

    /// Learner state after this answer
    #[serde(default)]
    pub state: LearnerState,
}

/// One answered item, as submitted for end-of-session explanations
#[derive(Debug, Clone, Serialize)]
pub struct ExplainEntry {
    /// Engine-side item id
    pub item_id: String,
    /// Question text
    pub item_text: String,
    /// Answer options
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_index: usize,
    /// Index the learner chose
    pub chosen_index: usize,
    /// Whether a hint was requested for this item
    pub hint_used: bool,
    /// Seconds spent on this item
    pub time_sec: f64,
}

/// Per-item explanation in the end-of-session report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemExplanation {
    /// Engine-side item id
    #[serde(default)]
    pub item_id: String,

    /// AI-generated explanation of the correct answer
    #[serde(default)]
    pub explanation: String,

    /// Index the learner chose
    #[serde(default)]
    pub chosen_index: usize,

    /// Index of the correct option
    #[serde(default)]
    pub correct_index: usize,
}

/// End-of-session assessment report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentReport {
    /// Overall performance label
    #[serde(default)]
    pub classification: String,

    /// Correctly answered items
    #[serde(default)]
    pub score: u32,

    /// Items answered
    #[serde(default)]
    pub asked: u32,

    /// Final ability estimate
    #[serde(default)]
    pub ability: f64,

    /// Final mastery estimate
    #[serde(default)]
    pub mastery: f64,

    /// Accuracy over the last five answers
    #[serde(default)]
    pub acc_last5: f64,

    /// Final fatigue score
    #[serde(default)]
    pub fatigue: f64,

    /// Per-item explanations
    #[serde(default)]
    pub explanations: Vec<ItemExplanation>,
}

/// Client for the adaptive quiz engine
///
/// Wraps the platform API client, so quiz calls carry the same session
/// credential and surface errors the same way as the rest of the API.
#[derive(Clone)]
pub struct QuizClient {
    api: ApiClient,
}

impl QuizClient {
    /// Create a quiz client on top of an existing API client
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Start (or reset) an assessment session with the default limits
    pub async fn start(&self, user_id: &str, topic: &str) -> Result<StartResponse> {
        let body = serde_json::to_value(StartRequest {
            user_id,
            topic,
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            max_q: DEFAULT_MAX_QUESTIONS,
            ai: DEFAULT_AI_MODE,
        })?;
        let payload = self
            .api
            .request_json(Method::POST, "/api/quiz/session/start", Some(body))
            .await?;
        Ok(decode(payload))
    }

    /// Fetch the next item, or learn that the session ended
    pub async fn next(&self, user_id: &str, topic: &str) -> Result<NextResponse> {
        let body = serde_json::to_value(SessionRequest { user_id, topic })?;
        let payload = self
            .api
            .request_json(Method::POST, "/api/quiz/session/next", Some(body))
            .await?;
        Ok(decode(payload))
    }

    /// Request a hint for the given item
    pub async fn hint(&self, user_id: &str, topic: &str, item_id: &str) -> Result<HintResponse> {
        let body = serde_json::to_value(ItemRequest {
            user_id,
            topic,
            item_id,
        })?;
        let payload = self
            .api
            .request_json(Method::POST, "/api/quiz/session/hint", Some(body))
            .await?;
        Ok(decode(payload))
    }

    /// Submit an answer and get the verdict plus the updated learner state
    pub async fn answer(
        &self,
        user_id: &str,
        topic: &str,
        item_id: &str,
        choice_index: usize,
        hint_used: bool,
        time_sec: f64,
    ) -> Result<AnswerResponse> {
        let body = serde_json::to_value(AnswerRequest {
            user_id,
            topic,
            item_id,
            choice_index,
            hint_used,
            time_sec,
        })?;
        let payload = self
            .api
            .request_json(Method::POST, "/api/quiz/session/answer", Some(body))
            .await?;
        Ok(decode(payload))
    }

    /// Submit the answered items and collect the assessment report
    pub async fn explain_batch(
        &self,
        user_id: &str,
        topic: &str,
        entries: &[ExplainEntry],
    ) -> Result<AssessmentReport> {
        let body = serde_json::to_value(ExplainBatchRequest {
            user_id,
            topic,
            entries,
        })?;
        let payload = self
            .api
            .request_json(Method::POST, "/api/quiz/session/explain_batch", Some(body))
            .await?;
        Ok(decode(payload))
    }
}

/// Decode a quiz payload, defaulting on shape mismatches
fn decode<T>(payload: Option<Value>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(payload) = payload else {
        return T::default();
    };
    serde_json::from_value(payload).unwrap_or_else(|e| {
        debug!("Unrecognized quiz payload: {}", e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_request_wire_shape() {
        let body = serde_json::to_value(StartRequest {
            user_id: "learner-1",
            topic: DEFAULT_TOPIC,
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            max_q: DEFAULT_MAX_QUESTIONS,
            ai: DEFAULT_AI_MODE,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "user_id": "learner-1",
                "topic": "inheritance oops",
                "time_limit": 300,
                "max_q": 10,
                "ai": "auto"
            })
        );
    }

    #[test]
    fn test_next_response_with_item() {
        let payload = json!({
            "end": false,
            "item": {
                "id": "inh_E_3",
                "difficulty": "E",
                "text": "Which keyword creates a subclass?",
                "options": ["extends", "implements", "super", "new"],
                "correct_index": 0
            },
            "time_left": 242
        });

        let next: NextResponse = serde_json::from_value(payload).unwrap();
        assert!(!next.end);
        assert_eq!(next.time_left, Some(242));
        let item = next.item.unwrap();
        assert_eq!(item.id, "inh_E_3");
        assert_eq!(item.options.len(), 4);
        assert_eq!(item.correct_index, 0);
    }

    #[test]
    fn test_next_response_session_end() {
        let payload = json!({"end": true, "reason": "time"});
        let next: NextResponse = serde_json::from_value(payload).unwrap();
        assert!(next.end);
        assert_eq!(next.reason.as_deref(), Some("time"));
        assert!(next.item.is_none());
    }

    #[test]
    fn test_answer_response_state() {
        let payload = json!({
            "correct": true,
            "correct_index": 2,
            "state": {
                "band": "M",
                "asked": 4,
                "ability": 0.62,
                "acc_last5": 0.8,
                "fatigue": 1,
                "mastery": 0.45
            }
        });

        let verdict: AnswerResponse = serde_json::from_value(payload).unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.correct_index, 2);
        assert_eq!(verdict.state.band, "M");
        assert_eq!(verdict.state.asked, 4);
        // Integer fatigue values deserialize into the float field
        assert_eq!(verdict.state.fatigue, 1.0);
    }

    #[test]
    fn test_explain_entry_wire_shape() {
        let entry = ExplainEntry {
            item_id: "inh_M_1".to_string(),
            item_text: "Which feature of OOP indicates code reusability?".to_string(),
            options: vec![
                "Abstraction".to_string(),
                "Polymorphism".to_string(),
                "Encapsulation".to_string(),
                "Inheritance".to_string(),
            ],
            correct_index: 3,
            chosen_index: 1,
            hint_used: true,
            time_sec: 12.5,
        };

        let wire = serde_json::to_value(&entry).unwrap();
        assert_eq!(wire["item_id"], "inh_M_1");
        assert_eq!(wire["correct_index"], 3);
        assert_eq!(wire["chosen_index"], 1);
        assert_eq!(wire["hint_used"], true);
        assert_eq!(wire["time_sec"], 12.5);
    }

    #[test]
    fn test_assessment_report_decoding() {
        let payload = json!({
            "classification": "Intermediate",
            "score": 6,
            "asked": 10,
            "ability": 0.31,
            "mastery": 0.52,
            "acc_last5": 0.6,
            "fatigue": 2,
            "explanations": [
                {"item_id": "inh_E_1", "explanation": "Inheritance reuses base class code.",
                 "chosen_index": 3, "correct_index": 3}
            ]
        });

        let report: AssessmentReport = serde_json::from_value(payload).unwrap();
        assert_eq!(report.classification, "Intermediate");
        assert_eq!(report.score, 6);
        assert_eq!(report.asked, 10);
        assert_eq!(report.explanations.len(), 1);
        assert_eq!(report.explanations[0].correct_index, 3);
    }

    #[test]
    fn test_decode_tolerates_null_and_mismatched_payloads() {
        let report: AssessmentReport = decode(None);
        assert_eq!(report.score, 0);

        let hint: HintResponse = decode(Some(json!("not an object")));
        assert_eq!(hint.hint, "");
    }

    #[test]
    fn test_anonymous_user_ids_are_unique() {
        assert_ne!(anonymous_user_id(), anonymous_user_id());
    }
}
