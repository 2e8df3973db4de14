//! Response Interpreter: shapes raw completion text into what the caller expects.
//!
//! Prose tasks get the text back untouched. Interview question tasks get a
//! list of fresh `InterviewQuestion` records. Parsing never fails: output in an
//! unexpected shape simply yields fewer records.

use serde::Serialize;
use tracing::debug;

use crate::generation::template::{QuestionPolicy, ResponseMode};
use crate::llm_client::prompts::ERROR_MARKER;
use crate::llm_client::LlmError;
use crate::models::job_application::InterviewQuestion;

const SHORT_PREFIX: &str = "Q:";
const LONG_PREFIX: &str = "Question:";

/// Interpreted result of one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Text { content: String },
    Questions { questions: Vec<InterviewQuestion> },
}

/// Applies the response mode to the raw completion text.
pub fn interpret(mode: ResponseMode, raw: String) -> TaskOutput {
    match mode {
        ResponseMode::Passthrough => TaskOutput::Text { content: raw },
        ResponseMode::Questions(policy) => TaskOutput::Questions {
            questions: parse_questions(&raw, policy),
        },
    }
}

/// Splits the text into trimmed, non-empty lines and turns the accepted ones
/// into new question records.
pub fn parse_questions(raw: &str, policy: QuestionPolicy) -> Vec<InterviewQuestion> {
    let lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    let questions: Vec<InterviewQuestion> = match policy {
        QuestionPolicy::Unlabeled => lines.map(InterviewQuestion::new).collect(),
        QuestionPolicy::Labeled => lines
            .filter_map(strip_question_label)
            .map(InterviewQuestion::new)
            .collect(),
    };

    debug!(
        "Parsed {} interview questions ({:?} policy)",
        questions.len(),
        policy
    );
    questions
}

/// `Q: text` / `Question: text` → `text`; anything else is rejected.
fn strip_question_label(line: &str) -> Option<&str> {
    line.strip_prefix(SHORT_PREFIX)
        .or_else(|| line.strip_prefix(LONG_PREFIX))
        .map(str::trim)
}

/// Text shown to an end user in place of content when a completion fails.
pub fn failure_text(error: &LlmError) -> String {
    format!("{ERROR_MARKER} {error}")
}
