use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::serde_helpers::{lenient_date, null_as_default};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_description: String,
    pub job_url: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub application_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ApplicationStatus,
    pub resume_id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Bookmarked,
    Applied,
    PhoneScreen,
    Interview,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApplicationStatus::Bookmarked => "Bookmarked",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::PhoneScreen => "PhoneScreen",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        };
        f.write_str(label)
    }
}

/// A generated interview question. Created only by the response interpreter;
/// answer and notes are filled in later by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub notes: String,
}

impl InterviewQuestion {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: String::new(),
            notes: String::new(),
        }
    }
}
