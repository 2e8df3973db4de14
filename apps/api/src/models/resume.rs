use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::serde_helpers::{lenient_date, null_as_default};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    pub personal_info: Option<PersonalInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    pub template_id: Option<String>,
    pub theme_id: Option<String>,
}

impl Resume {
    /// Full name from the personal info block, empty when absent.
    pub fn full_name(&self) -> &str {
        self.personal_info
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or_default()
    }

    /// Summary shown in prompts. Taken from the personal info block, which is
    /// the field the editor writes to.
    pub fn personal_summary(&self) -> &str {
        self.personal_info
            .as_ref()
            .map(|p| p.summary.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_current_job: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field_of_study: String,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_current_education: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    pub gpa: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    SoftSkill,
    Language,
    Tool,
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: SkillLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_current_project: bool,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issuing_organization: String,
    #[serde(deserialize_with = "lenient_date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub does_not_expire: bool,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}
