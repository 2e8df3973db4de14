use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::PersonalInfo;
use crate::models::serde_helpers::{lenient_date, null_as_default};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub personal_info: Option<PersonalInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<PortfolioProject>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<PortfolioSection>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_media_links: Vec<SocialMediaLink>,
    pub theme_id: Option<String>,
    pub custom_domain: Option<String>,
    pub unique_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_public: bool,
}

impl Portfolio {
    pub fn full_name(&self) -> &str {
        self.personal_info
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProject {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    #[default]
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
    Custom,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSection {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub section_type: SectionType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMediaLink {
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub icon: Option<String>,
}
