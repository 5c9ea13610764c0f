use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    /// Free-text grouping label, e.g. "Language" or "Tool"
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub grade: Option<String>,
    pub location: Option<String>,
}

/// A stored contact message. `created_at` is fixed when the row is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// Input DTO for storing a contact message. Already validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
