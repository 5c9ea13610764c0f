use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static biographical record returned with every portfolio read.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(example = "Ajai Sekar")]
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl Profile {
    pub fn owner() -> Self {
        Self {
            name: "Ajai Sekar".to_string(),
            title: "Full Stack Developer".to_string(),
            summary: "Full Stack Developer with hands-on experience in enterprise application \
                      development, specializing in Angular, TypeScript, Laravel, and Java. Proven \
                      track record of delivering production-ready features for HRMS and ATS \
                      platforms."
                .to_string(),
            email: "ajaiofficial06@gmail.com".to_string(),
            phone: "+91 9361685137".to_string(),
            github: "https://github.com/ajai-sekar".to_string(),
            linkedin: "https://linkedin.com/in/ajai-sekar".to_string(),
            resume_url: Some("/resume.pdf".to_string()),
        }
    }
}
