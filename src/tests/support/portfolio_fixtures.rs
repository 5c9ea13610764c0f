use chrono::Utc;

use crate::portfolio::application::domain::{Message, Project, Skill};

pub fn sample_project(id: i32, title: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("Description for {}", title),
        tech_stack: vec!["Rust".to_string(), "Actix".to_string()],
        link: None,
        github_link: None,
        image_url: None,
    }
}

pub fn sample_skill(id: i32, name: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        category: "Language".to_string(),
    }
}

pub fn sample_message(id: i32) -> Message {
    Message {
        id,
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        message: "hi".to_string(),
        created_at: Utc::now(),
    }
}
