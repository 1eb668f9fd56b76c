//! Static portfolio content queried by the dispatcher.
//!
//! The payload is bundled as JSON and deserialized once per page load.

use serde::{Deserialize, Serialize};

use crate::config::{APP_NAME, GUEST_USER};
use crate::core::error::ContentError;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Content {
    pub profile: Profile,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub stats: Stats,
}

impl Content {
    /// Parse a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        if content.profile.user.trim().is_empty() {
            return Err(ContentError::MissingUser);
        }
        Ok(content)
    }

    /// Minimal payload used when the bundled one cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: APP_NAME.to_string(),
                user: GUEST_USER.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// Login name; also the home directory name.
    pub user: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub freelance: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub chat: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct About {
    pub tagline: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent (0-100).
    pub level: u8,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Experience {
    pub title: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Stats {
    pub happy_clients: String,
    pub completed_projects: String,
    pub hours_of_work: String,
}
