//! Profile Data Structure
//!
//! A profile is the extended, one-per-user record: job status, skills, social
//! links and two embedded, most-recent-first lists (experience and education).
//! Updates are partial: only the fields present in a [`ProfileUpdate`] are
//! written, everything else keeps its stored value.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A developer profile
///
/// `user` is the owning user's id. It is not serialized directly; responses
/// render the owner as a `{id, name, avatar}` summary instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Optional social network links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Social {
    /// Overwrite only the links that `other` supplies
    pub fn merge(&mut self, other: Social) {
        merge_field(&mut self.youtube, other.youtube);
        merge_field(&mut self.twitter, other.twitter);
        merge_field(&mut self.facebook, other.facebook);
        merge_field(&mut self.linkedin, other.linkedin);
        merge_field(&mut self.instagram, other.instagram);
    }
}

/// A job entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A school entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Partial profile update; `None` means "leave as is"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Social,
}

impl Profile {
    /// Empty profile for `user`, to be filled by [`Profile::apply`]
    pub fn new(user: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: String::new(),
            githubusername: None,
            skills: Vec::new(),
            social: Social::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: ProfileUpdate) {
        merge_field(&mut self.company, update.company);
        merge_field(&mut self.website, update.website);
        merge_field(&mut self.location, update.location);
        merge_field(&mut self.bio, update.bio);
        merge_field(&mut self.githubusername, update.githubusername);
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        self.social.merge(update.social);
    }

    /// Add an experience entry at the front of the list
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Remove the experience entry with this id, if any
    pub fn remove_experience(&mut self, id: Uuid) -> Option<Experience> {
        let index = self.experience.iter().position(|entry| entry.id == id)?;
        Some(self.experience.remove(index))
    }

    /// Add an education entry at the front of the list
    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// Remove the education entry with this id, if any
    pub fn remove_education(&mut self, id: Uuid) -> Option<Education> {
        let index = self.education.iter().position(|entry| entry.id == id)?;
        Some(self.education.remove(index))
    }
}

/// Split a comma-separated skills string into trimmed, non-empty entries
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

fn merge_field(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}
