/**
 * Profile Handler Types
 *
 * Request bodies for the profile, experience and education endpoints, and
 * the profile response that embeds the owner's summary.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::backend::auth::users::UserSummary;
use crate::backend::middleware::{parse_date, validate_date, RequestSchema};
use crate::shared::profile::parse_skills;
use crate::shared::{Education, Experience, Profile, ProfileUpdate, SharedError, Social};

/// Create-or-update profile request
///
/// `skills` is a comma-separated string. Optional fields that are absent or
/// empty leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl RequestSchema for ProfileRequest {
    const FIELDS: &'static [&'static str] = &["status", "skills"];
}

/// `status` must hold something other than whitespace
fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(required("Status is required"));
    }
    Ok(())
}

/// `skills` must name at least one skill once split
fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if parse_skills(skills).is_empty() {
        return Err(required("Skills are required"));
    }
    Ok(())
}

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(message))
}

impl ProfileRequest {
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            company: supplied(self.company),
            website: supplied(self.website),
            location: supplied(self.location),
            bio: supplied(self.bio),
            status: supplied(Some(self.status)),
            githubusername: supplied(self.githubusername),
            skills: Some(parse_skills(&self.skills)),
            social: Social {
                youtube: supplied(self.youtube),
                twitter: supplied(self.twitter),
                facebook: supplied(self.facebook),
                linkedin: supplied(self.linkedin),
                instagram: supplied(self.instagram),
            },
        }
    }
}

/// Add-experience request
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct ExperienceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "From date is required"),
        custom(function = "validate_date")
    )]
    pub from: String,
    #[validate(custom(function = "validate_date"))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl RequestSchema for ExperienceRequest {
    const FIELDS: &'static [&'static str] = &["title", "company", "from", "to"];
}

impl ExperienceRequest {
    pub fn into_entry(self) -> Result<Experience, SharedError> {
        Ok(Experience {
            id: Uuid::new_v4(),
            from: required_date("from", &self.from)?,
            to: optional_date("to", self.to.as_deref())?,
            title: self.title,
            company: self.company,
            location: supplied(self.location),
            current: self.current,
            description: supplied(self.description),
        })
    }
}

/// Add-education request
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct EducationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub fieldofstudy: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "From date is required"),
        custom(function = "validate_date")
    )]
    pub from: String,
    #[validate(custom(function = "validate_date"))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl RequestSchema for EducationRequest {
    const FIELDS: &'static [&'static str] = &["school", "degree", "fieldofstudy", "from", "to"];
}

impl EducationRequest {
    pub fn into_entry(self) -> Result<Education, SharedError> {
        Ok(Education {
            id: Uuid::new_v4(),
            from: required_date("from", &self.from)?,
            to: optional_date("to", self.to.as_deref())?,
            school: self.school,
            degree: self.degree,
            fieldofstudy: self.fieldofstudy,
            current: self.current,
            description: supplied(self.description),
        })
    }
}

/// Profile with its owner's `{id, name, avatar}`
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: Option<UserSummary>,
}

/// `{ "msg": ... }` confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// `None` for absent or blank values
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_date(field: &str, value: &str) -> Result<chrono::NaiveDate, SharedError> {
    parse_date(value).ok_or_else(|| SharedError::field(field, "Please include a valid date"))
}

fn optional_date(field: &str, value: Option<&str>) -> Result<Option<chrono::NaiveDate>, SharedError> {
    match value {
        Some(v) if !v.trim().is_empty() => required_date(field, v).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_fields_are_not_supplied() {
        let request = ProfileRequest {
            status: "Developer".to_string(),
            skills: "rust, go ,, sql".to_string(),
            company: Some(String::new()),
            website: Some("https://example.com".to_string()),
            twitter: Some("   ".to_string()),
            ..Default::default()
        };

        let update = request.into_update();
        assert_eq!(update.company, None);
        assert_eq!(update.website.as_deref(), Some("https://example.com"));
        assert_eq!(update.social.twitter, None);
        assert_eq!(update.status.as_deref(), Some("Developer"));
        assert_eq!(
            update.skills,
            Some(vec!["rust".to_string(), "go".to_string(), "sql".to_string()])
        );
    }

    #[test]
    fn test_blank_status_and_skills_rejected() {
        let request = ProfileRequest {
            status: "   ".to_string(),
            skills: " , , ".to_string(),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        let ordered = crate::backend::middleware::validation::ordered_field_errors(&errors, ProfileRequest::FIELDS);

        assert_eq!(
            ordered,
            vec![
                crate::shared::FieldError::new("status", "Status is required"),
                crate::shared::FieldError::new("skills", "Skills are required"),
            ]
        );
    }

    #[test]
    fn test_experience_entry_dates() {
        let request = ExperienceRequest {
            title: "Eng".to_string(),
            company: "Acme".to_string(),
            from: "2020-01-01".to_string(),
            to: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let entry = request.into_entry().unwrap();
        assert_eq!(entry.from, chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(entry.to, None);
    }

    #[test]
    fn test_education_requires_fields() {
        let request = EducationRequest::default();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["school", "degree", "fieldofstudy", "from"] {
            assert!(fields.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_response_flattens_profile() {
        let owner = UserSummary {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            avatar: "https://www.gravatar.com/avatar/x".to_string(),
        };
        let mut profile = Profile::new(owner.id);
        profile.status = "Developer".to_string();

        let json = serde_json::to_value(ProfileResponse {
            profile,
            user: Some(owner.clone()),
        })
        .unwrap();

        assert_eq!(json["status"], "Developer");
        assert_eq!(json["user"]["name"], "A");
        assert_eq!(json["user"]["id"], owner.id.to_string());
    }
}
