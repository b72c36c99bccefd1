//! Data models and wire types for the portfolio service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Consultant profile served at `/api/profile`
///
/// A singleton per deployment. Loaded once at startup from the content
/// directory and never mutated afterwards, so repeated reads serialize
/// identically for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Display rate, e.g. "$65.00/hr"
    pub rate: String,
    /// Job-success score in percent (0-100)
    pub job_success: u8,
    pub total_jobs: u32,
    pub total_hours: u32,
    /// Typical first-response time, e.g. "under 2 hours"
    pub response_time: String,
    pub availability: String,
    pub location: String,
}

/// A service offering with its feature list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon identifier resolved by the presentation layer
    pub icon: String,
    pub features: Vec<String>,
}

/// Fixed category enumeration used to filter projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Automation,
    Web,
    Integration,
    Infrastructure,
}

impl Category {
    /// Parse a query-string value into a category.
    ///
    /// Returns `None` for anything outside the enumeration; callers
    /// treat that as "matches nothing", not as an error.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "automation" => Some(Self::Automation),
            "web" => Some(Self::Web),
            "integration" => Some(Self::Integration),
            "infrastructure" => Some(Self::Infrastructure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::Web => "web",
            Self::Integration => "integration",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Image reference resolved by the presentation layer
    pub image: String,
    pub category: Category,
    pub technologies: Vec<String>,
}

/// A client testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: u32,
    pub content: String,
    pub client_name: String,
    pub client_title: String,
    /// Star rating, 1-5 inclusive; enforced when the content store loads
    pub rating: u8,
    pub image: String,
}

/// Raw contact form as submitted by the client
///
/// Unknown fields are rejected at the serde boundary rather than
/// silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored contact message. Write-once: built from a validated form
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a message from a form, trimming surrounding whitespace and
    /// stamping a fresh identifier and timestamp.
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            body: form.message.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Confirmation returned after a message is accepted and stored
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgment {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// A single field violation reported back to the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending form field
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "must be a valid email address")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Response body for POST /api/contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ContactResponse {
    pub fn accepted(id: Uuid) -> Self {
        Self { success: true, id: Some(id), errors: None }
    }
}

/// Query parameters accepted by GET /api/projects
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// Category to filter by; values outside the enumeration match nothing
    pub category: Option<String>,
}
