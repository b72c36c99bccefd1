//! HTTP request handlers for the portfolio service

use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::errors::AppError;
use crate::metrics::{metrics_handler, SiteMetrics};
use crate::models::{
    Acknowledgment, Category, ContactForm, ContactMessage, ContactResponse, Profile, Project,
    ProjectsQuery, Service, Testimonial,
};
use crate::repository::MessageRepository;
use crate::validation::validate_contact_form;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Consultant profile", body = Profile)
    )
)]
/// Consultant profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.content.profile().clone()))
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "content",
    responses(
        (status = 200, description = "Service offerings in display order", body = Vec<Service>)
    )
)]
/// Service offerings
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    Ok(Json(state.content.services().to_vec()))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Project case studies, optionally filtered by category", body = Vec<Project>)
    )
)]
/// Project case studies
///
/// With a `category` query parameter the result is filtered by exact
/// match against the category enumeration; a value outside the
/// enumeration yields an empty array, never an error.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = match query.category.as_deref() {
        None => state.content.projects(None),
        Some(raw) => match Category::from_param(raw) {
            Some(category) => state.content.projects(Some(category)),
            None => Vec::new(),
        },
    };
    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "content",
    responses(
        (status = 200, description = "Client testimonials in display order", body = Vec<Testimonial>)
    )
)]
/// Client testimonials
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(state.content.testimonials().to_vec()))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message accepted", body = ContactResponse),
        (status = 400, description = "Validation failure with per-field errors", body = ContactResponse),
        (status = 503, description = "Message store unavailable", body = crate::documentation::ErrorResponse)
    )
)]
/// Accept a contact form submission
///
/// The raw form is validated first; every field violation is reported
/// together with a 400 so the client can render all of them at once.
/// A validated form becomes a write-once message with a generated
/// identifier and timestamp, handed to the message repository in a
/// single attempt. The caller owns any retry policy.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    if let Err(violations) = validate_contact_form(&form) {
        SiteMetrics::record_submission("rejected");
        tracing::debug!(violations = violations.len(), "contact form rejected");
        return Err(AppError::Validation(violations));
    }

    let message = ContactMessage::from_form(&form);
    let ack = submit_message(state.messages.as_ref(), message).await.inspect_err(|_| {
        SiteMetrics::record_submission("failed");
    })?;

    SiteMetrics::record_submission("accepted");
    tracing::info!(
        message_id = %ack.id,
        subject_len = form.subject.trim().len(),
        "contact message accepted"
    );

    Ok(Json(ContactResponse::accepted(ack.id)))
}

/// Store an already-validated message.
///
/// Re-checks the form-derived fields before touching storage; a failure
/// here means the caller skipped validation and is reported as a server
/// error, not a client one.
pub async fn submit_message(
    repository: &dyn MessageRepository,
    message: ContactMessage,
) -> Result<Acknowledgment, AppError> {
    let recheck = ContactForm {
        name: message.name.clone(),
        email: message.email.clone(),
        subject: message.subject.clone(),
        message: message.body.clone(),
    };
    if let Err(violations) = validate_contact_form(&recheck) {
        return Err(AppError::InvalidMessage {
            reason: format!("{} field(s) failed the re-check", violations.len()),
        });
    }

    let ack = Acknowledgment { id: message.id, received_at: message.created_at };
    repository.store(message).await?;
    Ok(ack)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::documentation::HealthCheckResponse)
    )
)]
/// Health check endpoint
pub async fn health_check() -> Json<crate::documentation::HealthCheckResponse> {
    Json(crate::documentation::HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain")
    )
)]
/// Metrics endpoint
pub async fn get_metrics() -> impl axum::response::IntoResponse {
    metrics_handler().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMessageRepository;

    fn valid_message() -> ContactMessage {
        ContactMessage::from_form(&ContactForm {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a message.".to_string(),
        })
    }

    #[tokio::test]
    async fn submit_message_acknowledges_with_message_identity() {
        let repo = InMemoryMessageRepository::new();
        let message = valid_message();
        let (id, created_at) = (message.id, message.created_at);

        let ack = submit_message(&repo, message).await.unwrap();
        assert_eq!(ack.id, id);
        assert_eq!(ack.received_at, created_at);
        assert!(repo.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn submit_message_recheck_catches_contract_violations() {
        let repo = InMemoryMessageRepository::new();
        let mut message = valid_message();
        message.body = "short".to_string();

        let err = submit_message(&repo, message).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidMessage { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
