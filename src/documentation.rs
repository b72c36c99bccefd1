use utoipa::OpenApi;

use crate::models::{
    Category, ContactForm, ContactResponse, FieldError, Profile, Project, Service, Testimonial,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Service API",
        version = "1.0.0",
        description = "Content and contact API backing a freelance automation consultant's site",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development server")
    ),
    paths(
        crate::handlers::get_profile,
        crate::handlers::list_services,
        crate::handlers::list_projects,
        crate::handlers::list_testimonials,
        crate::handlers::submit_contact,
        crate::handlers::health_check,
        crate::handlers::get_metrics,
    ),
    components(
        schemas(
            Profile,
            Service,
            Project,
            Testimonial,
            Category,
            ContactForm,
            ContactResponse,
            FieldError,
            HealthCheckResponse,
            ErrorResponse,
            ErrorDetails,
        )
    ),
    tags(
        (name = "content", description = "Read-only marketing content"),
        (name = "contact", description = "Contact form submission"),
        (name = "health", description = "Health check operations"),
        (name = "metrics", description = "Metrics operations")
    )
)]
pub struct ApiDoc;

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorDetails {
    #[schema(example = "storage_unavailable")]
    pub r#type: String,
    #[schema(example = "message store unavailable")]
    pub message: String,
    #[schema(example = 503)]
    pub status: u16,
}
