use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the routes.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Sign Up: `POST /api/v1/signup`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `SignUpBody`: Sign-up request fields
/// - `SignUpAccepted`: Success payload
/// - `ErrorPayload`: Body of every 400 and 500 response
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::signup::signup,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::signup::SignUpBody,
            crate::models::signup::SignUpAccepted,
            crate::errors::ErrorPayload
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Sign Up", description = "Sign-up payload validation")
    ),
    info(
        description = "Validates sign-up payloads: required fields and email address",
        title = "Sign-up API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
