use crate::errors::ErrorPayload;
use actix_web::{HttpResponse, error::InternalError, web};
use tracing::debug;

/// # Health Check Endpoint
///
/// Returns the service status, name, version and a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "service": "signup-api",
///   "version": "0.1.0",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # Sign-up Endpoint
///
/// Adapts `POST /signup` to the [`SignUpController`].
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `name`, `email`, `password` and
///   `passwordConfirmation` string fields
///
/// ## Responses
/// - **200 OK**: Payload accepted
/// - **400 Bad Request**: Missing param, invalid email or malformed body
/// - **500 Internal Server Error**: Email validator failure
///
/// [`SignUpController`]: crate::handlers::signup::SignUpController
pub mod signup;


/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Health check endpoints (see [`health::configure_routes`])
/// - Sign-up endpoints (see [`signup::configure_routes`])
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/health - Service health status
/// POST /api/v1/signup - Sign-up validation endpoint
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`signup::configure_routes`]: crate::routes::signup::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(signup::configure_routes),
    );
}

/// JSON extractor settings answering undecodable bodies with a
/// `MALFORMED_BODY` payload instead of actix's plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting malformed request body");
        let payload = ErrorPayload::malformed_body(&err);
        InternalError::from_response(err, HttpResponse::BadRequest().json(payload)).into()
    })
}
