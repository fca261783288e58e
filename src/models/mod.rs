/// # Service Health Response
///
/// Liveness payload returned by `GET /api/v1/health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "signup-api",
///   "version": "0.1.0",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Transport-neutral request and response values exchanged with controllers.
///
/// The controller never sees actix types; the route adapter converts
/// between the two representations.
pub mod http;

/// # Sign-up Payloads
///
/// Request body documentation and the success payload of `POST /api/v1/signup`.
pub mod signup;

pub use health::HealthResponse;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
pub use signup::{SignUpAccepted, SignUpBody};
