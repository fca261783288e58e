use crate::models::http::{HttpRequest, HttpResponse};

/// # Response Helpers
///
/// Constructors pairing each status code with its body kind:
///
/// - `ok` → **200** with the accepted account
/// - `bad_request` → **400** with a validation error
/// - `server_error` → **500** with an opaque server error
pub mod helpers;

/// # Sign-up Controller
///
/// Validates a sign-up payload:
/// 1. Required fields `name`, `email`, `password`, `passwordConfirmation`,
///    in that order
/// 2. Email validity through the injected [`EmailValidator`]
///
/// ## Responses
/// - **200 OK**: payload accepted
/// - **400 Bad Request**: `Missing param: <field>` or `Invalid param: email`
/// - **500 Internal Server Error**: the email validator faulted
///
/// [`EmailValidator`]: crate::validation::EmailValidator
pub mod signup;

/// Maps a transport-neutral request to a response.
///
/// Implementations report every failure through the returned response.
pub trait Controller {
    fn handle(&self, request: &HttpRequest) -> HttpResponse;
}
