use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documented shape of the sign-up request body.
///
/// The route itself accepts any JSON object of string or null values so that
/// absent fields reach the controller and are reported as `MISSING_PARAM`
/// rather than rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SignUpBody {
    #[schema(example = "any_name")]
    pub name: Option<String>,
    #[schema(example = "any_email@mail.com")]
    pub email: Option<String>,
    #[schema(example = "any_password")]
    pub password: Option<String>,
    #[serde(rename = "passwordConfirmation")]
    #[schema(example = "any_password")]
    pub password_confirmation: Option<String>,
}

/// Success payload: the account details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignUpAccepted {
    pub name: String,
    pub email: String,
}
