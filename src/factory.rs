use crate::config::{AppConfig, EmailValidationMode};
use crate::handlers::signup::SignUpController;
use crate::validation::SharedEmailValidator;
use crate::validation::dnsmx::DnsEmailValidator;
use crate::validation::syntax::SyntaxEmailValidator;
use std::sync::Arc;
use tracing::info;

/// Controller type served by the HTTP routes.
pub type SignUpHandler = SignUpController<SharedEmailValidator>;

pub fn make_email_validator(config: &AppConfig) -> SharedEmailValidator {
    let validator: SharedEmailValidator = match config.email_validation {
        EmailValidationMode::Syntax => Arc::new(SyntaxEmailValidator),
        EmailValidationMode::Dns => Arc::new(DnsEmailValidator::new(config.dns_timeout)),
    };
    info!(mode = ?config.email_validation, "email validator ready");
    validator
}

pub fn make_signup_controller(config: &AppConfig) -> SignUpHandler {
    SignUpController::new(make_email_validator(config))
}
