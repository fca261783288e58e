use crate::errors::EmailValidatorError;
use std::sync::Arc;

/// Validates an email address domain by checking DNS records.
///
/// Syntax is checked first; a syntactically valid address then needs an MX
/// record, or an A/AAAA record as fallback. Resolver failures other than
/// "no records" are reported as faults.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
/// use signup_api::validation::{EmailValidator, dnsmx::DnsEmailValidator};
///
/// let validator = DnsEmailValidator::new(Duration::from_secs(2));
/// assert!(validator.is_valid("user@gmail.com").unwrap());
/// ```
pub mod dnsmx;

/// Validates an email address according to RFC 5322 and RFC 6531 syntax.
///
/// # Examples
/// ```
/// use signup_api::validation::syntax::check_syntax;
///
/// assert!(check_syntax("user.name+tag@example.com").is_ok());
/// assert!(check_syntax("Pelé@exämple.中国").is_ok());
/// assert!(check_syntax("invalid@ex_mple.com").is_err());
/// ```
pub mod syntax;

/// Decides whether a string is an acceptable email address.
///
/// `Ok(false)` is a regular rejection. `Err` means the check itself could not
/// be carried out; the sign-up controller answers such faults with a 500.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

impl<T: EmailValidator + ?Sized> EmailValidator for Arc<T> {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        (**self).is_valid(email)
    }
}

/// Validator handle shared across actix workers and the blocking pool.
pub type SharedEmailValidator = Arc<dyn EmailValidator + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::syntax::SyntaxEmailValidator;

    #[test]
    fn test_arc_delegates_to_inner_validator() {
        let shared: SharedEmailValidator = Arc::new(SyntaxEmailValidator);
        assert!(shared.is_valid("user@example.com").unwrap());
        assert!(!shared.is_valid("user.example.com").unwrap());
    }
}
