use crate::errors::ValidationError;
use crate::handlers::Controller;
use crate::handlers::helpers::{bad_request, ok, server_error};
use crate::models::http::{HttpRequest, HttpResponse};
use crate::models::signup::SignUpAccepted;
use crate::validation::EmailValidator;
use tracing::{debug, error};

/// Fields every sign-up must carry. Order decides which one is reported
/// when several are missing.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

pub struct SignUpController<V> {
    email_validator: V,
}

impl<V: EmailValidator> SignUpController<V> {
    pub fn new(email_validator: V) -> Self {
        Self { email_validator }
    }
}

/// Collects the required fields in order, failing on the first absent one.
fn required_params(request: &HttpRequest) -> Result<[&str; 4], ValidationError> {
    let mut values = [""; 4];
    for (value, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        *value = request
            .param(field)
            .ok_or_else(|| ValidationError::missing(field))?;
    }
    Ok(values)
}

impl<V: EmailValidator> Controller for SignUpController<V> {
    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let [name, email, _password, _confirmation] = match required_params(request) {
            Ok(values) => values,
            Err(missing) => {
                debug!(param = missing.param(), "sign-up rejected: missing param");
                return bad_request(missing);
            }
        };

        match self.email_validator.is_valid(email) {
            Ok(true) => ok(SignUpAccepted {
                name: name.to_string(),
                email: email.to_string(),
            }),
            Ok(false) => {
                debug!("sign-up rejected: invalid email");
                bad_request(ValidationError::invalid("email"))
            }
            Err(err) => {
                error!(error = %err, "email validator failed");
                server_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EmailValidatorError, ServerError};
    use crate::models::http::ResponseBody;
    use crate::validation::MockEmailValidator;

    fn valid_request() -> HttpRequest {
        HttpRequest::from_iter([
            ("name", "any_name"),
            ("email", "any_email@mail.com"),
            ("password", "any_password"),
            ("passwordConfirmation", "any_password"),
        ])
    }

    fn request_without(fields: &[&str]) -> HttpRequest {
        let mut request = valid_request();
        for field in fields {
            request.body.remove(*field);
        }
        request
    }

    fn validator_never_called() -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().never();
        validator
    }

    fn validator_returning(valid: bool) -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(move |_| Ok(valid));
        validator
    }

    #[test]
    fn test_returns_400_if_no_name_is_provided() {
        // Arrange
        let sut = SignUpController::new(validator_never_called());

        // Act
        let response = sut.handle(&request_without(&["name"]));

        // Assert
        assert_eq!(response.status_code(), 400);
        assert_eq!(
            response.body(),
            &ResponseBody::Validation(ValidationError::missing("name"))
        );
    }

    #[test]
    fn test_returns_400_if_no_email_is_provided() {
        let sut = SignUpController::new(validator_never_called());
        let response = sut.handle(&request_without(&["email"]));

        assert_eq!(response, bad_request(ValidationError::missing("email")));
    }

    #[test]
    fn test_returns_400_if_no_password_is_provided() {
        let sut = SignUpController::new(validator_never_called());
        let response = sut.handle(&request_without(&["password"]));

        assert_eq!(response, bad_request(ValidationError::missing("password")));
    }

    #[test]
    fn test_returns_400_if_no_password_confirmation_is_provided() {
        let sut = SignUpController::new(validator_never_called());
        let response = sut.handle(&request_without(&["passwordConfirmation"]));

        assert_eq!(
            response,
            bad_request(ValidationError::missing("passwordConfirmation"))
        );
    }

    #[test]
    fn test_reports_only_first_missing_field_in_order() {
        let sut = SignUpController::new(validator_never_called());

        let response = sut.handle(&request_without(&["email", "name"]));
        assert_eq!(response, bad_request(ValidationError::missing("name")));

        let response = sut.handle(&request_without(&["passwordConfirmation", "password"]));
        assert_eq!(response, bad_request(ValidationError::missing("password")));

        let response = sut.handle(&HttpRequest::default());
        assert_eq!(response, bad_request(ValidationError::missing("name")));
    }

    #[test]
    fn test_empty_and_null_values_count_as_missing() {
        let sut = SignUpController::new(validator_never_called());

        let mut request = valid_request();
        request.body.insert("email".to_string(), Some(String::new()));
        assert_eq!(
            sut.handle(&request),
            bad_request(ValidationError::missing("email"))
        );

        let mut request = valid_request();
        request.body.insert("password".to_string(), None);
        assert_eq!(
            sut.handle(&request),
            bad_request(ValidationError::missing("password"))
        );
    }

    #[test]
    fn test_required_params_come_back_in_field_order() {
        let request = valid_request();

        let values = required_params(&request).unwrap();

        assert_eq!(
            values,
            ["any_name", "any_email@mail.com", "any_password", "any_password"]
        );
        assert_eq!(
            required_params(&request_without(&["password", "email"])),
            Err(ValidationError::missing("email"))
        );
    }

    #[test]
    fn test_returns_400_if_an_invalid_email_is_provided() {
        let sut = SignUpController::new(validator_returning(false));
        let response = sut.handle(&valid_request());

        assert_eq!(response.status_code(), 400);
        assert_eq!(
            response.body(),
            &ResponseBody::Validation(ValidationError::invalid("email"))
        );
    }

    #[test]
    fn test_calls_email_validator_with_literal_email() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .withf(|email| email == "  Any_Email@Mail.com ")
            .times(1)
            .returning(|_| Ok(true));
        let sut = SignUpController::new(validator);

        let mut request = valid_request();
        request.body.insert(
            "email".to_string(),
            Some("  Any_Email@Mail.com ".to_string()),
        );
        let response = sut.handle(&request);

        assert_eq!(response.status_code(), 200);
    }

    #[test]
    fn test_returns_500_if_email_validator_fails() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .returning(|_| Err(EmailValidatorError::Unavailable("boom".to_string())));
        let sut = SignUpController::new(validator);

        let response = sut.handle(&valid_request());

        assert_eq!(response.status_code(), 500);
        assert_eq!(response.body(), &ResponseBody::Server(ServerError));
        let json = serde_json::to_value(response.body()).unwrap();
        assert!(!json.to_string().contains("boom"));
    }

    #[test]
    fn test_returns_200_with_account_if_valid_data_is_provided() {
        let sut = SignUpController::new(validator_returning(true));
        let response = sut.handle(&valid_request());

        assert_eq!(
            response,
            ok(SignUpAccepted {
                name: "any_name".to_string(),
                email: "any_email@mail.com".to_string(),
            })
        );
    }

    #[test]
    fn test_identical_requests_yield_identical_responses() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .times(2)
            .returning(|email| Ok(email.ends_with("@mail.com")));
        let sut = SignUpController::new(validator);

        let request = valid_request();
        let first = sut.handle(&request);
        let second = sut.handle(&request);

        assert_eq!(first, second);
        assert_eq!(request, valid_request());
    }
}
