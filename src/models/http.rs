use crate::errors::{ServerError, ValidationError};
use crate::models::signup::SignUpAccepted;
use serde::Serialize;
use std::collections::HashMap;

/// Inbound request as seen by a controller: a flat map of body fields.
///
/// `None` stands for an explicit JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub body: HashMap<String, Option<String>>,
}

impl HttpRequest {
    pub fn new(body: HashMap<String, Option<String>>) -> Self {
        Self { body }
    }

    /// Returns the field value when it is present and non-empty.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.body
            .get(name)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for HttpRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            body: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Accepted(SignUpAccepted),
    Validation(ValidationError),
    Server(ServerError),
}

/// Outbound response produced by a controller.
///
/// Fields are private: instances come from the helpers in
/// [`crate::handlers::helpers`], which keep status code and body kind paired.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status_code: u16,
    body: ResponseBody,
}

impl HttpResponse {
    pub(crate) fn new(status_code: u16, body: ResponseBody) -> Self {
        Self { status_code, body }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}
