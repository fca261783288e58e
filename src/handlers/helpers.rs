use crate::errors::{ServerError, ValidationError};
use crate::models::http::{HttpResponse, ResponseBody};
use crate::models::signup::SignUpAccepted;

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

pub fn ok(accepted: SignUpAccepted) -> HttpResponse {
    HttpResponse::new(OK, ResponseBody::Accepted(accepted))
}

pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse::new(BAD_REQUEST, ResponseBody::Validation(error))
}

pub fn server_error() -> HttpResponse {
    HttpResponse::new(INTERNAL_SERVER_ERROR, ResponseBody::Server(ServerError))
}
