use crate::errors::ErrorPayload;
use crate::factory::SignUpHandler;
use crate::handlers::Controller;
use crate::models::http;
use crate::models::signup::{SignUpAccepted, SignUpBody};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use std::collections::HashMap;
use std::sync::Arc;

impl From<http::HttpResponse> for HttpResponse {
    fn from(response: http::HttpResponse) -> Self {
        let status = StatusCode::from_u16(response.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(response.body())
    }
}

/// Runs a controller on the blocking pool, where validators may perform
/// blocking lookups.
pub async fn dispatch<C>(
    controller: Arc<C>,
    request: http::HttpRequest,
) -> Result<HttpResponse, actix_web::Error>
where
    C: Controller + Send + Sync + 'static,
{
    let response = web::block(move || controller.handle(&request)).await?;
    Ok(response.into())
}

#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignUpBody,
    responses(
        (status = 200, description = "Sign-up payload accepted", body = SignUpAccepted),
        (status = 400, description = "Missing param, invalid email or malformed body", body = ErrorPayload),
        (status = 500, description = "Email validator failure", body = ErrorPayload)
    ),
    tag = "Sign Up"
)]
#[post("/signup")]
pub async fn signup(
    controller: web::Data<SignUpHandler>,
    body: web::Json<HashMap<String, Option<String>>>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = http::HttpRequest::new(body.into_inner());
    dispatch(controller.into_inner(), request).await
}

/// Registers `POST /signup`. Expects `web::Data<SignUpHandler>` in app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup);
}
