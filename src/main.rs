use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use signup_api::config::AppConfig;
use signup_api::openapi::ApiDoc;
use signup_api::{factory, routes, telemetry};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Sign-up Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Sign-up validation endpoint backed by the configured email validator
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Sign up: `POST /api/v1/signup`
/// - Health: `GET /api/v1/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    telemetry::init(config.log_format);

    let controller = Data::new(factory::make_signup_controller(&config));

    info!(host = %config.host, port = config.port, "starting sign-up service");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(controller.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
