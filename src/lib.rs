pub mod config;
pub mod errors;
pub mod factory;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;
pub mod validation;
