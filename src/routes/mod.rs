//! JSON endpoints and the response envelope they share.
//!
//! Every body has the shape `{"success", "message", "data"}`; failures drop
//! `data` and validation failures add `errors` keyed by field.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use serde::Serialize;

use crate::forms::FieldErrors;
use crate::services::{Entity, ServiceError};

pub mod logs;
pub mod planos;
pub mod produtos;

pub const SUCCESS_MESSAGE: &str = "Operação realizada com sucesso";
pub const GENERIC_ERROR_MESSAGE: &str = "Ocorreu um erro";
pub const NOT_FOUND_MESSAGE: &str = "O recurso solicitado não existe ou foi removido.";
pub const INVALID_BODY_MESSAGE: &str = "O corpo da requisição é inválido.";
pub const INVALID_QUERY_MESSAGE: &str = "Os parâmetros da consulta são inválidos.";
pub const CONFLICT_MESSAGE: &str = "O produto já está associado a este plano.";

/// Response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        let message = errors
            .first_message()
            .unwrap_or(INVALID_BODY_MESSAGE)
            .to_string();
        Self {
            success: false,
            message,
            data: None,
            errors: Some(errors),
        }
    }
}

pub(crate) fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data))
}

pub(crate) fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::success(data))
}

fn failure(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::failure(message))
}

fn not_found_message(entity: Entity) -> &'static str {
    match entity {
        Entity::Plano => "Plano não encontrado.",
        Entity::Produto => "Produto não encontrado.",
    }
}

/// Translate a service failure into an envelope with the matching status.
///
/// `action` describes the failed operation in the server log.
pub(crate) fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => {
            HttpResponse::UnprocessableEntity().json(ApiResponse::invalid(errors))
        }
        ServiceError::NotFound(entity) => {
            failure(StatusCode::NOT_FOUND, not_found_message(entity))
        }
        ServiceError::Conflict => failure(StatusCode::CONFLICT, CONFLICT_MESSAGE),
        ServiceError::Persistence(err) => {
            log::error!("Failed to {action}: {err}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {err}");
    let response = failure(StatusCode::UNPROCESSABLE_ENTITY, INVALID_BODY_MESSAGE);
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = failure(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE);
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = failure(StatusCode::UNPROCESSABLE_ENTITY, INVALID_QUERY_MESSAGE);
    InternalError::from_response(err, response).into()
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    failure(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Register every endpoint and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(planos::show_planos)
        .service(planos::show_planos_with_produtos)
        .service(planos::show_plano)
        .service(planos::add_plano)
        .service(planos::edit_plano)
        .service(planos::delete_plano)
        .service(planos::attach_produto)
        .service(planos::detach_produto)
        .service(produtos::show_produtos)
        .service(produtos::show_produto)
        .service(produtos::add_produto)
        .service(produtos::edit_produto)
        .service(produtos::delete_produto)
        .service(logs::show_plano_produto_logs);
}
