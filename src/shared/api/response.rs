// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// `{"message": "..."}`
#[derive(Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

/// `{"error": "..."}`
#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// `{"errors": ...}`; either a field map or a single string.
#[derive(Serialize)]
pub struct ErrorsBody<E: Serialize> {
    pub errors: E,
}

/// `{"user": {...}}`
#[derive(Serialize)]
pub struct UserEnvelope<T: Serialize> {
    pub user: T,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn message(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(MessageBody { message })
    }

    pub fn error(status: StatusCode, error: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody { error })
    }

    pub fn errors<E: Serialize>(status: StatusCode, errors: E) -> HttpResponse {
        HttpResponse::build(status).json(ErrorsBody { errors })
    }

    pub fn user<T: Serialize>(status: StatusCode, user: T) -> HttpResponse {
        HttpResponse::build(status).json(UserEnvelope { user })
    }

    pub fn ok_message(message: &str) -> HttpResponse {
        Self::message(StatusCode::OK, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::message(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::message(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
