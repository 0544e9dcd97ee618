use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::TokenPurpose;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

const ACCEPTED_SCHEMES: [&str; 2] = ["Bearer ", "Token "];

/// Caller identified by a valid session token
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub username: String,
}

/// Like [`AuthenticatedUser`] but never rejects the request.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalAuthenticatedUser(pub Option<AuthenticatedUser>);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get("Authorization")?.to_str().ok()?;

    ACCEPTED_SCHEMES
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, HttpResponse> {
    let token_provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider missing from app data");
            ApiResponse::internal_error()
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        ApiResponse::unauthorized("Authentication credentials were not provided.")
    })?;

    let claims = token_provider
        .decode_for(&token, &[TokenPurpose::Session])
        .map_err(|e| match e {
            TokenError::Expired => ApiResponse::unauthorized("Token has expired."),
            _ => ApiResponse::unauthorized("Invalid token."),
        })?;

    Ok(AuthenticatedUser {
        email: claims.email,
        username: claims.username.unwrap_or_default(),
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(create_api_error))
    }
}

impl FromRequest for OptionalAuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalAuthenticatedUser(authenticate(req).ok())))
    }
}
