use crate::api::schemas::{ErrorMessageResponse, ErrorsResponse};
use crate::auth::adapter::incoming::web::extractors::auth::OptionalAuthenticatedUser;
use crate::auth::application::use_cases::social_auth::{SocialAuthError, SocialAuthInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SocialAuthRequest {
    /// `google-oauth2`, `facebook` or `twitter`
    #[schema(example = "google-oauth2")]
    pub provider: String,

    #[schema(example = "ya29.a0AfH6SM...")]
    pub access_token: String,

    /// Required by OAuth1 providers
    pub access_token_secret: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialAuthResponse {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "jane")]
    pub username: String,
    /// Session token valid for 20 days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Sign in with a social provider
///
/// Exchanges provider credentials for a local session. A valid session token
/// in the request links the provider account to the signed-in user.
#[utoipa::path(
    post,
    path = "/api/users/social-auth/",
    tag = "users",
    request_body = SocialAuthRequest,
    responses(
        (status = 200, description = "Signed in", body = SocialAuthResponse),
        (status = 400, description = "Unknown provider or missing secret under `error`; account conflict or no shared email under `errors`", body = ErrorMessageResponse),
        (status = 500, description = "Provider rejected the token", body = ErrorsResponse)
    )
)]
#[post("/api/users/social-auth/")]
pub async fn social_auth_handler(
    data: web::Data<AppState>,
    current_user: OptionalAuthenticatedUser,
    body: web::Json<SocialAuthRequest>,
) -> impl Responder {
    let body = body.into_inner();
    let input = SocialAuthInput {
        provider: body.provider,
        access_token: body.access_token,
        access_token_secret: body.access_token_secret,
        current_user_email: current_user.0.map(|u| u.email),
    };

    match data.social_auth_use_case.execute(input).await {
        Ok(output) => {
            info!(email = %output.email, "Social sign-in");
            HttpResponse::Ok().json(SocialAuthResponse {
                email: output.email,
                username: output.username,
                token: output.token,
            })
        }
        Err(e @ (SocialAuthError::UnknownProvider | SocialAuthError::MissingTokenSecret)) => {
            ApiResponse::error(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e @ (SocialAuthError::AlreadyAssociated | SocialAuthError::EmailUnavailable)) => {
            ApiResponse::errors(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ SocialAuthError::Provider(_)) => {
            ApiResponse::errors(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Social sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
