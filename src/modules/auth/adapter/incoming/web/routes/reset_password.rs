use crate::api::schemas::MessageResponse;
use crate::auth::application::use_cases::reset_password::{ResetPasswordError, ResetPasswordInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

pub const PASSWORD_UPDATED_MESSAGE: &str = "Password updated successfully";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[schema(example = "NewSecret9")]
    pub password: String,

    #[serde(default)]
    #[schema(example = "NewSecret9")]
    pub confirm_password: String,
}

/// Set a new password using an emailed reset token
#[utoipa::path(
    put,
    path = "/api/users/password-reset/{token}",
    tag = "password",
    params(("token" = String, Path, description = "Password reset token")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Mismatch, weak password, wrong token type or unknown user", body = MessageResponse),
        (status = 401, description = "Expired or undecodable token", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[put("/api/users/password-reset/{token}")]
pub async fn reset_password_handler(
    data: web::Data<AppState>,
    token: web::Path<String>,
    body: web::Json<ResetPasswordRequest>,
) -> impl Responder {
    let body = body.into_inner();
    let input = ResetPasswordInput {
        token: token.into_inner(),
        password: body.password,
        confirm_password: body.confirm_password,
    };

    match data.reset_password_use_case.execute(input).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::ok_message(PASSWORD_UPDATED_MESSAGE)
        }
        Err(
            e @ (ResetPasswordError::TokenExpired
            | ResetPasswordError::TokenUndecodable
            | ResetPasswordError::TokenRejected(_)),
        ) => {
            warn!(error = %e, "Reset token refused");
            ApiResponse::unauthorized(&e.to_string())
        }
        Err(
            e @ (ResetPasswordError::PasswordsDoNotMatch
            | ResetPasswordError::WrongTokenType
            | ResetPasswordError::InvalidPassword(_)
            | ResetPasswordError::UserNotFound),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
