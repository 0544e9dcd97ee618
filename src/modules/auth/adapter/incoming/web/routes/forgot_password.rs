use crate::api::schemas::MessageResponse;
use crate::auth::application::use_cases::forgot_password::ForgotPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

pub const RESET_LINK_SENT_MESSAGE: &str =
    "Kindly use the link sent to your email to reset your password";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Request a password reset link
#[utoipa::path(
    post,
    path = "/api/users/password-reset/",
    tag = "password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link emailed", body = MessageResponse),
        (status = 400, description = "Unknown account or bad email", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/users/password-reset/")]
pub async fn forgot_password_handler(
    data: web::Data<AppState>,
    body: web::Json<ForgotPasswordRequest>,
) -> impl Responder {
    match data.forgot_password_use_case.execute(&body.email).await {
        Ok(()) => ApiResponse::ok_message(RESET_LINK_SENT_MESSAGE),
        Err(e @ (ForgotPasswordError::UserNotFound | ForgotPasswordError::InvalidEmail(_))) => {
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Forgot password failed");
            ApiResponse::internal_error()
        }
    }
}
