use crate::api::schemas::MessageResponse;
use crate::auth::application::use_cases::resend_verification::ResendVerificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

pub const RESENT_MESSAGE: &str = "Verification email resent successfully.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResendEmailDto {
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResendVerificationRequest {
    pub user: ResendEmailDto,
}

/// Resend the verification email
#[utoipa::path(
    post,
    path = "/api/users/verify/resend-email",
    tag = "users",
    request_body = ResendVerificationRequest,
    responses(
        (status = 200, description = "Verification email sent", body = MessageResponse),
        (status = 400, description = "Bad email, unknown or already verified user", body = MessageResponse),
        (status = 500, description = "Email could not be sent", body = MessageResponse)
    )
)]
#[post("/api/users/verify/resend-email")]
pub async fn resend_verification_handler(
    data: web::Data<AppState>,
    body: web::Json<ResendVerificationRequest>,
) -> impl Responder {
    let email = body.into_inner().user.email;

    match data.resend_verification_use_case.execute(&email).await {
        Ok(()) => {
            info!(email = %email.trim(), "Verification email resent");
            ApiResponse::ok_message(RESENT_MESSAGE)
        }
        Err(
            e @ (ResendVerificationError::InvalidEmail
            | ResendVerificationError::UserNotFound
            | ResendVerificationError::AlreadyVerified),
        ) => ApiResponse::bad_request(&e.to_string()),
        Err(e) => {
            error!(error = %e, "Resending verification failed");
            ApiResponse::internal_error()
        }
    }
}
