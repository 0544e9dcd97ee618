use crate::api::schemas::MessageResponse;
use crate::auth::application::use_cases::verify_user_email::VerifyUserEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, http::StatusCode, web, Responder};
use tracing::{error, info, warn};

pub const VERIFIED_MESSAGE: &str = "Email verification successful.";

/// Verify an email address
///
/// Consumes the token from the verification link. Session and password
/// reset tokens are refused.
#[utoipa::path(
    get,
    path = "/api/users/verify/{token}",
    tag = "users",
    params(("token" = String, Path, description = "Verification token")),
    responses(
        (status = 200, description = "Email verified", body = MessageResponse),
        (status = 400, description = "Unknown user or already verified", body = MessageResponse),
        (status = 403, description = "Expired or invalid token", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/users/verify/{token}")]
pub async fn verify_user_email_handler(
    data: web::Data<AppState>,
    token: web::Path<String>,
) -> impl Responder {
    match data.verify_user_email_use_case.execute(&token).await {
        Ok(()) => {
            info!("Email verified");
            ApiResponse::ok_message(VERIFIED_MESSAGE)
        }
        Err(e @ (VerifyUserEmailError::TokenExpired | VerifyUserEmailError::TokenInvalid)) => {
            warn!(error = %e, "Verification token refused");
            ApiResponse::message(StatusCode::FORBIDDEN, &e.to_string())
        }
        Err(e @ (VerifyUserEmailError::UserNotFound | VerifyUserEmailError::AlreadyVerified)) => {
            ApiResponse::bad_request(&e.to_string())
        }
        Err(VerifyUserEmailError::DatabaseError(msg)) => {
            error!(error = %msg, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}
