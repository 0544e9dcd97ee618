use crate::{
    api::schemas::MessageResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::use_cases::fetch_profile::FetchUserError,
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, http::StatusCode, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "jane_doe")]
    pub username: String,
    #[schema(example = true)]
    pub is_verified: bool,
    /// Fresh session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    pub user: UserProfile,
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/user/",
    tag = "profile",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserProfileResponse),
        (status = 401, description = "Missing or invalid session token", body = MessageResponse),
        (status = 404, description = "User no longer exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/user/")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_profile_use_case.execute(&user.email).await {
        Ok(output) => ApiResponse::user(
            StatusCode::OK,
            UserProfile {
                email: output.email,
                username: output.username,
                is_verified: output.is_verified,
                token: output.token,
            },
        ),
        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::message(StatusCode::NOT_FOUND, "User does not exist.")
        }
        Err(e) => {
            error!(email = %user.email, error = %e, "Fetching profile failed");
            ApiResponse::internal_error()
        }
    }
}
