use crate::{
    api::schemas::{ErrorsResponse, MessageResponse},
    auth::{
        adapter::incoming::web::{
            extractors::auth::AuthenticatedUser,
            routes::fetch_user::{UserProfile, UserProfileResponse},
        },
        application::use_cases::update_profile::{UpdateUserError, UpdateUserInput},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{http::StatusCode, put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

/// Every field is optional; omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "jane_doe")]
    pub username: Option<String>,
    #[schema(example = "NewSecret9")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub user: UpdateUserDto,
}

/// Update the current user's profile
#[utoipa::path(
    put,
    path = "/api/user/",
    tag = "profile",
    security(("BearerAuth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileResponse),
        (status = 400, description = "Validation failed", body = ErrorsResponse),
        (status = 401, description = "Missing or invalid session token", body = MessageResponse),
        (status = 404, description = "User no longer exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[put("/api/user/")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner().user;
    let input = UpdateUserInput {
        email: dto.email,
        username: dto.username,
        password: dto.password,
    };

    match data
        .update_user_profile_use_case
        .execute(&user.email, input)
        .await
    {
        Ok(output) => {
            info!(email = %output.email, "Profile updated");
            ApiResponse::user(
                StatusCode::OK,
                UserProfile {
                    email: output.email,
                    username: output.username,
                    is_verified: output.is_verified,
                    token: output.token,
                },
            )
        }
        Err(UpdateUserError::Validation(errors)) => {
            ApiResponse::errors(StatusCode::BAD_REQUEST, errors)
        }
        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::message(StatusCode::NOT_FOUND, "User does not exist.")
        }
        Err(e) => {
            error!(email = %user.email, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
