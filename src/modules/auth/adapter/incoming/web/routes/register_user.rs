use crate::api::schemas::{ErrorsResponse, MessageResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

pub const REGISTERED_MESSAGE: &str =
    "User registered successfully. Check your email to activate your account.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "jane_doe")]
    pub username: String,

    #[serde(default)]
    #[schema(example = "Secret123")]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub user: RegisterUserDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "jane_doe")]
    pub username: String,
    /// Session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "User registered successfully. Check your email to activate your account.")]
    pub message: String,
    pub user_info: RegisteredUser,
}

/// Register a new user
///
/// Creates an inactive account, returns a session token and emails a
/// verification link.
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterUserResponse),
        (status = 400, description = "Validation failed or user exists", body = ErrorsResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/users/")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let dto = body.into_inner().user;
    let input = RegisterUserInput {
        email: dto.email,
        username: dto.username,
        password: dto.password,
    };

    match data.register_user_use_case.execute(input).await {
        Ok(output) => {
            info!(email = %output.email, "User registered");
            HttpResponse::Created().json(RegisterUserResponse {
                message: REGISTERED_MESSAGE.to_string(),
                user_info: RegisteredUser {
                    email: output.email,
                    username: output.username,
                    token: output.token,
                },
            })
        }
        Err(RegisterUserError::Validation(errors)) => {
            ApiResponse::errors(StatusCode::BAD_REQUEST, errors)
        }
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
