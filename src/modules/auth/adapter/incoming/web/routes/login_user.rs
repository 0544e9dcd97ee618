use crate::api::schemas::{ErrorsResponse, MessageResponse};
use crate::auth::application::domain::validation::ValidationErrors;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// Password
    #[schema(example = "Secret123")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginUserRequest {
    pub user: LoginRequestDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "jane_doe")]
    pub username: String,

    /// Session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: LoginUserInfo,
}

fn login_rejected(e: &LoginError) -> HttpResponse {
    ApiResponse::errors(
        StatusCode::BAD_REQUEST,
        ValidationErrors::single("error", e.to_string()),
    )
}

/// User login
///
/// Authenticates with email and password and returns a session token.
#[utoipa::path(
    post,
    path = "/api/users/login/",
    tag = "users",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing or wrong credentials", body = ErrorsResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/users/login/")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    body: web::Json<LoginUserRequest>,
) -> impl Responder {
    let dto = body.into_inner().user;

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return login_rejected(&e),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(email = %response.email, "User logged in");
            HttpResponse::Ok().json(LoginResponse {
                user: LoginUserInfo {
                    email: response.email,
                    username: response.username,
                    token: response.token,
                },
            })
        }
        Err(e @ LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            login_rejected(&e)
        }
        Err(e @ (LoginError::MissingEmail | LoginError::MissingPassword)) => login_rejected(&e),
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
