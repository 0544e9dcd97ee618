use crate::api::schemas::{ErrorMessageResponse, ErrorsResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordRequest, LoginRequestDto, LoginResponse, LoginUserInfo, LoginUserRequest,
    RegisterUserDto, RegisterUserRequest, RegisterUserResponse, RegisteredUser, ResendEmailDto,
    ResendVerificationRequest, ResetPasswordRequest, SocialAuthRequest, SocialAuthResponse,
    UpdateUserDto, UpdateUserRequest, UserProfile, UserProfileResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Authors Haven Auth API",
        version = "1.0.0",
        description = "Account registration, email verification, login, password reset and social sign-in",
    ),
    paths(
        // Users
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_email::verify_user_email_handler,
        crate::auth::adapter::incoming::web::routes::resend_verification::resend_verification_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::social_auth::social_auth_handler,

        // Profile
        crate::auth::adapter::incoming::web::routes::fetch_user::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile::update_user_profile_handler,

        // Password
        crate::auth::adapter::incoming::web::routes::forgot_password::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password::reset_password_handler,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorMessageResponse,
            ErrorsResponse,

            RegisterUserDto,
            RegisterUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            ResendEmailDto,
            ResendVerificationRequest,
            LoginRequestDto,
            LoginUserRequest,
            LoginResponse,
            LoginUserInfo,
            SocialAuthRequest,
            SocialAuthResponse,
            UserProfile,
            UserProfileResponse,
            UpdateUserDto,
            UpdateUserRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Registration, verification and sign-in"),
        (name = "profile", description = "Signed-in user's profile"),
        (name = "password", description = "Password reset"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token. The `Token` scheme is also accepted."))
                        .build(),
                ),
            )
        }
    }
}
