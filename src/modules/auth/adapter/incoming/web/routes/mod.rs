pub mod fetch_user;
pub mod forgot_password;
pub mod login_user;
pub mod register_user;
pub mod resend_verification;
pub mod reset_password;
pub mod social_auth;
pub mod update_profile;
pub mod verify_email;

use actix_web::web;

pub use fetch_user::{get_user_profile_handler, UserProfile, UserProfileResponse};
pub use forgot_password::{forgot_password_handler, ForgotPasswordRequest};
pub use login_user::{
    login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo, LoginUserRequest,
};
pub use register_user::{
    register_user_handler, RegisterUserDto, RegisterUserRequest, RegisterUserResponse,
    RegisteredUser,
};
pub use resend_verification::{
    resend_verification_handler, ResendEmailDto, ResendVerificationRequest,
};
pub use reset_password::{reset_password_handler, ResetPasswordRequest};
pub use social_auth::{social_auth_handler, SocialAuthRequest, SocialAuthResponse};
pub use update_profile::{update_user_profile_handler, UpdateUserDto, UpdateUserRequest};
pub use verify_email::verify_user_email_handler;

/// Registers every user and profile endpoint.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user_handler)
        .service(login_user_handler)
        .service(resend_verification_handler)
        .service(verify_user_email_handler)
        .service(get_user_profile_handler)
        .service(update_user_profile_handler)
        .service(forgot_password_handler)
        .service(reset_password_handler)
        .service(social_auth_handler);
}
