pub mod fetch_profile;
pub mod forgot_password;
pub mod login_user;
pub mod register_user;
pub mod resend_verification;
pub mod reset_password;
pub mod social_auth;
pub mod update_profile;
pub mod verify_user_email;
