use async_trait::async_trait;

use crate::auth::application::use_cases::{
    fetch_profile::{FetchUserError, FetchUserOutput, FetchUserProfileUseCase},
    forgot_password::{ForgotPasswordError, IForgotPasswordUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    register_user::{
        IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
    },
    resend_verification::{IResendVerificationUseCase, ResendVerificationError},
    reset_password::{IResetPasswordUseCase, ResetPasswordError, ResetPasswordInput},
    social_auth::{ISocialAuthUseCase, SocialAuthError, SocialAuthInput, SocialAuthOutput},
    update_profile::{
        UpdateUserError, UpdateUserInput, UpdateUserOutput, UpdateUserProfileUseCase,
    },
    verify_user_email::{IVerifyUserEmailUseCase, VerifyUserEmailError},
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyUserEmailUseCase;

#[async_trait]
impl IVerifyUserEmailUseCase for StubVerifyUserEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<(), VerifyUserEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendVerificationUseCase;

#[async_trait]
impl IResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _email: &str) -> Result<(), ResendVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _email: &str) -> Result<FetchUserOutput, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(
        &self,
        _current_email: &str,
        _data: UpdateUserInput,
    ) -> Result<UpdateUserOutput, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubForgotPasswordUseCase;

#[async_trait]
impl IForgotPasswordUseCase for StubForgotPasswordUseCase {
    async fn execute(&self, _email: &str) -> Result<(), ForgotPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSocialAuthUseCase;

#[async_trait]
impl ISocialAuthUseCase for StubSocialAuthUseCase {
    async fn execute(
        &self,
        _input: SocialAuthInput,
    ) -> Result<SocialAuthOutput, SocialAuthError> {
        unimplemented!("Not used in this test")
    }
}
