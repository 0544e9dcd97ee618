use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase, forgot_password::IForgotPasswordUseCase,
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
    resend_verification::IResendVerificationUseCase, reset_password::IResetPasswordUseCase,
    social_auth::ISocialAuthUseCase, update_profile::UpdateUserProfileUseCase,
    verify_user_email::IVerifyUserEmailUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Route tests override the use case under test; everything else is a stub
/// that panics if called.
#[derive(Default)]
pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    verify_user_email: Option<Arc<dyn IVerifyUserEmailUseCase + Send + Sync>>,
    resend_verification: Option<Arc<dyn IResendVerificationUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    fetch_user_profile: Option<Arc<dyn FetchUserProfileUseCase + Send + Sync>>,
    update_user_profile: Option<Arc<dyn UpdateUserProfileUseCase + Send + Sync>>,
    forgot_password: Option<Arc<dyn IForgotPasswordUseCase + Send + Sync>>,
    reset_password: Option<Arc<dyn IResetPasswordUseCase + Send + Sync>>,
    social_auth: Option<Arc<dyn ISocialAuthUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_user_email(
        mut self,
        uc: impl IVerifyUserEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_user_email = Some(Arc::new(uc));
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resend_verification = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_forgot_password(
        mut self,
        uc: impl IForgotPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.forgot_password = Some(Arc::new(uc));
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reset_password = Some(Arc::new(uc));
        self
    }

    pub fn with_social_auth(mut self, uc: impl ISocialAuthUseCase + Send + Sync + 'static) -> Self {
        self.social_auth = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self
                .register_user
                .unwrap_or_else(|| Arc::new(StubRegisterUserUseCase)),
            verify_user_email_use_case: self
                .verify_user_email
                .unwrap_or_else(|| Arc::new(StubVerifyUserEmailUseCase)),
            resend_verification_use_case: self
                .resend_verification
                .unwrap_or_else(|| Arc::new(StubResendVerificationUseCase)),
            login_user_use_case: self
                .login_user
                .unwrap_or_else(|| Arc::new(StubLoginUserUseCase)),
            fetch_user_profile_use_case: self
                .fetch_user_profile
                .unwrap_or_else(|| Arc::new(StubFetchUserProfileUseCase)),
            update_user_profile_use_case: self
                .update_user_profile
                .unwrap_or_else(|| Arc::new(StubUpdateUserProfileUseCase)),
            forgot_password_use_case: self
                .forgot_password
                .unwrap_or_else(|| Arc::new(StubForgotPasswordUseCase)),
            reset_password_use_case: self
                .reset_password
                .unwrap_or_else(|| Arc::new(StubResetPasswordUseCase)),
            social_auth_use_case: self
                .social_auth
                .unwrap_or_else(|| Arc::new(StubSocialAuthUseCase)),
        })
    }
}
