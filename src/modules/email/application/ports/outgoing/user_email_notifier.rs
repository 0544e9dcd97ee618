#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),

    #[error("Email template failed: {0}")]
    TemplateFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    /// First verification mail, sent at registration.
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn resend_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_done_email(
        &self,
        email: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
