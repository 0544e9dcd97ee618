use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    EmailMessage, EmailSender, UserEmailNotificationError, UserEmailNotifier,
};
use crate::email::application::templates::{self, EmailTemplates};

pub const VERIFICATION_SUBJECT: &str = "Verification email";
pub const RESENT_VERIFICATION_SUBJECT: &str = "Resent verification";
pub const PASSWORD_RESET_SUBJECT: &str = "Password reset link";
pub const PASSWORD_RESET_DONE_SUBJECT: &str = "Password reset notification";

/// Base URLs that links in outgoing mail are built from.
#[derive(Debug, Clone)]
pub struct EmailLinks {
    pub app_url: String,
    pub client_url: String,
}

impl EmailLinks {
    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/api/users/verify/{}", self.app_url, token)
    }

    pub fn password_reset_link(&self, token: &str) -> String {
        format!("{}/reset-password/{}", self.client_url, token)
    }
}

#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    links: EmailLinks,
    templates: EmailTemplates,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("links", &self.links)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        links: EmailLinks,
    ) -> Result<Self, UserEmailNotificationError> {
        let templates = EmailTemplates::new()
            .map_err(|e| UserEmailNotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self {
            sender,
            links,
            templates,
        })
    }

    async fn deliver(
        &self,
        to: &str,
        subject: &str,
        html_body: String,
    ) -> Result<(), UserEmailNotificationError> {
        let message = EmailMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            text_body: templates::strip_tags(&html_body),
            html_body,
        };

        self.sender.send_email(&message).await.map_err(|e| {
            tracing::error!(to = %to, subject = %subject, error = %e, "Failed to send email");
            UserEmailNotificationError::EmailSendingFailed(e)
        })?;

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

fn render_failed(e: handlebars::RenderError) -> UserEmailNotificationError {
    tracing::error!(error = %e, "Failed to render email template");
    UserEmailNotificationError::TemplateFailed(e.to_string())
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.links.verification_link(token);
        self.deliver(
            email,
            VERIFICATION_SUBJECT,
            self.templates
                .verification_html(username, &link)
                .map_err(render_failed)?,
        )
        .await
    }

    async fn resend_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.links.verification_link(token);
        self.deliver(
            email,
            RESENT_VERIFICATION_SUBJECT,
            self.templates
                .verification_html(username, &link)
                .map_err(render_failed)?,
        )
        .await
    }

    async fn send_password_reset_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.links.password_reset_link(token);
        self.deliver(
            email,
            PASSWORD_RESET_SUBJECT,
            self.templates
                .password_reset_html(&link)
                .map_err(render_failed)?,
        )
        .await
    }

    async fn send_password_reset_done_email(
        &self,
        email: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(
            email,
            PASSWORD_RESET_DONE_SUBJECT,
            self.templates
                .password_reset_done_html()
                .map_err(render_failed)?,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, message: &EmailMessage) -> Result<(), String>;
        }
    }

    fn links() -> EmailLinks {
        EmailLinks {
            app_url: "http://localhost:8080".to_string(),
            client_url: "http://localhost:3000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_verification_email_links_to_verify_endpoint() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(function(|m: &EmailMessage| {
                m.to == "a@x.com"
                    && m.subject == VERIFICATION_SUBJECT
                    && m
                        .html_body
                        .contains("http://localhost:8080/api/users/verify/tok")
                    && !m.text_body.contains('<')
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserEmailService::new(Arc::new(sender), links()).unwrap();
        let result = service
            .send_verification_email("a@x.com", "a", "tok")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_resend_uses_its_own_subject() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(function(|m: &EmailMessage| {
                m.subject == RESENT_VERIFICATION_SUBJECT
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserEmailService::new(Arc::new(sender), links()).unwrap();

        assert!(service
            .resend_verification_email("a@x.com", "a", "tok")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_reset_email_links_to_client() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(function(|m: &EmailMessage| {
                m.subject == PASSWORD_RESET_SUBJECT
                    && m
                        .text_body
                        .contains("http://localhost:3000/reset-password/rst")
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserEmailService::new(Arc::new(sender), links()).unwrap();

        assert!(service
            .send_password_reset_email("a@x.com", "rst")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .times(1)
            .returning(|_| Err("SMTP timeout".to_string()));

        let service = UserEmailService::new(Arc::new(sender), links()).unwrap();
        let result = service.send_password_reset_done_email("a@x.com").await;

        assert!(matches!(
            result,
            Err(UserEmailNotificationError::EmailSendingFailed(msg)) if msg == "SMTP timeout"
        ));
    }

    #[tokio::test]
    async fn test_verification_email_escapes_username() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(function(|m: &EmailMessage| {
                m.html_body.contains("Hello &lt;i&gt;eve&lt;/i&gt;,")
                    && !m.html_body.contains("<i>eve</i>")
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserEmailService::new(Arc::new(sender), links()).unwrap();

        assert!(service
            .send_verification_email("e@x.com", "<i>eve</i>", "tok")
            .await
            .is_ok());
    }

    #[test]
    fn test_debug_hides_sender() {
        let service = UserEmailService::new(Arc::new(MockEmailSenderMock::new()), links()).unwrap();
        let debug_output = format!("{:?}", service);

        assert!(debug_output.contains("UserEmailService"));
        assert!(debug_output.contains("<dyn EmailSender>"));
    }
}
