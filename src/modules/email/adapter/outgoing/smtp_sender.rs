use crate::email::application::ports::outgoing::email_sender::{EmailMessage, EmailSender};
use crate::shared::config::{ConfigError, MailConfig, SmtpTransportConfig};
use async_trait::async_trait;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &MailConfig) -> Result<Self, ConfigError> {
        let transport = match &config.transport {
            SmtpTransportConfig::Relay {
                server,
                username,
                password,
            } => {
                let creds = Credentials::new(username.clone(), password.clone());

                AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| ConfigError::Invalid("SMTP_SERVER".to_string(), e.to_string()))?
                    .credentials(creds)
                    .build()
            }
            // Local/test relay (Mailpit, MailHog, etc.)
            SmtpTransportConfig::Local { host, port } => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
                    .port(*port)
                    .build()
            }
        };

        Ok(Self::new_with_mailer(Box::new(transport), &config.from))
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, String> {
        Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(message.to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(message.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                message.html_body.clone(),
            ))
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), String> {
        let email = self.build_message(message)?;

        self.mailer.send(email).await
    }
}
