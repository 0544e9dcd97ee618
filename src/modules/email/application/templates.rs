//! HTML bodies for outgoing account emails and their plain-text rendering.

use handlebars::{Handlebars, RenderError, TemplateError};
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

const VERIFICATION: &str = "verification";
const PASSWORD_RESET: &str = "password_reset";
const PASSWORD_RESET_DONE: &str = "password_reset_done";

const VERIFICATION_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: Arial, sans-serif; color: #333;">
    <h2>Hello {{username}},</h2>
    <p>Thank you for signing up to Authors Haven.</p>
    <p>Please confirm your email address by following the link below:</p>
    <p><a href="{{link}}">{{link}}</a></p>
    <p>If you did not create an account, you can ignore this email.</p>
  </body>
</html>"#;

const PASSWORD_RESET_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: Arial, sans-serif; color: #333;">
    <h2>Password reset</h2>
    <p>We received a request to reset the password for your account.</p>
    <p>Use the link below to choose a new password:</p>
    <p><a href="{{link}}">{{link}}</a></p>
    <p>If you did not request a password reset, no action is needed.</p>
  </body>
</html>"#;

const PASSWORD_RESET_DONE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: Arial, sans-serif; color: #333;">
    <h2>Password updated</h2>
    <p>Your password has been changed successfully.</p>
    <p>If you did not make this change, reset your password immediately.</p>
  </body>
</html>"#;

/// Registered account email templates. Strict mode turns a missing
/// variable into a render error instead of an empty string.
#[derive(Clone)]
pub struct EmailTemplates {
    registry: Handlebars<'static>,
}

impl EmailTemplates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(VERIFICATION, VERIFICATION_TEMPLATE)?;
        registry.register_template_string(PASSWORD_RESET, PASSWORD_RESET_TEMPLATE)?;
        registry.register_template_string(PASSWORD_RESET_DONE, PASSWORD_RESET_DONE_TEMPLATE)?;

        Ok(Self { registry })
    }

    pub fn verification_html(&self, username: &str, link: &str) -> Result<String, RenderError> {
        self.registry.render(
            VERIFICATION,
            &json!({ "username": username, "link": link }),
        )
    }

    pub fn password_reset_html(&self, link: &str) -> Result<String, RenderError> {
        self.registry.render(PASSWORD_RESET, &json!({ "link": link }))
    }

    pub fn password_reset_done_html(&self) -> Result<String, RenderError> {
        self.registry.render(PASSWORD_RESET_DONE, &json!({}))
    }
}

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"(?s)<!DOCTYPE[^>]*>|<[^>]+>").expect("static regex"))
}

/// Drops markup and blank lines, keeping the visible text.
pub fn strip_tags(html: &str) -> String {
    let text = tag_pattern().replace_all(html, "");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
