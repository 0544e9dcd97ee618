mod email_service;

pub use email_service::{EmailLinks, UserEmailService};
