pub mod social_accounts;
pub mod users;
