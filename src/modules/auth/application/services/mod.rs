pub mod password;
pub mod social;
pub mod user_profile;
