pub mod password_hasher;
pub mod social_account_repository;
pub mod social_auth_provider;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use user_query::UserQuery;
pub use user_repository::{UserRepository, UserRepositoryError};
