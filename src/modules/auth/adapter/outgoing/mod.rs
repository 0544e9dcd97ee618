pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod social;
pub mod social_account_repository_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;
