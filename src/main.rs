pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::social::{FacebookProvider, GoogleProvider, TwitterProvider};
use crate::auth::adapter::outgoing::social_account_repository_postgres::SocialAccountRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::social_account_repository::SocialAccountRepository;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::social::SocialProviderRegistry;
use crate::auth::application::services::user_profile::{
    FetchUserProfileService, UpdateUserProfileService,
};
use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase,
    forgot_password::{ForgotPasswordUseCase, IForgotPasswordUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    resend_verification::{IResendVerificationUseCase, ResendVerificationUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    social_auth::{ISocialAuthUseCase, SocialAuthUseCase},
    update_profile::UpdateUserProfileUseCase,
    verify_user_email::{IVerifyUserEmailUseCase, VerifyUserEmailUseCase},
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::email::application::services::{EmailLinks, UserEmailService};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub verify_user_email_use_case: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub resend_verification_use_case: Arc<dyn IResendVerificationUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_user_profile_use_case: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub forgot_password_use_case: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub social_auth_use_case: Arc<dyn ISocialAuthUseCase + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn social_providers(config: &AppConfig) -> anyhow::Result<SocialProviderRegistry> {
    let http_client = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()?;

    let mut registry = SocialProviderRegistry::new()
        .register(Arc::new(GoogleProvider::new(http_client.clone())))
        .register(Arc::new(FacebookProvider::new(http_client.clone())));

    match &config.social.twitter {
        Some(credentials) => {
            registry = registry.register(Arc::new(TwitterProvider::new(
                http_client,
                credentials.clone(),
            )));
        }
        None => warn!("TWITTER_CONSUMER_KEY/SECRET not set; twitter sign-in disabled"),
    }

    info!(providers = ?registry.names(), "Social providers registered");
    Ok(registry)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    // Adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let social_accounts: Arc<dyn SocialAccountRepository> =
        Arc::new(SocialAccountRepositoryPostgres::new(Arc::clone(&db_arc)));

    let token_provider: Arc<dyn TokenProvider> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new(&config.argon2)?);
    let password_policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);

    let email_sender: Arc<dyn EmailSender + Send + Sync> =
        Arc::new(SmtpEmailSender::from_config(&config.mail)?);
    let email_notifier: Arc<dyn UserEmailNotifier> = Arc::new(UserEmailService::new(
        email_sender,
        EmailLinks {
            app_url: config.links.app_url.clone(),
            client_url: config.links.client_url.clone(),
        },
    )?);

    // Use cases
    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&password_policy),
            Arc::clone(&token_provider),
            Arc::clone(&email_notifier),
        )),
        verify_user_email_use_case: Arc::new(VerifyUserEmailUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&token_provider),
        )),
        resend_verification_use_case: Arc::new(ResendVerificationUseCase::new(
            user_query.clone(),
            Arc::clone(&token_provider),
            Arc::clone(&email_notifier),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        fetch_user_profile_use_case: Arc::new(FetchUserProfileService::new(
            user_query.clone(),
            Arc::clone(&token_provider),
        )),
        update_user_profile_use_case: Arc::new(UpdateUserProfileService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&password_policy),
            Arc::clone(&token_provider),
        )),
        forgot_password_use_case: Arc::new(ForgotPasswordUseCase::new(
            user_query.clone(),
            Arc::clone(&token_provider),
            Arc::clone(&email_notifier),
        )),
        reset_password_use_case: Arc::new(ResetPasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&password_policy),
            Arc::clone(&token_provider),
            Arc::clone(&email_notifier),
        )),
        social_auth_use_case: Arc::new(SocialAuthUseCase::new(
            user_query,
            user_repo,
            social_providers(&config)?,
            social_accounts,
            password_hasher,
            Arc::clone(&token_provider),
        )),
    };

    let server_url = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %server_url, "Server listening");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    crate::auth::adapter::incoming::web::routes::init_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
