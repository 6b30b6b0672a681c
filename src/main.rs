pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::topic;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicsUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicsService,
};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_topics_use_case: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub delete_topic_use_case: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::other(e.to_string())
    })?;

    // SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if config.is_production() {
            error!("FATAL: test-helpers feature enabled in production environment!");
            return Err(std::io::Error::other(
                "test-helpers feature enabled in production",
            ));
        }
        tracing::warn!(
            environment = %config.environment,
            "Test helper routes are ENABLED"
        );
    }

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        std::io::Error::other(e.to_string())
    })?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await.map_err(|e| {
            error!(error = %e, "Migration failed");
            std::io::Error::other(e.to_string())
        })?;
    }

    let db_arc = Arc::new(conn);

    // Adapters and use cases
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        get_topics_use_case: Arc::new(GetTopicsService::new(topic_query.clone())),
        create_topic_use_case: Arc::new(CreateTopicService::new(topic_repo.clone())),
        delete_topic_use_case: Arc::new(DeleteTopicService::new(topic_query, topic_repo)),
    };

    #[cfg(feature = "test-helpers")]
    let jwt_config = web::Data::new(config.jwt.clone());

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app
                .app_data(jwt_config.clone())
                .configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
