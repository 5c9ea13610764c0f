pub mod api;
mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, StorageBackend};
use crate::portfolio::adapter::outgoing::{InMemoryPortfolioStorage, PortfolioStoragePostgres};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::PortfolioStorage;
use crate::portfolio::application::storage_context::StorageContext;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub storage: Arc<dyn PortfolioStorage>,
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

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    let storage: Arc<dyn PortfolioStorage> = match &config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory portfolio storage");
            Arc::new(InMemoryPortfolioStorage::new())
        }
        StorageBackend::Postgres { database_url } => {
            let mut opt = ConnectOptions::new(database_url.clone());
            opt.max_connections(config.db_max_connections)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt).await?;

            if config.run_migrations {
                info!("Running pending migrations");
                Migrator::up(&conn, None).await?;
            }

            info!("Using Postgres portfolio storage");
            Arc::new(PortfolioStoragePostgres::new(Arc::new(conn)))
        }
    };

    // Seeds the catalog; failure aborts startup
    let context = StorageContext::initialize(storage).await?;

    let state = AppState {
        portfolio: context.use_cases(),
        storage: context.storage(),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
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
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
