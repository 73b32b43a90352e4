pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::account;

use crate::account::adapter::incoming::web::routes::init_routes as init_account_routes;
use crate::account::adapter::outgoing::security::Argon2Hasher;
use crate::account::adapter::outgoing::{
    ActorQueryPostgres, ActorRepositoryPostgres, RegisterApprovalQueryPostgres,
    RegisterApprovalRepositoryPostgres,
};
use crate::account::application::ports::outgoing::PasswordHasher;
use crate::account::application::services::{
    CreateAdminService, DeleteAdminService, GetAdminByIdService, GetAdminsService,
    GetRegisterApprovalsService, LoginAdminService, RegisterAdminService,
    SetAdminActivationService, UpdateAdminService, UpdateRegisterApprovalService,
};
use crate::account::application::AccountUseCases;
use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
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

    let config = AppConfig::load().context("Failed to load configuration")?;
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

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let argon2 = config.argon2;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(
        Argon2Hasher::with_params(argon2.memory_kib, argon2.iterations, argon2.parallelism)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?,
    );

    let actor_query = ActorQueryPostgres::new(Arc::clone(&db_arc));
    let actor_repo = ActorRepositoryPostgres::new(Arc::clone(&db_arc));
    let approval_query = RegisterApprovalQueryPostgres::new(Arc::clone(&db_arc));
    let approval_repo = RegisterApprovalRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        account: AccountUseCases {
            create: Arc::new(CreateAdminService::new(
                actor_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            get_list: Arc::new(GetAdminsService::new(actor_query.clone())),
            get_single: Arc::new(GetAdminByIdService::new(actor_query.clone())),
            update: Arc::new(UpdateAdminService::new(
                actor_repo.clone(),
                Arc::clone(&password_hasher),
            )),
            delete: Arc::new(DeleteAdminService::new(actor_repo.clone())),
            activation: Arc::new(SetAdminActivationService::new(actor_repo.clone())),
            login: Arc::new(LoginAdminService::new(
                actor_query.clone(),
                Arc::clone(&password_hasher),
            )),
            register: Arc::new(RegisterAdminService::new(
                actor_query,
                actor_repo,
                password_hasher,
            )),
            get_approvals: Arc::new(GetRegisterApprovalsService::new(approval_query)),
            update_approval: Arc::new(UpdateRegisterApprovalService::new(approval_repo)),
        },
    };

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
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
    // Accounts
    init_account_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
