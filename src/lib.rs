use std::sync::Arc;

use crate::{
    config::Settings,
    database::DatabasePool,
    repositories::{company_repo::SqlxCompanyRepository, CompanyRepository},
};

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db_pool: DatabasePool,
    pub company_repository: Arc<dyn CompanyRepository + Send + Sync>,
}

impl AppState {
    /// Create new application state, connecting to the database and running
    /// migrations.
    pub async fn new(settings: Settings) -> Result<Self, crate::error::ApiError> {
        let db_pool = crate::database::create_connection_pool(&settings.database_url).await?;
        Ok(Self::new_with_pool(settings, db_pool))
    }

    /// Create new application state around an existing database pool.
    pub fn new_with_pool(settings: Settings, db_pool: DatabasePool) -> Self {
        let company_repository: Arc<dyn CompanyRepository + Send + Sync> =
            Arc::new(SqlxCompanyRepository::new(db_pool.clone()));

        Self {
            settings: Arc::new(settings),
            db_pool,
            company_repository,
        }
    }
}
