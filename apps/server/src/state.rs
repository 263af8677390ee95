//! Application state shared across handlers.

use crate::{
    config::Config,
    db::{GradeRepository, StudentRepository},
    services::GradebookService,
    Result,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    /// Apply pending migrations on startup. The test harness keeps this on;
    /// deployments that migrate out-of-band can turn it off.
    pub run_migrations: bool,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub gradebook_service: Arc<GradebookService>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        let config = Arc::new(config);
        let db_pool = connect_pool(&config).await?;

        if options.run_migrations {
            tracing::info!("applying database migrations");
            sqlx::migrate!("./migrations").run(&db_pool).await?;
        }

        let students = StudentRepository::new(db_pool.clone());
        let grades = GradeRepository::new(db_pool.clone());
        let gradebook_service = Arc::new(GradebookService::new(db_pool.clone(), students, grades));

        Ok(Self {
            config,
            db_pool,
            gradebook_service,
        })
    }
}

async fn connect_pool(config: &Config) -> Result<PgPool> {
    let db = &config.database;
    let statement_timeout = db.statement_timeout_seconds;
    let lock_timeout = db.lock_timeout_seconds;

    let pool = PgPoolOptions::new()
        .min_connections(db.pool_min_size)
        .max_connections(db.pool_max_size)
        .acquire_timeout(Duration::from_secs(db.pool_timeout_seconds))
        .after_connect(move |conn, _meta| {
            // Session-level timeouts so runaway queries and contended locks
            // fail fast instead of tying up the pool.
            Box::pin(async move {
                sqlx::query(&format!("SET statement_timeout = '{statement_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;
                sqlx::query(&format!("SET lock_timeout = '{lock_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(&db.url)
        .await?;

    tracing::info!(
        min = db.pool_min_size,
        max = db.pool_max_size,
        "database pool ready"
    );

    Ok(pool)
}
