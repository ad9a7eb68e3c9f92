use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the first
/// request is served. SQLite and PostgreSQL URLs are both accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer.
///
/// Restricted to `CORS_ORIGIN` when it is set, otherwise any origin is allowed.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to apply to the router
/// - `Err(AppError)` - `CORS_ORIGIN` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                value: origin.clone(),
            })?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}
