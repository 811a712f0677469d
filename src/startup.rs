use crate::error::AppError;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the provided connection string, then
/// runs all pending SeaORM migrations to ensure the schema is up-to-date. This
/// function must complete successfully before the application can serve
/// requests.
///
/// # Arguments
/// - `database_url` - Database connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for payment collaborator API calls.
///
/// Redirects are disabled so that a compromised upstream cannot bounce
/// requests carrying the API key to arbitrary hosts.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}
