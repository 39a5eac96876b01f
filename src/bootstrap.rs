//! Wires a database connection into a tonic server for each service.

use crate::{
    config::{
        Settings,
        database::{create_connection, create_tables},
    },
    core::{FieldUseCase, UserUseCase},
    errors::Result,
    proto::{
        field::field_service_server::FieldServiceServer,
        user::user_service_server::UserServiceServer,
    },
    repository::{FieldRepository, UserRepository},
    transport::{FieldController, UserController},
};
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use tonic::transport::Server;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Loads `.env`, then installs the `tracing` subscriber.
///
/// `.env` is read first so a `RUST_LOG` set only there still applies.
pub fn init() {
    let dotenv = dotenvy::dotenv();
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
    // A subscriber may already be installed, e.g. under tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => info!("No .env file found, using process environment"),
        Err(e) => warn!("Failed to load .env file: {e}"),
    }
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Opens the pool described by `settings` and makes sure every table exists.
pub async fn connect(settings: &Settings) -> Result<DatabaseConnection> {
    let db = create_connection(&settings.database).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Builds the field service with its use case and repository.
#[must_use]
pub fn field_server(db: DatabaseConnection) -> FieldServiceServer<FieldController> {
    let use_case = FieldUseCase::new(FieldRepository::new(), db);
    FieldServiceServer::new(FieldController::new(use_case))
}

/// Builds the user service with its use case and repository.
#[must_use]
pub fn user_server(db: DatabaseConnection) -> UserServiceServer<UserController> {
    let use_case = UserUseCase::new(UserRepository::new(), db);
    UserServiceServer::new(UserController::new(use_case))
}

/// Serves `field.FieldService` on `addr` until Ctrl-C.
pub async fn serve_field(db: DatabaseConnection, addr: SocketAddr) -> Result<()> {
    info!(%addr, "Field service listening");
    Server::builder()
        .add_service(field_server(db))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;
    info!("Field service stopped");
    Ok(())
}

/// Serves `user.UserService` on `addr` until Ctrl-C.
pub async fn serve_user(db: DatabaseConnection, addr: SocketAddr) -> Result<()> {
    info!(%addr, "User service listening");
    Server::builder()
        .add_service(user_server(db))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;
    info!("User service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::parse_settings, entities::Field};
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[test]
    fn test_log_filter_uses_rust_log_from_env_file() {
        let path =
            std::env::temp_dir().join(format!("field-reservation-{}.env", std::process::id()));
        std::fs::write(&path, "RUST_LOG=field_reservation=debug\n").unwrap();

        // Read the file without touching the process environment
        let rust_log = dotenvy::from_path_iter(&path)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .find(|(key, _)| key == "RUST_LOG")
            .map(|(_, value)| value);
        std::fs::remove_file(&path).unwrap();

        let filter = log_filter(rust_log.as_deref());
        assert_eq!(filter.to_string(), "field_reservation=debug");
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter(Some("[[not a filter")).to_string(), DEFAULT_LOG_FILTER);
    }

    #[tokio::test]
    async fn test_connect_creates_schema() {
        let settings = parse_settings(
            r#"
            [database]
            url = "sqlite::memory:"
            max_connections = 1
            min_connections = 1
            "#,
        )
        .unwrap();
        let db = connect(&settings).await.unwrap();
        assert_eq!(Field::find().count(&db).await.unwrap(), 0);

        // Running it twice must be harmless
        create_tables(&db).await.unwrap();
    }
}
