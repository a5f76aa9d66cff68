use anyhow::{Context, Result};
use database::{database_path, is_memory_url, SqliteTodoService, TodoService};
use std::path::Path;
use std::sync::Arc;
use todo_api::TodoServer;
use tracing::info;

use crate::config::Config;

/// Connect to the configured database and prepare the schema
pub async fn create_service(config: &Config) -> Result<Arc<SqliteTodoService>> {
    let database_url = config.database_url();
    info!("Initializing SQLite service at: {}", database_url);

    let service = SqliteTodoService::with_pool_options(
        database_url,
        config.database.max_connections,
        config.connection_timeout(),
    )
    .await
    .context("Failed to create SQLite service")?;

    service
        .ensure_schema()
        .await
        .context("Failed to create database schema")?;

    service
        .health_check()
        .await
        .context("Database health check failed")?;

    info!("TODO service created successfully");
    Ok(Arc::new(service))
}

/// Create and configure the HTTP server
pub fn create_server(service: Arc<SqliteTodoService>, config: &Config) -> TodoServer<SqliteTodoService> {
    TodoServer::new(service).with_request_timeout(config.request_timeout())
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<TodoServer<SqliteTodoService>> {
    info!("Initializing application");

    ensure_database_directory(config.database_url())
        .context("Failed to create database directory")?;

    let service = create_service(config)
        .await
        .context("Failed to create service")?;

    let server = create_server(service, config);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the parent directory of a file database exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if is_memory_url(database_url) {
        return Ok(());
    }

    if let Some(parent) = Path::new(database_path(database_url)).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(database_url: String) -> Config {
        let mut config = Config::default();
        config.database.url = database_url;
        config
    }

    #[tokio::test]
    async fn test_create_service_with_file_url() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let config = config_for(format!("sqlite://{}", db_path.display()));

        let service = create_service(&config).await.unwrap();
        assert!(service.read(0, 5).await.unwrap().is_empty());
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_create_service_in_memory() {
        let config = config_for("sqlite::memory:".to_string());

        let service = create_service(&config).await.unwrap();
        let todo = service.create("in memory", "").await.unwrap();
        assert_eq!(todo.id, 1);
    }

    #[tokio::test]
    async fn test_create_service_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("test.db");
        let config = config_for(format!("sqlite://{}", db_path.display()));

        assert!(create_service(&config).await.is_err());
    }

    #[test]
    fn test_ensure_database_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("subdir").join("test.db");
        let database_url = format!("sqlite://{}", db_path.display());

        ensure_database_directory(&database_url).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_database_directory_matches_store_path() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("single").join("test.db");
        let database_url = format!("sqlite:{}", db_path.display());

        ensure_database_directory(&database_url).unwrap();
        assert_eq!(Path::new(database_path(&database_url)), db_path.as_path());
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_database_directory_ignores_memory() {
        assert!(ensure_database_directory("sqlite::memory:").is_ok());
    }

    #[tokio::test]
    async fn test_initialize_app() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join(".sqlite3").join("todo.db");
        let config = config_for(format!("sqlite://{}", db_path.display()));

        let server = initialize_app(&config).await;
        assert!(server.is_ok());
        assert!(db_path.exists());
    }
}
