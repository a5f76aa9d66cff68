//! Runs the shared TodoService contract suite against the SQLite store

use database::SqliteTodoService;
use mocks::test_service_contract;

#[tokio::test]
async fn test_sqlite_service_contract() {
    let service = SqliteTodoService::new(":memory:").await.unwrap();
    service.ensure_schema().await.unwrap();

    test_service_contract(&service).await;
}

#[tokio::test]
async fn test_sqlite_file_service_contract() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("contract.db");
    let url = format!("sqlite://{}", db_path.display());

    let service = SqliteTodoService::new(&url).await.unwrap();
    service.ensure_schema().await.unwrap();

    test_service_contract(&service).await;
}
