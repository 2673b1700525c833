use crate::config::loader::Config;
use crate::datasource::db::{Database, DATABASE_KIND};
use crate::models::status_dto::ServiceStatus;
use tracing::{error, info, warn};

/// Runs once before the listener accepts requests. Failures are logged and
/// recorded in `status`; the service keeps starting in degraded mode.
pub async fn run<D: Database>(db: &D, status: &ServiceStatus, config: &Config) {
    info!("starting {} on {}", config.app.name, config.platform);
    info!("{} mode: using {} database", config.environment, DATABASE_KIND);

    match db.test_connection().await {
        Ok(true) => {
            status.record_connection(true);
            info!("{} connection established", DATABASE_KIND);
            ensure_schema(db, status).await;
        }
        Ok(false) => {
            status.record_connection(false);
            error!(
                "{} connection failed - app will continue with limited functionality",
                DATABASE_KIND
            );
        }
        Err(e) => {
            status.record_connection(false);
            error!(
                "{} connection check failed: {} - app will continue with limited functionality",
                DATABASE_KIND, e
            );
        }
    }
}

/// Creates or verifies the schema and records the outcome.
pub async fn ensure_schema<D: Database>(db: &D, status: &ServiceStatus) -> bool {
    match db.init_db().await {
        Ok(()) => {
            status.record_schema(true);
            info!("{} tables verified/created", DATABASE_KIND);
            true
        }
        Err(e) => {
            status.record_schema(false);
            warn!("{} table initialization had issues: {}", DATABASE_KIND, e);
            false
        }
    }
}


#[cfg(test)]
mod test {
    use super::mocks::*;
    use super::*;
    use crate::models::status_dto::DatabaseState;

    #[tokio::test]
    async fn test_run_connected() {
        let status = ServiceStatus::new();
        run(&ConnectedDb, &status, &Config::default()).await;

        let snapshot = status.snapshot();
        assert_eq!(snapshot.state, DatabaseState::Connected);
        assert!(snapshot.schema_ready);
        assert!(!snapshot.is_degraded());
    }

    #[tokio::test]
    async fn test_run_disconnected_skips_schema() {
        let status = ServiceStatus::new();
        run(&DisconnectedDb, &status, &Config::default()).await;

        let snapshot = status.snapshot();
        assert_eq!(snapshot.state, DatabaseState::Disconnected);
        assert!(!snapshot.schema_ready);
        assert!(snapshot.is_degraded());
    }

    #[tokio::test]
    async fn test_run_schema_failure_is_degraded() {
        let status = ServiceStatus::new();
        run(&BrokenSchemaDb, &status, &Config::default()).await;

        let snapshot = status.snapshot();
        assert_eq!(snapshot.state, DatabaseState::Connected);
        assert!(!snapshot.schema_ready);
        assert!(snapshot.is_degraded());
    }

    #[tokio::test]
    async fn test_run_check_error_does_not_panic() {
        let status = ServiceStatus::new();
        run(&FailingDb, &status, &Config::default()).await;
        assert_eq!(status.snapshot().state, DatabaseState::Disconnected);
    }

    #[tokio::test]
    async fn test_run_against_sqlite() {
        let pool = crate::datasource::db::test_pool().await;
        let status = ServiceStatus::new();
        run(&pool, &status, &Config::default()).await;
        assert!(!status.snapshot().is_degraded());
    }
}
