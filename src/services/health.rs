use crate::config::loader::Config;
use crate::datasource::db::{Database, DATABASE_KIND};
use crate::models::health_dto::Health;
use crate::models::status_dto::ServiceStatus;
use crate::services::startup::ensure_schema;
use tracing::error;

/// Live database check. Refreshes `status` on every call and retries the
/// schema once the database comes back.
pub async fn check<D: Database>(db: &D, status: &ServiceStatus, config: &Config) -> Health {
    match db.test_connection().await {
        Ok(connected) => {
            status.record_connection(connected);
            if connected && !status.snapshot().schema_ready {
                ensure_schema(db, status).await;
            }
            Health::from_connection(connected, DATABASE_KIND, config)
        }
        Err(e) => {
            error!("health check failed: {}", e);
            status.record_connection(false);
            Health::failure(e.to_string(), config)
        }
    }
}
