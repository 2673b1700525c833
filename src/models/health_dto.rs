use crate::config::loader::Config;
use crate::models::status_dto::DatabaseState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Error,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealth {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: DatabaseState,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Health {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Health {
    pub fn from_connection(connected: bool, database_kind: &str, config: &Config) -> Health {
        let status = if connected {
            HealthStatus::Healthy
        } else {
            HealthStatus::Warning
        };
        Health {
            status,
            message: None,
            database: Some(DatabaseHealth {
                kind: database_kind.to_string(),
                status: DatabaseState::from(connected),
            }),
            environment: config.environment.clone(),
            platform: Some(config.platform.clone()),
            app: Some(config.app.name.clone()),
            version: Some(config.app.version.clone()),
        }
    }

    pub fn failure(message: String, config: &Config) -> Health {
        Health {
            status: HealthStatus::Error,
            message: Some(message),
            database: None,
            environment: config.environment.clone(),
            platform: None,
            app: None,
            version: None,
        }
    }
}
