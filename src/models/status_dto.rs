use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl fmt::Display for DatabaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseState::Unknown => write!(f, "unknown"),
            DatabaseState::Connected => write!(f, "connected"),
            DatabaseState::Disconnected => write!(f, "disconnected"),
        }
    }
}

impl From<bool> for DatabaseState {
    fn from(connected: bool) -> Self {
        if connected {
            DatabaseState::Connected
        } else {
            DatabaseState::Disconnected
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStatus {
    pub state: DatabaseState,
    pub schema_ready: bool,
}

impl DatabaseStatus {
    pub fn is_degraded(&self) -> bool {
        self.state != DatabaseState::Connected || !self.schema_ready
    }
}

/// Process-wide view of the database, written by the startup hook and the
/// health endpoint and read by the request handlers.
#[derive(Debug, Clone, Default)]
pub struct ServiceStatus {
    inner: Arc<RwLock<DatabaseStatus>>,
}

impl ServiceStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DatabaseStatus {
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn record_connection(&self, connected: bool) {
        self.update(|status| status.state = DatabaseState::from(connected));
    }

    pub fn record_schema(&self, ready: bool) {
        self.update(|status| status.schema_ready = ready);
    }

    fn update(&self, f: impl FnOnce(&mut DatabaseStatus)) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut *guard);
    }
}
