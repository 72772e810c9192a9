use crate::errors::ModelError;
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::EnumIter;

/// Telemetry category an alert rule watches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSource {
    ConnLogs,
    AppLogs,
    EventLogs,
    Metrics,
}

impl AlertSource {
    pub fn as_str(&self) -> &str {
        match self {
            AlertSource::ConnLogs => "CONN_LOGS",
            AlertSource::AppLogs => "APP_LOGS",
            AlertSource::EventLogs => "EVENT_LOGS",
            AlertSource::Metrics => "METRICS",
        }
    }
}

impl Display for AlertSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<AlertSource, ModelError> {
        match s {
            "CONN_LOGS" => Ok(AlertSource::ConnLogs),
            "APP_LOGS" => Ok(AlertSource::AppLogs),
            "EVENT_LOGS" => Ok(AlertSource::EventLogs),
            "METRICS" => Ok(AlertSource::Metrics),
            _ => Err(ModelError::new_unknown_enum_value("source", s)),
        }
    }
}
