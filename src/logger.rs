use std::fmt::{Display, Formatter};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// ModelEvent: something worth reporting while encoding or decoding a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    Decoded { model: String, name: String },
    Encoded { model: String, name: String },
    /// A value outside the known enumeration, kept as is and sent to the controller.
    UnknownValuePassedThrough {
        model: String,
        name: String,
        field_name: String,
        value: String,
    },
}

impl ModelEvent {
    pub fn model(&self) -> &str {
        match self {
            ModelEvent::Decoded { model, .. } => model,
            ModelEvent::Encoded { model, .. } => model,
            ModelEvent::UnknownValuePassedThrough { model, .. } => model,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ModelEvent::Decoded { name, .. } => name,
            ModelEvent::Encoded { name, .. } => name,
            ModelEvent::UnknownValuePassedThrough { name, .. } => name,
        }
    }
}

impl Display for ModelEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelEvent::Decoded { .. } => f.write_str("model decoded"),
            ModelEvent::Encoded { .. } => f.write_str("model encoded"),
            ModelEvent::UnknownValuePassedThrough { field_name, value, .. } => write!(
                f,
                "unknown value `{}` for field `{}` passed through to the controller",
                value, field_name
            ),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, log_level: LogLevel, event: ModelEvent);
    fn clone_dyn(&self) -> Box<dyn Logger>;
}

impl Clone for Box<dyn Logger> {
    fn clone(&self) -> Self {
        self.clone_dyn()
    }
}

#[derive(Clone)]
pub struct StdIoLogger {}

impl StdIoLogger {
    pub fn new() -> StdIoLogger {
        StdIoLogger {}
    }
}

impl Default for StdIoLogger {
    fn default() -> Self {
        StdIoLogger::new()
    }
}

impl Logger for StdIoLogger {
    fn log(&self, log_level: LogLevel, event: ModelEvent) {
        tracing::span!(tracing::Level::INFO, "model", model = event.model(), name = event.name()).in_scope(|| {
            match log_level {
                LogLevel::Debug => debug!("{}", event),
                LogLevel::Info => info!("{}", event),
                LogLevel::Warning => warn!("{}", event),
                LogLevel::Error => error!("{}", event),
            };
        });
    }

    fn clone_dyn(&self) -> Box<dyn Logger> {
        Box::new(self.clone())
    }
}
