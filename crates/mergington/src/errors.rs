//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;
pub use color_eyre::eyre::WrapErr;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections produced by the activity directory.
///
/// The `Display` output of each variant is the exact detail message sent back
/// to clients, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFoundActivity(String),
    #[error("Participant not found in this activity")]
    NotFoundParticipant { activity: String, email: String },
    #[error("Activity is full")]
    CapacityExceeded {
        activity: String,
        max_participants: u32,
    },
}

/// Problems found while loading a catalog file at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog contains no activities")]
    Empty,
    #[error("Activity {0:?} has an empty name")]
    EmptyName(String),
    #[error("Activity {0:?} has an empty description")]
    EmptyDescription(String),
    #[error("Activity {0:?} has an empty schedule")]
    EmptySchedule(String),
    #[error("Activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("Activity {activity:?} starts with {participants} participants but allows {max_participants}")]
    OverCapacity {
        activity: String,
        participants: usize,
        max_participants: u32,
    },
}
