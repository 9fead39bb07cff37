use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use mergington::data::{Activities, Activity, MessageResponse, ParticipantQuery};

use super::error::ApiError;
use crate::services::ActivityService;

/// Handler to list every activity keyed by name
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Activities>, ApiError> {
    let activities = state.activities.list().await?;
    Ok(Json(activities))
}

/// Handler to get a single activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let activity = state.activities.get(&activity_name).await?;
    Ok(Json(activity))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    state.activities.signup(&activity_name, &query.email).await?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    state
        .activities
        .unregister(&activity_name, &query.email)
        .await?;
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
