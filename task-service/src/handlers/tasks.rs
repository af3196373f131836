use crate::models::Task;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub status: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: task.title,
            status: task.status,
        }
    }
}

fn parse_task_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid task id '{}': {}", id, e)))
}

#[tracing::instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = state.db.find_all().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let task = Task {
        id: None,
        title: request.title,
        status: request.status,
    };

    let id = state.db.insert(&task).await?;

    tracing::info!(task_id = %id, "Created task");

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            id: id.to_hex(),
            title: task.title,
            status: task.status,
        }),
    ))
}

/// Marks a task complete. An identifier matching no document still succeeds;
/// the update simply modifies nothing.
#[tracing::instrument(skip(state))]
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>, AppError> {
    let task_id = parse_task_id(&id)?;
    state.db.set_status(task_id, true).await?;
    Ok(Json(id))
}

#[tracing::instrument(skip(state))]
pub async fn undo_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>, AppError> {
    let task_id = parse_task_id(&id)?;
    state.db.set_status(task_id, false).await?;
    Ok(Json(id))
}

#[tracing::instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let task_id = parse_task_id(&id)?;
    state.db.delete_one(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(skip(state))]
pub async fn delete_all_tasks(State(state): State<AppState>) -> Result<Json<u64>, AppError> {
    let deleted = state.db.delete_all().await?;
    Ok(Json(deleted))
}
