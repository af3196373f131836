use crate::models::Task;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Persistence accessor for the tasks collection.
///
/// Each operation is a single driver call; the client's connection pool
/// handles concurrent use.
#[derive(Clone)]
pub struct TaskDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl TaskDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, collection = %collection, "Successfully connected to MongoDB database");
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn tasks(&self) -> Collection<Task> {
        self.db.collection(&self.collection)
    }

    /// Fetch every task. The result set is fully materialized before returning.
    pub async fn find_all(&self) -> Result<Vec<Task>, AppError> {
        let cursor = self.tasks().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query tasks: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect tasks: {}", e);
            AppError::from(e)
        })
    }

    /// Insert one task and return its store-assigned identifier.
    pub async fn insert(&self, task: &Task) -> Result<ObjectId, AppError> {
        let result = self.tasks().insert_one(task, None).await.map_err(|e| {
            tracing::error!("Failed to insert task: {}", e);
            AppError::from(e)
        })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Insert returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })
    }

    /// Set the completion flag on one task. Returns the modified count;
    /// an identifier matching nothing modifies zero documents.
    pub async fn set_status(&self, id: ObjectId, status: bool) -> Result<u64, AppError> {
        let result = self
            .tasks()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to update task status: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(task_id = %id, status, modified = result.modified_count, "Updated task status");
        Ok(result.modified_count)
    }

    /// Delete one task by identifier. Returns the deleted count.
    pub async fn delete_one(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .tasks()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete task: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(task_id = %id, deleted = result.deleted_count, "Deleted task");
        Ok(result.deleted_count)
    }

    /// Delete every task in the collection. Returns the deleted count.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self
            .tasks()
            .delete_many(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete all tasks: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(deleted = result.deleted_count, "Deleted all tasks");
        Ok(result.deleted_count)
    }
}
