use crate::config::TaskConfig;
use crate::handlers;
use crate::services::TaskDb;
use axum::{
    http::{header, Method},
    routing::{delete, get, put},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state, cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: TaskConfig,
    pub db: TaskDb,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: TaskConfig) -> Result<Self, AppError> {
        let db = TaskDb::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            &config.mongodb.collection,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        // An unreachable store is fatal at startup; per-request failures are not.
        db.health_check().await.map_err(|e| {
            tracing::error!("MongoDB is unreachable: {}", e);
            e
        })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        // The frontend is served from another origin, so every route answers
        // permissive CORS including the OPTIONS preflight.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE]);

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route(
                "/api/tasks",
                get(handlers::list_tasks).post(handlers::create_task),
            )
            .route("/api/tasks/:id", put(handlers::complete_task))
            .route("/api/undoTask/:id", put(handlers::undo_task))
            .route("/api/deleteTask/:id", delete(handlers::delete_task))
            .route("/api/deleteAllTasks", delete(handlers::delete_all_tasks))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &TaskDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
