//! Router construction and the server loop

use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::handlers;
use crate::middleware::{cors, json_method_not_allowed, request_context};
use crate::state::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/filter/questions", post(handlers::search_questions))
        .route("/quizzes", post(handlers::next_quiz_question))
        .fallback(handlers::route_not_found)
        .layer(from_fn(json_method_not_allowed))
        .layer(from_fn(cors))
        .layer(from_fn(request_context))
        .with_state(state)
}

/// Serve until Ctrl-C
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, db = %state.db_path().display(), "trivia server listening");
    }
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
