use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::RwLock;

use crate::{balances, expenses, groups, health, members, settlements};
use engine::Engine;

/// Shared state: the engine behind a read-write lock, so every
/// computation sees a consistent snapshot of its group.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    Router::new()
        .route("/health", get(health::get))
        .route("/groups", post(groups::create).get(groups::list))
        .route("/groups/{group_id}", get(groups::get).delete(groups::delete))
        .route(
            "/groups/{group_id}/members",
            post(members::create).get(members::list),
        )
        .route(
            "/groups/{group_id}/members/{member_id}",
            get(members::get).delete(members::delete),
        )
        .route(
            "/groups/{group_id}/expenses",
            post(expenses::create).get(expenses::list),
        )
        .route(
            "/groups/{group_id}/expenses/{expense_id}",
            get(expenses::get).delete(expenses::delete),
        )
        .route("/groups/{group_id}/balances", get(balances::get))
        .route("/groups/{group_id}/settlements", get(settlements::get))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
