//! Ping Handler

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /ping - 健康检查，顺带探测数据库是否可读
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let database = match state.category_repo.count().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "unavailable"
        }
    };

    Json(PingResponse {
        status: "ok",
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}
