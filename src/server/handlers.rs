//! Request handlers for the workout API
//!
//! Every handler locks the shared store for its whole load(-mutate-save)
//! sequence. Store failures are reported per request and never take the
//! process down.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Local;
use serde::Serialize;
use tracing::warn;

use super::AppState;
use crate::stats::{self, Stats};
use crate::store::{Document, Session};

/// Acknowledgement body for successful writes.
#[derive(Debug, Serialize)]
pub struct WriteAck {
    success: bool,
}

impl WriteAck {
    fn ok() -> Self {
        Self { success: true }
    }
}

pub async fn get_all(State(state): State<Arc<AppState>>) -> Result<Json<Document>, StatusCode> {
    let store = state.store.lock().await;
    match store.load().await {
        Ok(doc) => Ok(Json(doc)),
        Err(e) => {
            warn!("failed to load document: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<Stats>, StatusCode> {
    let store = state.store.lock().await;
    match store.load().await {
        Ok(doc) => Ok(Json(stats::compute(&doc, Local::now().date_naive()))),
        Err(e) => {
            warn!("failed to load document: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(date_key): Path<String>,
) -> Result<Json<Session>, StatusCode> {
    let store = state.store.lock().await;
    match store.load().await {
        Ok(doc) => Ok(Json(doc.session(&date_key))),
        Err(e) => {
            warn!("failed to load document: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn post_session(
    State(state): State<Arc<AppState>>,
    Path(date_key): Path<String>,
    Json(session): Json<Session>,
) -> Result<Json<WriteAck>, StatusCode> {
    let store = state.store.lock().await;
    let mut doc = match store.load().await {
        Ok(doc) => doc,
        Err(e) => {
            warn!("failed to load document: {e}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    doc.set_session(date_key, session);

    match store.save(&doc).await {
        Ok(()) => Ok(Json(WriteAck::ok())),
        Err(e) => {
            warn!("failed to persist session: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_plan(State(state): State<Arc<AppState>>) -> Result<Json<Session>, StatusCode> {
    let store = state.store.lock().await;
    match store.load().await {
        Ok(doc) => Ok(Json(doc.plan())),
        Err(e) => {
            warn!("failed to load document: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn post_plan(
    State(state): State<Arc<AppState>>,
    Json(plan): Json<Session>,
) -> Result<Json<WriteAck>, StatusCode> {
    let store = state.store.lock().await;
    let mut doc = match store.load().await {
        Ok(doc) => doc,
        Err(e) => {
            warn!("failed to load document: {e}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    doc.set_plan(plan);

    match store.save(&doc).await {
        Ok(()) => Ok(Json(WriteAck::ok())),
        Err(e) => {
            warn!("failed to persist plan: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
