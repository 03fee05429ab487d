//! REST endpoints: liveness, onboarding chat, and client search.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::intake::model::{OnboardingRecord, StoredRow};
use crate::intake::{dedupe, format};
use crate::sheets::SheetStore;

/// Shared state for the intake routes.
#[derive(Clone)]
pub struct AppState {
    /// `None` when persistence is disabled (no usable credentials). The
    /// chat flow still works; only logging and search degrade.
    pub store: Option<Arc<dyn SheetStore>>,
}

/// Build the intake router.
///
/// CORS is fully permissive: the expected caller is a hosted GPT action on
/// a foreign origin.
pub fn intake_routes(store: Option<Arc<dyn SheetStore>>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/chat", post(chat))
        .route("/find_client", post(find_client))
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

// ── Liveness ────────────────────────────────────────────────────────────

async fn home() -> &'static str {
    "Backend Running"
}

// ── POST /chat ──────────────────────────────────────────────────────────

/// Onboarding submission. All fields optional; `message` alone is the
/// legacy echo protocol.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChatRequest {
    message: Option<String>,
    name: Option<String>,
    industry: Option<String>,
    goals: Option<String>,
    priority: Option<String>,
    timeline: Option<String>,
    budget_range: Option<String>,
    main_contact: Option<String>,
}

impl ChatRequest {
    fn has_form_fields(&self) -> bool {
        self.name.is_some()
            || self.industry.is_some()
            || self.goals.is_some()
            || self.priority.is_some()
            || self.timeline.is_some()
            || self.budget_range.is_some()
            || self.main_contact.is_some()
    }

    fn into_record(self) -> OnboardingRecord {
        OnboardingRecord::new(
            self.name,
            self.industry,
            self.goals,
            self.priority,
            self.timeline,
            self.budget_range,
            self.main_contact,
        )
    }
}

/// Duplicate scan, best-effort append, summary response. Always 200: the
/// sheet is a side channel and must never fail an onboarding.
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<serde_json::Value> {
    // Legacy protocol: a bare message with no form fields is echoed back.
    if let Some(ref message) = req.message {
        if !req.has_form_fields() {
            return Json(json!({ "response": message }));
        }
    }

    let record = req.into_record();

    if let Some(store) = &state.store {
        // Fail open: an unreachable sheet must not block onboarding.
        match store.fetch_all().await {
            Ok(rows) => {
                if dedupe::is_duplicate(&record.name, &rows) {
                    info!(name = %record.name, "Rejected duplicate onboarding");
                    return Json(json!({ "response": format::duplicate_notice(&record.name) }));
                }
            }
            Err(e) => warn!(error = %e, "Duplicate check failed; proceeding without it"),
        }

        let row = StoredRow::from_record(&record, Utc::now());
        match store.append(&row).await {
            Ok(()) => info!(name = %record.name, industry = %record.industry, "Logged onboarding row"),
            Err(e) => warn!(error = %e, "Failed to log onboarding row"),
        }
    }

    Json(json!({ "response": format::summary(&record) }))
}

// ── POST /find_client ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FindClientRequest {
    #[serde(default)]
    name: Option<String>,
}

/// Case-insensitive substring search over stored client names.
async fn find_client(State(state): State<AppState>, Json(req): Json<FindClientRequest>) -> Response {
    let Some(query) = req.name.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "message": "Missing required field: name" })),
        )
            .into_response();
    };

    let Some(store) = &state.store else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "message": "Client search is disabled: no spreadsheet configured"
            })),
        )
            .into_response();
    };

    match store.fetch_all().await {
        Ok(rows) => {
            let results = dedupe::find_matches(query, &rows);
            Json(json!({
                "status": "success",
                "count": results.len(),
                "results": results,
            }))
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "Client search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": "Failed to search client records" })),
            )
                .into_response()
        }
    }
}
