use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use ideenportal_ideas::{policy_for, IdeaField, IdeaStatus, WorkflowStage};

use crate::response::ApiResponse;
use crate::AppState;

/// Status metadata for the process-staff views
#[derive(Serialize)]
pub struct StatusInfo {
    pub code: i64,
    pub status: IdeaStatus,
    pub label: &'static str,
    pub stage: WorkflowStage,
    #[serde(rename = "stageLabel")]
    pub stage_label: &'static str,
}

/// Visibility policy of one status
#[derive(Serialize)]
pub struct StatusPolicyInfo {
    pub status: IdeaStatus,
    pub label: &'static str,
    pub visible: Vec<IdeaField>,
    pub editable: Vec<IdeaField>,
}

/// Service health and demo-mode flag for the front-end banner
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub demo: bool,
}

/// List all lifecycle statuses with their workflow stages
pub async fn list_statuses() -> impl IntoResponse {
    let statuses: Vec<StatusInfo> = IdeaStatus::ALL
        .into_iter()
        .map(|status| StatusInfo {
            code: status.code(),
            status,
            label: status.label(),
            stage: status.stage(),
            stage_label: status.stage().label(),
        })
        .collect();

    (StatusCode::OK, ResponseJson(ApiResponse::success(statuses)))
}

/// Field policy for a status given by wire code
///
/// Unknown codes resolve to the initial status, mirroring the read path.
pub async fn get_status_policy(Path(code): Path<i64>) -> impl IntoResponse {
    let status = IdeaStatus::from_code(code);
    let policy = policy_for(status);

    let info = StatusPolicyInfo {
        status,
        label: status.label(),
        visible: policy.visible.to_vec(),
        editable: policy.editable.to_vec(),
    };

    (StatusCode::OK, ResponseJson(ApiResponse::success(info)))
}

/// Liveness probe, also reporting whether the sample dataset is served
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok",
        demo: state.service.is_demo(),
    };

    (StatusCode::OK, ResponseJson(ApiResponse::success(response)))
}
