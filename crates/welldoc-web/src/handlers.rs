//! HTTP处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use welldoc_core::{utils::validate_patient_names, WelldocError, REQUIRED_NAMES_MESSAGE};
use welldoc_database::PatientService;

use crate::error::ApiError;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub patient_service: Arc<dyn PatientService>,
}

/// 创建患者请求体
///
/// 同时接受 camelCase 与 PascalCase 字段名。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    #[serde(alias = "PatientFirstName")]
    pub patient_first_name: Option<String>,
    #[serde(alias = "PatientLastName")]
    pub patient_last_name: Option<String>,
}

/// 创建患者响应体
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePatientResponse {
    #[serde(rename = "patientID")]
    pub patient_id: i64,
}

/// API根路径处理器
pub async fn api_root() -> impl IntoResponse {
    Json(json!({
        "service": "Welldoc Patient API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "create_patient": "/api/patient/create"
        }
    }))
}

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 创建患者处理器
///
/// 请求体缺失或无法解析时与姓名缺失同样处理，不会调用持久化服务。
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<Json<CreatePatientResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected create patient payload");
        WelldocError::Validation(REQUIRED_NAMES_MESSAGE.to_string())
    })?;

    let (first_name, last_name) = validate_patient_names(
        request.patient_first_name.as_deref(),
        request.patient_last_name.as_deref(),
    )
    .map_err(|e| {
        warn!(error = %e, "Create patient validation failed");
        e
    })?;

    let patient_id = state
        .patient_service
        .create_patient(first_name, last_name)
        .await?;

    info!(patient_id, "Create patient request completed");
    Ok(Json(CreatePatientResponse { patient_id }))
}
