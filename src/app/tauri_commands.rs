// ==========================================
// WoolTracer - Tauri 命令
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// 约定: 所有命令返回 JSON 字符串，错误以 ErrorResponse JSON 返回
// ==========================================

#![cfg(feature = "tauri-app")]

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::batch_api::StatusUpdateRequest;
use crate::api::dashboard_api::DEFAULT_RECENT_UPDATES_LIMIT;
use crate::app::state::AppState;
use crate::engine::intake::{NewBatchInput, NewFarmInput};
use crate::perf::PerfGuard;

// ==========================================
// 公共工具：错误映射
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::DatabaseTransactionError(_) => "DATABASE_TRANSACTION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::ValidationError { field, .. } => {
                Some(serde_json::json!({ "field": field }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

// ==========================================
// 牧场相关命令
// ==========================================

/// 查询牧场列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_farms(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let farm_api = state.farm_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.list_farms");
        farm_api.list_farms()
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 文本筛选牧场
#[tauri::command(rename_all = "snake_case")]
pub async fn search_farms(
    state: tauri::State<'_, AppState>,
    term: String,
) -> Result<String, String> {
    let farm_api = state.farm_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.search_farms");
        farm_api.search_farms(&term)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询牧场详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_farm_detail(
    state: tauri::State<'_, AppState>,
    farm_id: String,
) -> Result<String, String> {
    let result = state.farm_api.get_farm(&farm_id).map_err(map_api_error)?;
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 录入新牧场
#[tauri::command(rename_all = "snake_case")]
pub async fn create_farm(
    state: tauri::State<'_, AppState>,
    input: NewFarmInput,
) -> Result<String, String> {
    let farm_api = state.farm_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.create_farm");
        farm_api.create_farm(input)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 批次相关命令
// ==========================================

/// 查询批次列表（含完整流转时间线）
#[tauri::command(rename_all = "snake_case")]
pub async fn list_batches(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let batch_api = state.batch_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.list_batches");
        batch_api.list_batches()
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 文本筛选批次
#[tauri::command(rename_all = "snake_case")]
pub async fn search_batches(
    state: tauri::State<'_, AppState>,
    term: String,
) -> Result<String, String> {
    let batch_api = state.batch_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.search_batches");
        batch_api.search_batches(&term)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询批次详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_batch_detail(
    state: tauri::State<'_, AppState>,
    batch_id: String,
) -> Result<String, String> {
    let result = state.batch_api.get_batch(&batch_id).map_err(map_api_error)?;
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询牧场名下批次
#[tauri::command(rename_all = "snake_case")]
pub async fn list_batches_by_farm(
    state: tauri::State<'_, AppState>,
    farm_id: String,
) -> Result<String, String> {
    let batch_api = state.batch_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.list_batches_by_farm");
        batch_api.list_batches_by_farm(&farm_id)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 录入新批次
#[tauri::command(rename_all = "snake_case")]
pub async fn create_batch(
    state: tauri::State<'_, AppState>,
    input: NewBatchInput,
) -> Result<String, String> {
    let batch_api = state.batch_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.create_batch");
        batch_api.create_batch(input)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 更新批次流转状态
#[tauri::command(rename_all = "snake_case")]
pub async fn update_batch_status(
    state: tauri::State<'_, AppState>,
    batch_id: String,
    request: StatusUpdateRequest,
) -> Result<String, String> {
    let batch_api = state.batch_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.update_batch_status");
        batch_api.update_batch_status(&batch_id, request)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 设施相关命令
// ==========================================

/// 查询加工设施列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_facilities(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let facility_api = state.facility_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.list_facilities");
        facility_api.list_facilities()
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 看板相关命令
// ==========================================

/// 查询分析汇总
#[tauri::command(rename_all = "snake_case")]
pub async fn get_analytics_summary(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let dashboard_api = state.dashboard_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.get_analytics_summary");
        dashboard_api.get_analytics_summary()
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询最近流转动态
#[tauri::command(rename_all = "snake_case")]
pub async fn list_recent_updates(
    state: tauri::State<'_, AppState>,
    limit: Option<usize>,
) -> Result<String, String> {
    let dashboard_api = state.dashboard_api.clone();
    let limit = limit.unwrap_or(DEFAULT_RECENT_UPDATES_LIMIT);
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = PerfGuard::new("ipc.list_recent_updates");
        dashboard_api.recent_updates(limit)
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
