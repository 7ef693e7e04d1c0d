// ==========================================
// WoolTracer 羊毛供应链追踪系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: 供应链追踪看板的数据与服务核心
// 数据流: 牧场 → 加工设施 → 成品
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则（聚合/时间线/录入/筛选）
pub mod engine;

// 数据库基础设施（连接初始化/PRAGMA/建表统一）
pub mod db;

// 日志系统
pub mod logging;

// 性能观测
pub mod perf;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BatchStatus, FacilityType, WoolGrade};

// 领域实体
pub use domain::{AnalyticsSummary, Farm, JourneyStep, ProcessingFacility, WoolBatch};

// 引擎
pub use engine::analytics::summarize;
pub use engine::query::{filter_batches, filter_farms};

// API
pub use api::{ApiError, ApiResult, BatchApi, DashboardApi, FacilityApi, FarmApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "WoolTracer 羊毛供应链追踪系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";
