// ==========================================
// WoolTracer - 数据仓储层（Record Store）
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// 约束: 集合不对外暴露可变引用，一切写入经由仓储方法
// ==========================================

pub mod batch_repo;
pub mod error;
pub mod facility_repo;
pub mod farm_repo;

// 重导出核心仓储
pub use batch_repo::WoolBatchRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use facility_repo::ProcessingFacilityRepository;
pub use farm_repo::FarmRepository;
