// ==========================================
// 工单分派系统 - 核心库
// ==========================================
// 定位: 按优先级贪心匹配工单与坐席, 结果确定且可解释
// 流程: 导入 → 预处理 → 评分 → 分派 → 导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排序、评分、分派
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 分派结果
pub mod exporter;

// 配置层 - 分派配置
pub mod config;

// 顶层错误
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AvailabilityStatus, Priority};

// 领域实体
pub use domain::{Agent, AssignmentDecision, AssignmentDocument, SkillProfile, Ticket};

// 引擎
pub use engine::{
    AssignmentEngine, DictionaryScorer, DispatchOrchestrator, DispatchResult, DispatchSummary,
    MatchScorer, ScoringStrategy, SimilarityScorer, TicketSorter,
};

// 配置
pub use config::{ConfigManager, DispatchConfig};

// 导入 / 导出
pub use exporter::AssignmentWriter;
pub use importer::{DatasetLoader, Preprocessor};

pub use error::DispatchError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工单分派系统";
