// ==========================================
// 工单分派系统 - 配置层
// ==========================================
// 职责: 分派配置的加载、校验与覆写
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod dispatch_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::ConfigManager;
pub use dispatch_config::{
    DictionaryWeights, DispatchConfig, SimilarityWeights, DEFAULT_MAX_DAILY,
    DEFAULT_SKILL_VOCABULARY,
};
pub use error::{ConfigError, ConfigResult};
