// ==========================================
// 工单分派系统 - 导入层
// ==========================================
// 职责: 外部数据读取 + 预处理, 向引擎交付干净的实体集合
// 支持: 数据集 JSON, 工单/坐席 CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod preprocessor;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, DatasetLoader, JsonDatasetParser, RawDataset};
pub use preprocessor::{age_hours, parse_timestamp, Preprocessor};
