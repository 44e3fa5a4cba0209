// ==========================================
// 工单分派系统 - 顶层错误类型
// ==========================================
// 汇总各层错误, 供编排器与命令行使用
// ==========================================

use crate::config::ConfigError;
use crate::engine::ScoringError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("评分失败: {0}")]
    Scoring(#[from] ScoringError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
}

pub type DispatchOutcome<T> = Result<T, DispatchError>;
