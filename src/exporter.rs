// ==========================================
// 工单分派系统 - 结果导出
// ==========================================
// 格式: {"assignments": [...]}, UTF-8, 缩进 JSON
// ==========================================

use crate::domain::{AssignmentDecision, AssignmentDocument};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct AssignmentWriter;

impl AssignmentWriter {
    /// 写入分派结果文件
    pub fn write<P: AsRef<Path>>(
        path: P,
        decisions: &[AssignmentDecision],
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &Self::document(decisions))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %path.display(), count = decisions.len(), "分派结果已写出");
        Ok(())
    }

    pub fn to_json_string(decisions: &[AssignmentDecision]) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&Self::document(decisions))?)
    }

    fn document(decisions: &[AssignmentDecision]) -> AssignmentDocument {
        AssignmentDocument {
            assignments: decisions.to_vec(),
        }
    }
}
