// ==========================================
// 工单分派系统 - 文件解析器实现
// ==========================================
// 支持: 数据集 JSON ({"tickets": [...], "agents": [...]})
//       工单/坐席 CSV (一文件一实体)
// ==========================================

use crate::domain::{RawAgentRecord, RawTicketRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

// ==========================================
// RawDataset - 原始数据集
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub tickets: Vec<RawTicketRecord>,
    #[serde(default)]
    pub agents: Vec<RawAgentRecord>,
}

/// 检查文件存在与扩展名
fn check_file(path: &Path, expected_ext: &str) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != expected_ext {
        return Err(ImportError::UnsupportedFormat(ext));
    }
    Ok(())
}

// ==========================================
// JsonDatasetParser - 数据集 JSON 解析
// ==========================================
pub struct JsonDatasetParser;

impl JsonDatasetParser {
    pub fn parse_file(&self, file_path: &Path) -> ImportResult<RawDataset> {
        check_file(file_path, "json")?;

        let reader = BufReader::new(File::open(file_path)?);
        let dataset: RawDataset = serde_json::from_reader(reader)?;
        debug!(
            path = %file_path.display(),
            tickets = dataset.tickets.len(),
            agents = dataset.agents.len(),
            "数据集 JSON 解析完成"
        );
        Ok(dataset)
    }

    pub fn parse_str(&self, raw: &str) -> ImportResult<RawDataset> {
        Ok(serde_json::from_str(raw)?)
    }
}

// ==========================================
// CsvParser - CSV 解析
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 为 表头→值 的行记录
    pub fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        check_file(file_path, "csv")?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }

    pub fn parse_tickets(&self, file_path: &Path) -> ImportResult<Vec<RawTicketRecord>> {
        let mapper = FieldMapper;
        Ok(self
            .parse_to_raw_records(file_path)?
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_to_raw_ticket(row, idx + 1))
            .collect())
    }

    pub fn parse_agents(&self, file_path: &Path) -> ImportResult<Vec<RawAgentRecord>> {
        let mapper = FieldMapper;
        Ok(self
            .parse_to_raw_records(file_path)?
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_to_raw_agent(row, idx + 1))
            .collect())
    }
}

// ==========================================
// DatasetLoader - 统一入口
// ==========================================
pub struct DatasetLoader;

impl DatasetLoader {
    /// 加载数据集 JSON
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<RawDataset> {
        JsonDatasetParser.parse_file(path.as_ref())
    }

    /// 分别从工单 CSV 与坐席 CSV 加载
    pub fn load_csv_pair<P: AsRef<Path>, Q: AsRef<Path>>(
        tickets_path: P,
        agents_path: Q,
    ) -> ImportResult<RawDataset> {
        Ok(RawDataset {
            tickets: CsvParser.parse_tickets(tickets_path.as_ref())?,
            agents: CsvParser.parse_agents(agents_path.as_ref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawSkills, RawTimestamp};
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_dataset_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "tickets": [{{"id": "T1", "title": "VPN", "description": "vpn drops", "priority": "high", "created_at": "2025-01-01T00:00:00Z"}}],
                "agents": [{{"id": "A1", "name": "Ann", "skills": "vpn networking", "experience_level": 5, "availability_status": "available"}}]
            }}"#
        )
        .unwrap();

        let dataset = DatasetLoader::load(file.path()).unwrap();
        assert_eq!(dataset.tickets.len(), 1);
        assert_eq!(dataset.agents.len(), 1);
        assert_eq!(dataset.agents[0].skills, Some(RawSkills::Text("vpn networking".to_string())));
    }

    #[test]
    fn test_missing_file() {
        let result = DatasetLoader::load("/nonexistent/dataset.json");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_wrong_extension() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let result = DatasetLoader::load(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = JsonDatasetParser.parse_str(r#"{"tickets": [}"#);
        assert!(matches!(result, Err(ImportError::JsonParseError(_))));
    }

    #[test]
    fn test_csv_pair_skips_blank_rows() {
        let mut tickets = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(tickets, "Ticket_ID,Title,Description,Priority,Created_At").unwrap();
        writeln!(tickets, "T1,Printer,printer jammed,low,1700000000").unwrap();
        writeln!(tickets, ",,,,").unwrap();
        writeln!(tickets, "T2,Mail,email bounce,medium,2025-01-01 10:00:00").unwrap();

        let mut agents = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(agents, "agent_id,name,skills,experience_level,availability_status,max_daily_tickets").unwrap();
        writeln!(agents, "A1,Ann,printer email,4,available,3").unwrap();

        let dataset = DatasetLoader::load_csv_pair(tickets.path(), agents.path()).unwrap();
        assert_eq!(dataset.tickets.len(), 2);
        assert_eq!(dataset.tickets[0].id.as_deref(), Some("T1"));
        assert_eq!(
            dataset.tickets[0].created_at,
            Some(RawTimestamp::UnixSeconds(1_700_000_000.0))
        );
        assert_eq!(dataset.agents[0].max_daily_tickets, Some(3));
    }
}
