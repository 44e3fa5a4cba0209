// ==========================================
// 工单分派系统 - 字段映射器实现
// ==========================================
// 职责: CSV 行记录 (表头已小写) → 原始工单/坐席记录
// 红线: 数值列格式错误只告警并置空, 由预处理填默认值
// ==========================================

use crate::domain::{RawAgentRecord, RawSkills, RawTicketRecord, RawTimestamp};
use std::collections::HashMap;
use tracing::warn;

pub struct FieldMapper;

impl FieldMapper {
    pub fn map_to_raw_ticket(&self, row: &HashMap<String, String>, row_number: usize) -> RawTicketRecord {
        let id = self.get_string(row, "id");
        if id.is_none() {
            warn!(row = row_number, "CSV 工单缺少 id");
        }

        RawTicketRecord {
            id,
            title: self.get_string(row, "title"),
            description: self.get_string(row, "description"),
            priority: self.get_string(row, "priority"),
            created_at: self.get_string(row, "created_at").map(|v| match v.parse::<f64>() {
                Ok(secs) => RawTimestamp::UnixSeconds(secs),
                Err(_) => RawTimestamp::Text(v),
            }),
        }
    }

    pub fn map_to_raw_agent(&self, row: &HashMap<String, String>, row_number: usize) -> RawAgentRecord {
        RawAgentRecord {
            id: self.get_string(row, "id"),
            name: self.get_string(row, "name"),
            skills: self.get_string(row, "skills").map(RawSkills::Text),
            experience_level: self.parse_f64(row, "experience_level", row_number),
            availability_status: self.get_string(row, "availability_status"),
            current_load: self.parse_i64(row, "current_load", row_number),
            max_daily: self.parse_i64(row, "max_daily", row_number),
            max_daily_tickets: self.parse_i64(row, "max_daily_tickets", row_number),
        }
    }

    /// 提取字符串字段, 支持列名别名
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: Vec<&str> = match key {
            "id" => vec!["id", "ticket_id", "agent_id"],
            "created_at" => vec!["created_at", "created", "timestamp"],
            "availability_status" => vec!["availability_status", "availability", "status"],
            _ => vec![key],
        };

        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    fn parse_f64(&self, row: &HashMap<String, String>, key: &str, row_number: usize) -> Option<f64> {
        let value = self.get_string(row, key)?;
        match value.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(row = row_number, field = key, value = %value, "无法解析为浮点数, 按缺失处理");
                None
            }
        }
    }

    fn parse_i64(&self, row: &HashMap<String, String>, key: &str, row_number: usize) -> Option<i64> {
        let value = self.get_string(row, key)?;
        // 兼容 "5.0" 这类导出格式
        match value.parse::<i64>().ok().or_else(|| {
            value
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }) {
            Some(v) => Some(v),
            None => {
                warn!(row = row_number, field = key, value = %value, "无法解析为整数, 按缺失处理");
                None
            }
        }
    }
}
