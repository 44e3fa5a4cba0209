// ==========================================
// 工单分派系统 - 工单领域模型
// ==========================================
// 职责: 原始工单记录 (导入层输出) 与预处理后的工单实体
// 红线: Ticket 在一次运行内不可变, 派生字段只计算一次
// ==========================================

use crate::domain::types::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ==========================================
// RawTimestamp - 原始创建时间
// ==========================================
// 支持 ISO-8601 字符串或 Unix 秒
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    UnixSeconds(f64),
    Text(String),
}

// ==========================================
// RawTicketRecord - 原始工单记录
// ==========================================
// 用途: 数据集反序列化目标, 所有字段允许缺失
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTicketRecord {
    #[serde(default, alias = "ticket_id", deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<RawTimestamp>,
}

// ==========================================
// Ticket - 预处理后的工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub created_at: Option<DateTime<Utc>>, // 缺失/无法解析时为 None
    pub age_hours: f64,                    // 派生: now - created_at (小时)
    pub priority_rank: u8,                 // 派生: Priority::rank()
}

impl Ticket {
    /// 标题 + 描述, 供关键词抽取使用
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// 兼容字符串与数字两种 id 写法
pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<IdRepr>::deserialize(deserializer)? {
        Some(IdRepr::Text(s)) => Some(s),
        Some(IdRepr::Int(n)) => Some(n.to_string()),
        Some(IdRepr::Float(n)) => Some(n.to_string()),
        None => None,
    })
}
