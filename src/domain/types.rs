// ==========================================
// 工单分派系统 - 领域类型定义
// ==========================================
// 职责: 优先级、可用状态等枚举及其宽松解析
// 红线: 解析失败一律降级为默认值, 不中断批次
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工单优先级 (Priority)
// ==========================================
// 无法识别的文本归入 Unspecified, 排序等同 Low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Unspecified,
}

impl Priority {
    /// 从原始文本解析优先级（大小写不敏感）
    ///
    /// 缺失或未知文本返回 `Priority::Unspecified`，不会失败
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unspecified,
        }
    }

    /// 排序用数值等级（越大越紧急）
    ///
    /// high=3, medium=2, low=1, 未指定=1
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low | Priority::Unspecified => 1,
        }
    }

    /// 相似度评分中的优先级加成 (0 / 0.5 / 1)
    pub fn bonus(&self) -> f64 {
        match self {
            Priority::High => 1.0,
            Priority::Medium => 0.5,
            Priority::Low | Priority::Unspecified => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unspecified => "unspecified",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Unspecified
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 坐席可用状态 (Availability Status)
// ==========================================
// 非 "available" 的状态保留原始标签, 便于日志解释
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Unavailable(String),
}

impl AvailabilityStatus {
    /// 从原始文本解析可用状态
    ///
    /// 仅 "available"（大小写/首尾空白不敏感）视为可用
    pub fn from_str(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        if normalized == "available" {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable(normalized)
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

impl Default for AvailabilityStatus {
    fn default() -> Self {
        AvailabilityStatus::Available
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Unavailable(label) if label.is_empty() => write!(f, "unavailable"),
            AvailabilityStatus::Unavailable(label) => write!(f, "{}", label),
        }
    }
}
