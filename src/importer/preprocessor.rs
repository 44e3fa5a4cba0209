// ==========================================
// 工单分派系统 - 预处理器
// ==========================================
// 职责: 时间标准化 / 工单年龄 / 优先级等级 / 坐席负载默认值
// 红线: 每次运行只执行一次, 在排序与评分之前
// 红线: 时间/优先级/容量缺失或格式错误一律降级, 不中断批次
// ==========================================

use crate::domain::{
    Agent, AvailabilityStatus, Priority, RawAgentRecord, RawTicketRecord, RawTimestamp,
    SkillProfile, Ticket,
};
use crate::importer::error::{ImportError, ImportResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// 无时区的 ISO 时间格式（按 UTC 解释）
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ==========================================
// Preprocessor - 预处理器
// ==========================================
pub struct Preprocessor {
    default_max_daily: u32,
}

impl Preprocessor {
    /// 构造函数
    ///
    /// # 参数
    /// - `default_max_daily`: 坐席未提供每日上限时使用的默认值
    pub fn new(default_max_daily: u32) -> Self {
        Self { default_max_daily }
    }

    // ==========================================
    // 工单
    // ==========================================

    /// 预处理工单
    ///
    /// # 参数
    /// - `raw`: 原始工单记录
    /// - `now`: 计算年龄使用的当前时刻（显式传入, 便于复现）
    ///
    /// # 返回
    /// - Ok: 保持输入顺序的工单列表
    /// - Err: id 为空或重复
    pub fn prepare_tickets(
        &self,
        raw: Vec<RawTicketRecord>,
        now: DateTime<Utc>,
    ) -> ImportResult<Vec<Ticket>> {
        let mut seen = HashSet::new();
        let mut tickets = Vec::with_capacity(raw.len());

        for (idx, record) in raw.into_iter().enumerate() {
            let id = non_empty(record.id).ok_or(ImportError::PrimaryKeyMissing {
                entity: "ticket",
                row: idx + 1,
            })?;
            if !seen.insert(id.clone()) {
                return Err(ImportError::DuplicateId { entity: "ticket", id });
            }

            let priority = match record.priority.as_deref() {
                Some(text) => {
                    let p = Priority::from_str(text);
                    if p == Priority::Unspecified {
                        warn!(ticket_id = %id, priority = %text, "无法识别的优先级, 按最低等级处理");
                    }
                    p
                }
                None => Priority::Unspecified,
            };

            let created_at = record.created_at.as_ref().and_then(parse_timestamp);
            if created_at.is_none() {
                warn!(ticket_id = %id, raw = ?record.created_at, "创建时间缺失或无法解析, 年龄按 0 处理");
            }
            let age_hours = created_at.map(|c| age_hours(c, now)).unwrap_or(0.0);

            tickets.push(Ticket {
                id,
                title: record.title.unwrap_or_default(),
                description: record.description.unwrap_or_default(),
                priority,
                created_at,
                age_hours,
                priority_rank: priority.rank(),
            });
        }

        debug!(count = tickets.len(), "工单预处理完成");
        Ok(tickets)
    }

    // ==========================================
    // 坐席
    // ==========================================

    /// 预处理坐席
    ///
    /// 规则:
    /// 1) max_daily_tickets 存在时优先于 max_daily, 都缺失时取默认值
    /// 2) current_load 缺失取 0; 负数按 0 处理
    /// 3) availability_status 缺失视为 available
    pub fn prepare_agents(&self, raw: Vec<RawAgentRecord>) -> ImportResult<Vec<Agent>> {
        let mut seen = HashSet::new();
        let mut agents = Vec::with_capacity(raw.len());

        for (idx, record) in raw.into_iter().enumerate() {
            let id = non_empty(record.id).ok_or(ImportError::PrimaryKeyMissing {
                entity: "agent",
                row: idx + 1,
            })?;
            if !seen.insert(id.clone()) {
                return Err(ImportError::DuplicateId { entity: "agent", id });
            }

            let max_daily = match record.max_daily_tickets.or(record.max_daily) {
                Some(v) if v >= 0 => u32::try_from(v).unwrap_or(u32::MAX),
                Some(v) => {
                    warn!(agent_id = %id, max_daily = v, "每日上限为负数, 按 0 处理");
                    0
                }
                None => self.default_max_daily,
            };

            let current_load = match record.current_load {
                Some(v) if v >= 0 => u32::try_from(v).unwrap_or(u32::MAX),
                Some(v) => {
                    warn!(agent_id = %id, current_load = v, "当前负载为负数, 按 0 处理");
                    0
                }
                None => 0,
            };

            let experience_level = record
                .experience_level
                .filter(|v| v.is_finite())
                .unwrap_or(0.0);

            let availability_status = record
                .availability_status
                .as_deref()
                .map(AvailabilityStatus::from_str)
                .unwrap_or_default();

            agents.push(Agent {
                name: non_empty(record.name).unwrap_or_else(|| id.clone()),
                id,
                skills: record.skills.map(SkillProfile::from).unwrap_or_default(),
                experience_level,
                availability_status,
                current_load,
                max_daily,
            });
        }

        debug!(count = agents.len(), "坐席预处理完成");
        Ok(agents)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_DAILY)
    }
}

// ==========================================
// 辅助函数
// ==========================================

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 解析创建时间
///
/// 支持: RFC3339 (带时区) / 无时区 ISO (按 UTC) / 纯日期 / Unix 秒 (数值或数字字符串)
pub fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::UnixSeconds(secs) => from_unix_seconds(*secs),
        RawTimestamp::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Some(dt.with_timezone(&Utc));
            }
            for fmt in NAIVE_DATETIME_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                    return Some(naive.and_utc());
                }
            }
            if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                return date.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
            }
            text.parse::<f64>().ok().and_then(from_unix_seconds)
        }
    }
}

fn from_unix_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// 工单年龄（小时）
pub fn age_hours(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / 3_600_000.0
}
