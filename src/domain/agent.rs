// ==========================================
// 工单分派系统 - 坐席领域模型
// ==========================================
// 职责: 原始坐席记录、技能画像、坐席实体与负载约束
// 红线: current_load 只由分派引擎修改, 且单调不减
// ==========================================

use crate::domain::ticket::de_opt_id;
use crate::domain::types::AvailabilityStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// SkillProfile - 技能画像
// ==========================================
// 两种来源: 自由文本 (相似度评分) / 技能→熟练度字典 (字典评分)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillProfile {
    Text(String),
    Proficiency(BTreeMap<String, f64>),
}

impl SkillProfile {
    /// 用于向量化的技能文本
    ///
    /// 字典画像取技能名拼接, 下划线替换为空格以便分词
    pub fn as_text(&self) -> String {
        match self {
            SkillProfile::Text(text) => text.to_lowercase(),
            SkillProfile::Proficiency(map) => map
                .keys()
                .map(|k| normalize_skill_key(k))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// 指定技能的熟练度, 未登记的技能为 0
    ///
    /// 技能名比较时忽略大小写与下划线/空格差异
    pub fn proficiency(&self, skill: &str) -> f64 {
        match self {
            SkillProfile::Text(_) => 0.0,
            SkillProfile::Proficiency(map) => {
                let wanted = normalize_skill_key(skill);
                map.iter()
                    .find(|(k, _)| normalize_skill_key(k) == wanted)
                    .map(|(_, v)| if v.is_finite() { *v } else { 0.0 })
                    .unwrap_or(0.0)
            }
        }
    }
}

impl Default for SkillProfile {
    fn default() -> Self {
        SkillProfile::Text(String::new())
    }
}

/// 技能名标准化: 小写, 下划线视作空格
pub fn normalize_skill_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', " ")
}

// ==========================================
// RawSkills - 原始技能字段
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSkills {
    Text(String),
    List(Vec<String>),
    Proficiency(BTreeMap<String, f64>),
}

impl From<RawSkills> for SkillProfile {
    fn from(raw: RawSkills) -> Self {
        match raw {
            RawSkills::Text(text) => SkillProfile::Text(text),
            RawSkills::List(items) => SkillProfile::Text(items.join(" ")),
            RawSkills::Proficiency(map) => SkillProfile::Proficiency(map),
        }
    }
}

// ==========================================
// RawAgentRecord - 原始坐席记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAgentRecord {
    #[serde(default, alias = "agent_id", deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<RawSkills>,
    #[serde(default)]
    pub experience_level: Option<f64>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub current_load: Option<i64>,
    #[serde(default)]
    pub max_daily: Option<i64>,
    #[serde(default)]
    pub max_daily_tickets: Option<i64>, // 存在时优先于 max_daily
}

// ==========================================
// Agent - 坐席
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub skills: SkillProfile,
    pub experience_level: f64,
    pub availability_status: AvailabilityStatus,

    // ===== 负载 =====
    pub current_load: u32, // 当前负载 (运行内单调不减)
    pub max_daily: u32,    // 每日上限
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 分派引擎的容量门控接口
pub trait CapacityConstraint {
    /// 是否还能再接一单（current_load < max_daily）
    fn has_capacity(&self) -> bool;

    /// 剩余容量
    fn remaining_capacity(&self) -> u32;

    /// 负载比例, max_daily 为 0 时返回 0
    fn load_ratio(&self) -> f64;

    /// 提交一单, 返回提交后的负载
    fn commit_one(&mut self) -> u32;
}

impl CapacityConstraint for Agent {
    fn has_capacity(&self) -> bool {
        self.current_load < self.max_daily
    }

    fn remaining_capacity(&self) -> u32 {
        self.max_daily.saturating_sub(self.current_load)
    }

    fn load_ratio(&self) -> f64 {
        if self.max_daily == 0 {
            return 0.0;
        }
        self.current_load as f64 / self.max_daily as f64
    }

    fn commit_one(&mut self) -> u32 {
        self.current_load = self.current_load.saturating_add(1);
        self.current_load
    }
}
