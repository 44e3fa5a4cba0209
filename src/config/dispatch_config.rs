// ==========================================
// 工单分派系统 - 分派配置
// ==========================================
// 职责: 评分策略选择、评分权重、默认容量、技能词表
// 格式: JSON, 所有字段可缺省 (缺省取默认值)
// ==========================================

use crate::config::error::ConfigError;
use crate::engine::strategy::ScoringStrategy;
use serde::{Deserialize, Serialize};

/// 坐席未提供每日上限时的默认值
pub const DEFAULT_MAX_DAILY: u32 = 10;

/// 字典评分默认技能词表
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "networking",
    "linux_administration",
    "windows_server",
    "active_directory",
    "database_sql",
    "cloud_aws",
    "cloud_azure",
    "cloud_gcp",
    "vpn",
    "firewall",
    "hardware_diagnostics",
    "laptop_repair",
    "printer",
    "email",
    "microsoft_365",
    "saas_integrations",
    "identity_management",
    "security_compliance",
    "phishing",
    "antivirus",
    "voip",
    "mobile_devices",
    "backup_recovery",
    "virtualization",
    "kubernetes",
    "docker",
    "python",
    "web_server",
    "dns",
    "password_reset",
    "software_licensing",
];

// ==========================================
// SimilarityWeights - 相似度评分权重
// ==========================================
// score = skill·similarity + priority·bonus - load·load_ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub skill_weight: f64,
    pub priority_weight: f64,
    pub load_weight: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            priority_weight: 0.3,
            load_weight: 0.1,
        }
    }
}

// ==========================================
// DictionaryWeights - 字典评分参数
// ==========================================
// skill_fit    = Σ熟练度 / (proficiency_scale × max(1, 命中数))
// exp_bonus    = min(experience / experience_cap, 1) × experience_scale
// load_penalty = (current_load / load_divisor) × load_scale
// score        = round4(skill·fit + experience·bonus - load·penalty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryWeights {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub load_weight: f64,
    pub proficiency_scale: f64,
    pub experience_cap: f64,
    pub experience_scale: f64,
    pub load_divisor: f64,
    pub load_scale: f64,
    pub vocabulary: Vec<String>,
}

impl Default for DictionaryWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            experience_weight: 0.2,
            load_weight: 0.2,
            proficiency_scale: 10.0,
            experience_cap: 15.0,
            experience_scale: 0.25,
            load_divisor: 5.0,
            load_scale: 0.2,
            vocabulary: DEFAULT_SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ==========================================
// DispatchConfig - 分派配置根对象
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub strategy: ScoringStrategy,
    pub default_max_daily: u32,
    pub include_title: bool, // 决策中是否附带工单标题
    pub similarity: SimilarityWeights,
    pub dictionary: DictionaryWeights,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::default(),
            default_max_daily: DEFAULT_MAX_DAILY,
            include_title: false,
            similarity: SimilarityWeights::default(),
            dictionary: DictionaryWeights::default(),
        }
    }
}

impl DispatchConfig {
    /// 校验配置
    ///
    /// # 规则
    /// - 权重必须为有限非负数
    /// - 除数类参数必须 > 0
    /// - 字典策略下词表不可为空
    ///
    /// # 返回
    /// 第一条违规对应的 ConfigError::InvalidValue
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("similarity.skill_weight", self.similarity.skill_weight),
            ("similarity.priority_weight", self.similarity.priority_weight),
            ("similarity.load_weight", self.similarity.load_weight),
            ("dictionary.skill_weight", self.dictionary.skill_weight),
            ("dictionary.experience_weight", self.dictionary.experience_weight),
            ("dictionary.load_weight", self.dictionary.load_weight),
            ("dictionary.experience_scale", self.dictionary.experience_scale),
            ("dictionary.load_scale", self.dictionary.load_scale),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(key, format!("必须为有限非负数, 实际 {}", value)));
            }
        }

        let positive = [
            ("dictionary.proficiency_scale", self.dictionary.proficiency_scale),
            ("dictionary.experience_cap", self.dictionary.experience_cap),
            ("dictionary.load_divisor", self.dictionary.load_divisor),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(key, format!("必须大于 0, 实际 {}", value)));
            }
        }

        if self.strategy == ScoringStrategy::Dictionary
            && self.dictionary.vocabulary.iter().all(|s| s.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "dictionary.vocabulary",
                "字典评分策略需要非空技能词表",
            ));
        }

        Ok(())
    }
}
