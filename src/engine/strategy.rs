// ==========================================
// 工单分派系统 - 评分策略定义
// ==========================================
// 用途:
// - 同一分派引擎下可切换两种评分后端 (相似度 / 字典);
// - 每次部署只启用一种, 由配置或命令行选择。

use serde::{Deserialize, Serialize};

/// 评分策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    Similarity,
    Dictionary,
}

impl ScoringStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::Similarity => "similarity",
            ScoringStrategy::Dictionary => "dictionary",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            ScoringStrategy::Similarity => "文本相似度评分",
            ScoringStrategy::Dictionary => "技能字典评分",
        }
    }
}

impl Default for ScoringStrategy {
    fn default() -> Self {
        ScoringStrategy::Similarity
    }
}

impl std::fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "similarity" | "tfidf" | "tf-idf" => Ok(ScoringStrategy::Similarity),
            "dictionary" | "dict" | "proficiency" => Ok(ScoringStrategy::Dictionary),
            other => Err(format!("未知评分策略: {}", other)),
        }
    }
}
