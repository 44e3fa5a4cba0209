// ==========================================
// 工单分派系统 - 分派决策领域模型
// ==========================================
// 职责: 每张工单恰好一条决策, 按处理顺序生成, 生成后不可变
// ==========================================

use serde::{Deserialize, Serialize};

/// 无可用坐席时的决策理由
pub const NO_AGENT_AVAILABLE: &str = "no agent available";

// ==========================================
// AssignmentDecision - 分派决策
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    pub ticket_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub agent_id: Option<String>, // None = 未分派 (序列化为 null)
    pub rationale: String,
    #[serde(skip)]
    pub score: Option<f64>, // 胜出得分, 不写入输出文档
}

impl AssignmentDecision {
    /// 已分派决策
    ///
    /// 理由格式: `score=<4位小数> load=<分派后负载>/<上限>`
    pub fn assigned(
        ticket_id: &str,
        title: Option<String>,
        agent_id: &str,
        score: f64,
        load_after: u32,
        max_daily: u32,
    ) -> Self {
        Self {
            ticket_id: ticket_id.to_string(),
            title,
            agent_id: Some(agent_id.to_string()),
            rationale: format!("score={:.4} load={}/{}", score, load_after, max_daily),
            score: Some(score),
        }
    }

    /// 未分派决策
    pub fn unassigned(ticket_id: &str, title: Option<String>) -> Self {
        Self {
            ticket_id: ticket_id.to_string(),
            title,
            agent_id: None,
            rationale: NO_AGENT_AVAILABLE.to_string(),
            score: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.agent_id.is_some()
    }

    /// 胜出得分（未分派时为 None）
    pub fn score(&self) -> Option<f64> {
        self.score
    }
}

// ==========================================
// AssignmentDocument - 输出文档
// ==========================================
// 单一顶层键包裹决策列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDocument {
    pub assignments: Vec<AssignmentDecision>,
}
