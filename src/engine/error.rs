// ==========================================
// 工单分派系统 - 评分错误类型
// ==========================================
// 红线: 评分错误一律中止本次运行, 不返回部分分派结果
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("评分器 {scorer} 尚未完成预计算 (需先调用 prepare)")]
    NotPrepared { scorer: &'static str },

    #[error("坐席 {agent_id} 不在技能索引中")]
    AgentNotIndexed { agent_id: String },
}

pub type ScoringResult<T> = Result<T, ScoringError>;
