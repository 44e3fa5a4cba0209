// ==========================================
// 工单分派系统 - 引擎层
// ==========================================
// 职责: 工单排序、匹配评分、贪心分派、运行编排
// 红线: 分派循环严格串行, 后续工单能看到前序工单提交的负载
// ==========================================

pub mod assignment;
pub mod error;
pub mod orchestrator;
pub mod ordering;
pub mod scoring;
pub mod strategy;

// 重导出核心类型
pub use assignment::AssignmentEngine;
pub use error::{ScoringError, ScoringResult};
pub use orchestrator::{AgentLoad, DispatchOrchestrator, DispatchResult, DispatchSummary};
pub use ordering::TicketSorter;
pub use scoring::{
    build_scorer, is_eligible_score, DictionaryScorer, MatchScorer, SimilarityScorer, SkillIndex,
    TfidfVectorizer, INELIGIBLE_SCORE,
};
pub use strategy::ScoringStrategy;
