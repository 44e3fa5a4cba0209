// ==========================================
// 工单分派系统 - 匹配评分
// ==========================================
// 职责: 对 (工单, 坐席) 打分, 越高越匹配
// 红线: 评分器只读工单与坐席, 不修改负载
// ==========================================
// 两种后端 (同一部署只启用一种):
// - SimilarityScorer: TF-IDF 余弦相似度
// - DictionaryScorer: 技能词表 + 熟练度
// ==========================================

mod dictionary;
mod similarity;
mod tfidf;

pub use dictionary::DictionaryScorer;
pub use similarity::{SimilarityScorer, SkillIndex};
pub use tfidf::{tokenize, SparseVector, TfidfVectorizer};

use crate::config::DispatchConfig;
use crate::domain::{Agent, Ticket};
use crate::engine::error::ScoringResult;
use crate::engine::strategy::ScoringStrategy;

/// 硬性不可分派标记, 远低于任何真实得分
pub const INELIGIBLE_SCORE: f64 = -1.0e9;

/// 判断得分是否可参与比较
pub fn is_eligible_score(score: f64) -> bool {
    score.is_finite() && score > INELIGIBLE_SCORE
}

// ==========================================
// Trait: MatchScorer
// ==========================================
pub trait MatchScorer {
    fn name(&self) -> &'static str;

    /// 一次性预计算, 须在首次评分前完成
    fn prepare(&mut self, _agents: &[Agent]) {}

    fn score(&self, ticket: &Ticket, agent: &Agent) -> ScoringResult<f64>;
}

/// 按配置构造评分器 (尚未 prepare)
pub fn build_scorer(config: &DispatchConfig) -> Box<dyn MatchScorer> {
    match config.strategy {
        ScoringStrategy::Similarity => Box::new(SimilarityScorer::new(config.similarity.clone())),
        ScoringStrategy::Dictionary => Box::new(DictionaryScorer::new(config.dictionary.clone())),
    }
}
