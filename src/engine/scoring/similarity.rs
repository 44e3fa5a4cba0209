// ==========================================
// 工单分派系统 - 文本相似度评分
// ==========================================
// score = skill·cosine(描述, 技能) + priority·bonus - load·load_ratio
// 前置: prepare() 建立 SkillIndex, 未建立时评分直接报错
// ==========================================

use super::tfidf::{SparseVector, TfidfVectorizer};
use super::MatchScorer;
use crate::config::SimilarityWeights;
use crate::domain::{Agent, CapacityConstraint, Ticket};
use crate::engine::error::{ScoringError, ScoringResult};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// SkillIndex - 坐席技能向量索引
// ==========================================
// 每次运行构建一次, 构建后只读
#[derive(Debug, Clone)]
pub struct SkillIndex {
    vectorizer: TfidfVectorizer,
    vectors: HashMap<String, SparseVector>,
}

impl SkillIndex {
    pub fn build(agents: &[Agent]) -> Self {
        let texts: Vec<String> = agents.iter().map(|a| a.skills.as_text()).collect();
        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(&texts);

        let vectors = agents
            .iter()
            .map(|a| a.id.clone())
            .zip(matrix)
            .collect::<HashMap<_, _>>();

        debug!(
            agents = agents.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "技能索引构建完成"
        );

        Self { vectorizer, vectors }
    }

    /// 工单描述与坐席技能的余弦相似度
    pub fn similarity(&self, description: &str, agent_id: &str) -> ScoringResult<f64> {
        let agent_vec = self
            .vectors
            .get(agent_id)
            .ok_or_else(|| ScoringError::AgentNotIndexed {
                agent_id: agent_id.to_string(),
            })?;
        let ticket_vec = self.vectorizer.transform(description);
        Ok(ticket_vec.cosine(agent_vec))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

// ==========================================
// SimilarityScorer
// ==========================================
pub struct SimilarityScorer {
    weights: SimilarityWeights,
    index: Option<SkillIndex>,
}

impl SimilarityScorer {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self {
            weights,
            index: None,
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.index.is_some()
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(SimilarityWeights::default())
    }
}

impl MatchScorer for SimilarityScorer {
    fn name(&self) -> &'static str {
        "similarity"
    }

    fn prepare(&mut self, agents: &[Agent]) {
        self.index = Some(SkillIndex::build(agents));
    }

    fn score(&self, ticket: &Ticket, agent: &Agent) -> ScoringResult<f64> {
        let index = self.index.as_ref().ok_or(ScoringError::NotPrepared {
            scorer: self.name(),
        })?;

        let similarity = index.similarity(&ticket.description, &agent.id)?;
        let w = &self.weights;
        Ok(w.skill_weight * similarity + w.priority_weight * ticket.priority.bonus()
            - w.load_weight * agent.load_ratio())
    }
}
