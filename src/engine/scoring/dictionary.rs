// ==========================================
// 工单分派系统 - 技能字典评分
// ==========================================
// 红线: 非 available 坐席返回 INELIGIBLE_SCORE
// ==========================================

use super::{MatchScorer, INELIGIBLE_SCORE};
use crate::config::DictionaryWeights;
use crate::domain::{normalize_skill_key, Agent, Ticket};
use crate::engine::error::ScoringResult;

pub struct DictionaryScorer {
    weights: DictionaryWeights,
    // (原始技能名, 标准化形式)
    vocabulary: Vec<(String, String)>,
}

impl DictionaryScorer {
    pub fn new(weights: DictionaryWeights) -> Self {
        let vocabulary = weights
            .vocabulary
            .iter()
            .map(|s| (s.clone(), normalize_skill_key(s)))
            .filter(|(_, norm)| !norm.is_empty())
            .collect();
        Self {
            weights,
            vocabulary,
        }
    }

    /// 从工单文本中抽取命中的词表技能
    ///
    /// 大小写与下划线不敏感的子串匹配, 按词表顺序返回
    pub fn extract_skills(&self, text: &str) -> Vec<&str> {
        let haystack = normalize_skill_key(text);
        self.vocabulary
            .iter()
            .filter(|(_, norm)| haystack.contains(norm.as_str()))
            .map(|(raw, _)| raw.as_str())
            .collect()
    }

    fn skill_fit(&self, ticket: &Ticket, agent: &Agent) -> f64 {
        let matched = self.extract_skills(&ticket.full_text());
        let total: f64 = matched.iter().map(|s| agent.skills.proficiency(s)).sum();
        total / (self.weights.proficiency_scale * matched.len().max(1) as f64)
    }
}

impl Default for DictionaryScorer {
    fn default() -> Self {
        Self::new(DictionaryWeights::default())
    }
}

impl MatchScorer for DictionaryScorer {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn score(&self, ticket: &Ticket, agent: &Agent) -> ScoringResult<f64> {
        if !agent.availability_status.is_available() {
            return Ok(INELIGIBLE_SCORE);
        }

        let w = &self.weights;
        let fit = self.skill_fit(ticket, agent);
        let exp_bonus = (agent.experience_level / w.experience_cap).min(1.0) * w.experience_scale;
        let load_penalty = (agent.current_load as f64 / w.load_divisor) * w.load_scale;

        let raw = w.skill_weight * fit + w.experience_weight * exp_bonus - w.load_weight * load_penalty;
        Ok(round4(raw))
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
