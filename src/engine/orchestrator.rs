// ==========================================
// 工单分派系统 - 分派编排器
// ==========================================
// 流程: 预处理 → 选择评分器 → prepare → 分派 → 汇总
// 红线: 每次运行持有独立的坐席副本, 运行之间不共享负载
// ==========================================

use crate::config::DispatchConfig;
use crate::domain::{Agent, AssignmentDecision, AssignmentDocument};
use crate::engine::assignment::AssignmentEngine;
use crate::engine::scoring::build_scorer;
use crate::engine::strategy::ScoringStrategy;
use crate::error::DispatchError;
use crate::importer::{Preprocessor, RawDataset};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

// ==========================================
// 运行结果
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentLoad {
    pub agent_id: String,
    pub current_load: u32,
    pub max_daily: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchSummary {
    pub run_id: String,
    pub strategy: ScoringStrategy,
    pub total_tickets: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub agent_loads: Vec<AgentLoad>,
}

impl DispatchSummary {
    fn from_run(
        run_id: &str,
        strategy: ScoringStrategy,
        decisions: &[AssignmentDecision],
        agents: &[Agent],
    ) -> Self {
        let assigned = decisions.iter().filter(|d| d.is_assigned()).count();
        Self {
            run_id: run_id.to_string(),
            strategy,
            total_tickets: decisions.len(),
            assigned,
            unassigned: decisions.len() - assigned,
            agent_loads: agents
                .iter()
                .map(|a| AgentLoad {
                    agent_id: a.id.clone(),
                    current_load: a.current_load,
                    max_daily: a.max_daily,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub decisions: Vec<AssignmentDecision>,
    pub agents: Vec<Agent>, // 运行结束时的负载
    pub summary: DispatchSummary,
}

impl DispatchResult {
    pub fn document(&self) -> AssignmentDocument {
        AssignmentDocument {
            assignments: self.decisions.clone(),
        }
    }
}

// ==========================================
// DispatchOrchestrator
// ==========================================
pub struct DispatchOrchestrator {
    config: DispatchConfig,
}

impl DispatchOrchestrator {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// 执行一次完整分派
    ///
    /// # 参数
    /// - `dataset`: 原始数据集
    /// - `now`: 计算工单年龄的时刻
    ///
    /// # 返回
    /// - Ok: 决策、最终负载与汇总
    /// - Err: 预处理或评分失败
    pub fn run(
        &self,
        dataset: RawDataset,
        now: DateTime<Utc>,
    ) -> Result<DispatchResult, DispatchError> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("dispatch_run", run_id = %run_id, strategy = %self.config.strategy);
        let _guard = span.enter();

        let preprocessor = Preprocessor::new(self.config.default_max_daily);
        let tickets = preprocessor.prepare_tickets(dataset.tickets, now)?;
        let mut agents = preprocessor.prepare_agents(dataset.agents)?;
        info!(tickets = tickets.len(), agents = agents.len(), "预处理完成");

        let mut scorer = build_scorer(&self.config);
        scorer.prepare(&agents);

        let engine = AssignmentEngine::new().with_title(self.config.include_title);
        let decisions = engine.assign(tickets, &mut agents, scorer.as_ref())?;

        let summary =
            DispatchSummary::from_run(&run_id, self.config.strategy, &decisions, &agents);
        info!(
            assigned = summary.assigned,
            unassigned = summary.unassigned,
            "分派完成"
        );

        Ok(DispatchResult {
            decisions,
            agents,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawAgentRecord, RawSkills, RawTicketRecord, RawTimestamp};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap()
    }

    fn dataset() -> RawDataset {
        RawDataset {
            tickets: vec![
                RawTicketRecord {
                    id: Some("T1".to_string()),
                    title: Some("Printer".to_string()),
                    description: Some("printer offline".to_string()),
                    priority: Some("low".to_string()),
                    created_at: Some(RawTimestamp::Text("2025-01-01T00:00:00Z".to_string())),
                },
                RawTicketRecord {
                    id: Some("T2".to_string()),
                    title: Some("VPN".to_string()),
                    description: Some("vpn tunnel drops".to_string()),
                    priority: Some("high".to_string()),
                    created_at: Some(RawTimestamp::Text("2025-01-01T12:00:00Z".to_string())),
                },
            ],
            agents: vec![
                RawAgentRecord {
                    id: Some("A1".to_string()),
                    skills: Some(RawSkills::Text("vpn networking".to_string())),
                    max_daily: Some(1),
                    ..Default::default()
                },
                RawAgentRecord {
                    id: Some("A2".to_string()),
                    skills: Some(RawSkills::Text("printer hardware".to_string())),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_run_produces_summary() {
        let result = DispatchOrchestrator::new(DispatchConfig::default())
            .run(dataset(), now())
            .unwrap();

        let ids: Vec<_> = result.decisions.iter().map(|d| d.ticket_id.as_str()).collect();
        assert_eq!(ids, vec!["T2", "T1"]);
        assert_eq!(result.decisions[0].agent_id.as_deref(), Some("A1"));
        assert_eq!(result.decisions[1].agent_id.as_deref(), Some("A2"));

        let s = &result.summary;
        assert_eq!((s.total_tickets, s.assigned, s.unassigned), (2, 2, 0));
        assert_eq!(s.agent_loads[0].current_load, 1);
        assert_eq!(s.agent_loads[1].max_daily, 10);
        assert!(Uuid::parse_str(&s.run_id).is_ok());
    }

    #[test]
    fn test_run_id_differs_but_decisions_do_not() {
        let orch = DispatchOrchestrator::new(DispatchConfig::default());
        let a = orch.run(dataset(), now()).unwrap();
        let b = orch.run(dataset(), now()).unwrap();
        assert_ne!(a.summary.run_id, b.summary.run_id);
        assert_eq!(a.decisions, b.decisions);
    }

    #[test]
    fn test_missing_ticket_id_aborts() {
        let mut ds = dataset();
        ds.tickets[0].id = None;
        let err = DispatchOrchestrator::new(DispatchConfig::default())
            .run(ds, now())
            .unwrap_err();
        assert!(matches!(err, DispatchError::Import(_)));
    }
}
