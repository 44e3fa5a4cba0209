// ==========================================
// AssignmentEngine 集成测试
// ==========================================
// 测试目标: 贪心分派在真实评分器下的行为
// 覆盖范围: 确定性、容量约束、完整性、处理顺序、负载反馈、典型场景
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use std::collections::{HashMap, HashSet};
use ticket_dispatch::domain::{Priority, NO_AGENT_AVAILABLE};
use ticket_dispatch::engine::INELIGIBLE_SCORE;
use ticket_dispatch::{
    logging, Agent, AssignmentDecision, AssignmentEngine, AssignmentWriter, DictionaryScorer,
    MatchScorer, SimilarityScorer, Ticket,
};

// ==========================================
// 测试辅助函数
// ==========================================

fn run_similarity(tickets: Vec<Ticket>, agents: &mut [Agent]) -> Vec<AssignmentDecision> {
    let mut scorer = SimilarityScorer::default();
    scorer.prepare(agents);
    AssignmentEngine::new().assign(tickets, agents, &scorer).unwrap()
}

fn run_dictionary(tickets: Vec<Ticket>, agents: &mut [Agent]) -> Vec<AssignmentDecision> {
    let scorer = DictionaryScorer::default();
    AssignmentEngine::new().assign(tickets, agents, &scorer).unwrap()
}

// ==========================================
// 性质
// ==========================================

#[test]
fn test_identical_inputs_give_identical_output() {
    logging::init_test();

    let mut agents_a = sample_text_agents();
    let mut agents_b = sample_text_agents();
    let a = run_similarity(sample_backlog(), &mut agents_a);
    let b = run_similarity(sample_backlog(), &mut agents_b);

    assert_eq!(
        AssignmentWriter::to_json_string(&a).unwrap(),
        AssignmentWriter::to_json_string(&b).unwrap()
    );
    assert_eq!(agents_a, agents_b);
}

#[test]
fn test_capacity_never_exceeded() {
    let mut agents = sample_text_agents();
    let initial: HashMap<String, u32> =
        agents.iter().map(|a| (a.id.clone(), a.current_load)).collect();

    let mut backlog = sample_backlog();
    backlog.extend(sample_backlog().into_iter().map(|mut t| {
        t.id = format!("{}-dup", t.id);
        t
    }));
    let decisions = run_similarity(backlog, &mut agents);

    let mut assigned_count: HashMap<String, u32> = HashMap::new();
    for d in &decisions {
        if let Some(agent_id) = &d.agent_id {
            *assigned_count.entry(agent_id.clone()).or_insert(0) += 1;
        }
    }

    for agent in &agents {
        assert!(agent.current_load <= agent.max_daily, "{} over capacity", agent.id);
        let added = assigned_count.get(&agent.id).copied().unwrap_or(0);
        assert_eq!(agent.current_load, initial[&agent.id] + added);
    }

    // 总容量 2 + 2 + 2 = 6, 其余 6 单未分派
    let unassigned: Vec<_> = decisions.iter().filter(|d| !d.is_assigned()).collect();
    assert_eq!(unassigned.len(), 6);
    assert!(unassigned.iter().all(|d| d.rationale == NO_AGENT_AVAILABLE));
}

#[test]
fn test_one_decision_per_ticket() {
    let tickets = sample_backlog();
    let input_ids: HashSet<String> = tickets.iter().map(|t| t.id.clone()).collect();

    let mut agents = sample_text_agents();
    let decisions = run_similarity(tickets, &mut agents);

    assert_eq!(decisions.len(), input_ids.len());
    let output_ids: HashSet<String> = decisions.iter().map(|d| d.ticket_id.clone()).collect();
    assert_eq!(output_ids, input_ids);
}

#[test]
fn test_processing_order_is_priority_then_age() {
    let tickets = sample_backlog();
    let by_id: HashMap<String, Ticket> =
        tickets.iter().map(|t| (t.id.clone(), t.clone())).collect();

    let mut agents = sample_text_agents();
    let decisions = run_similarity(tickets, &mut agents);

    let order: Vec<&str> = decisions.iter().map(|d| d.ticket_id.as_str()).collect();
    // T4/T2 为 high (6h, 2h); T3/T6 为 medium 且同龄, 保持输入顺序; T1 low 与 T5 未指定同级
    assert_eq!(order, vec!["T4", "T2", "T3", "T6", "T1", "T5"]);

    for pair in decisions.windows(2) {
        let a = &by_id[&pair[0].ticket_id];
        let b = &by_id[&pair[1].ticket_id];
        assert!(a.priority_rank >= b.priority_rank);
        if a.priority_rank == b.priority_rank {
            assert!(a.age_hours >= b.age_hours);
        }
    }
}

#[test]
fn test_load_feedback_moves_second_ticket() {
    let tickets = vec![
        TicketBuilder::new("T1").description("vpn broken").priority(Priority::High).build(),
        TicketBuilder::new("T2").description("vpn broken").priority(Priority::High).build(),
    ];
    let mut agents = vec![
        AgentBuilder::new("A1").skills_text("vpn").load(0, 5).build(),
        AgentBuilder::new("A2").skills_text("vpn").load(0, 5).build(),
    ];
    let decisions = run_similarity(tickets, &mut agents);

    // 同分时先出现者胜出, 其负载上升后下一单转给 A2
    assert_eq!(decisions[0].agent_id.as_deref(), Some("A1"));
    assert_eq!(decisions[1].agent_id.as_deref(), Some("A2"));
    // 两单胜出得分相同 (A2 负载为 0), 第二单 A1 的得分因负载下降
    assert!((decisions[0].score().unwrap() - decisions[1].score().unwrap()).abs() < 1e-12);
    assert!(decisions[1].rationale.ends_with("load=1/5"));
    assert_eq!(agents[0].current_load, 1);
    assert_eq!(agents[1].current_load, 1);
}

// ==========================================
// 场景
// ==========================================

#[test]
fn test_skill_match_wins() {
    let ticket = TicketBuilder::new("T1")
        .description("laptop screen flickers after update")
        .priority(Priority::High)
        .age_hours(5.0)
        .build();
    let mut agents = vec![
        AgentBuilder::new("A").skills_text("laptop hardware repair").load(0, 5).build(),
        AgentBuilder::new("B").skills_text("database sql tuning").load(0, 5).build(),
    ];

    let mut scorer = SimilarityScorer::default();
    scorer.prepare(&agents);
    let score_b = scorer.score(&ticket, &agents[1]).unwrap();

    let decisions = AssignmentEngine::new()
        .assign(vec![ticket], &mut agents, &scorer)
        .unwrap();

    assert_eq!(decisions[0].agent_id.as_deref(), Some("A"));
    assert!(decisions[0].score().unwrap() > score_b);
    assert!(decisions[0].rationale.starts_with("score="));
    assert!(decisions[0].rationale.ends_with("load=1/5"));
}

#[test]
fn test_only_matching_agent_at_capacity_leaves_ticket_unassigned() {
    let ticket = TicketBuilder::new("T1")
        .description("firewall rule blocks port")
        .priority(Priority::High)
        .build();
    let mut agents = vec![AgentBuilder::new("A1").skills_text("firewall").load(4, 4).build()];

    let decisions = run_similarity(vec![ticket], &mut agents);

    assert_eq!(decisions[0].agent_id, None);
    assert_eq!(decisions[0].rationale, "no agent available");
    assert_eq!(agents[0].current_load, 4);
}

#[test]
fn test_unavailable_agent_never_assigned_under_dictionary() {
    let tickets = vec![
        TicketBuilder::new("T1").title("VPN").description("vpn and dns broken").build(),
        TicketBuilder::new("T2").title("VPN again").description("vpn").build(),
    ];
    let mut agents = vec![
        AgentBuilder::new("EXPERT")
            .proficiency(&[("vpn", 10.0), ("dns", 10.0)])
            .experience(20.0)
            .status("on_vacation")
            .build(),
        AgentBuilder::new("JUNIOR").proficiency(&[("vpn", 2.0)]).experience(1.0).build(),
    ];

    let expert_score = DictionaryScorer::default()
        .score(&tickets[0], &agents[0])
        .unwrap();
    assert_eq!(expert_score, INELIGIBLE_SCORE);

    let decisions = run_dictionary(tickets, &mut agents);
    assert!(decisions.iter().all(|d| d.agent_id.as_deref() == Some("JUNIOR")));
    assert_eq!(agents[0].current_load, 0);
}

#[test]
fn test_only_unavailable_agents_leave_ticket_unassigned() {
    let tickets = vec![TicketBuilder::new("T1").description("printer").build()];
    let mut agents = vec![AgentBuilder::new("A1").proficiency(&[("printer", 9.0)]).status("offline").build()];
    let decisions = run_dictionary(tickets, &mut agents);
    assert_eq!(decisions[0].rationale, NO_AGENT_AVAILABLE);
}

#[test]
fn test_zero_capacity_agent_is_blocked_not_divided() {
    let tickets = vec![TicketBuilder::new("T1").description("dns").priority(Priority::Low).build()];
    let mut agents = vec![
        AgentBuilder::new("ZERO").skills_text("dns").load(0, 0).build(),
        AgentBuilder::new("OK").skills_text("email").load(0, 1).build(),
    ];

    let mut scorer = SimilarityScorer::default();
    scorer.prepare(&agents);
    assert!(scorer.score(&tickets[0], &agents[0]).unwrap().is_finite());

    let decisions = AssignmentEngine::new()
        .assign(tickets, &mut agents, &scorer)
        .unwrap();
    assert_eq!(decisions[0].agent_id.as_deref(), Some("OK"));
    assert_eq!(agents[0].current_load, 0);
}

#[test]
fn test_empty_inputs() {
    let mut agents: Vec<Agent> = Vec::new();
    assert!(run_similarity(Vec::new(), &mut agents).is_empty());

    let decisions = run_similarity(sample_backlog(), &mut agents);
    assert_eq!(decisions.len(), 6);
    assert!(decisions.iter().all(|d| !d.is_assigned()));
}
