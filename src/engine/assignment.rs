// ==========================================
// 工单分派系统 - 贪心分派引擎
// ==========================================
// 红线: 容量约束优先于得分, 负载只增不减
// ==========================================
// 职责: 按处理顺序逐单选出得分最高的坐席并提交负载
// 输入: 预处理后的工单 + 坐席 (可变) + 已 prepare 的评分器
// 输出: 每张工单恰好一条决策, 顺序即处理顺序
// ==========================================

use crate::domain::{Agent, AssignmentDecision, CapacityConstraint, Ticket};
use crate::engine::error::ScoringResult;
use crate::engine::ordering::TicketSorter;
use crate::engine::scoring::{is_eligible_score, MatchScorer};
use tracing::{debug, instrument};

// ==========================================
// AssignmentEngine - 分派引擎
// ==========================================
pub struct AssignmentEngine {
    sorter: TicketSorter,
    include_title: bool,
}

impl AssignmentEngine {
    pub fn new() -> Self {
        Self {
            sorter: TicketSorter::new(),
            include_title: false,
        }
    }

    /// 决策中附带工单标题
    pub fn with_title(mut self, include_title: bool) -> Self {
        self.include_title = include_title;
        self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分派工单
    ///
    /// 规则:
    /// 1) 工单按 TicketSorter 排序, 只排一次
    /// 2) 逐单扫描坐席, current_load >= max_daily 的跳过
    /// 3) 不可分派标记或非有限得分跳过
    /// 4) 严格大于才替换当前最优, 同分取先出现的坐席
    /// 5) 胜出坐席负载 +1 后再处理下一单
    /// 6) 无候选时记录未分派决策
    ///
    /// # 参数
    /// - `tickets`: 预处理后的工单
    /// - `agents`: 坐席 (负载会被修改)
    /// - `scorer`: 已完成 prepare 的评分器
    ///
    /// # 返回
    /// - Ok: 决策列表 (与排序后工单一一对应)
    /// - Err: 评分器报错, 整次运行中止
    #[instrument(skip_all, fields(
        scorer = scorer.name(),
        tickets_count = tickets.len(),
        agents_count = agents.len()
    ))]
    pub fn assign(
        &self,
        tickets: Vec<Ticket>,
        agents: &mut [Agent],
        scorer: &dyn MatchScorer,
    ) -> ScoringResult<Vec<AssignmentDecision>> {
        let ordered = self.sorter.sort(tickets);
        let mut decisions = Vec::with_capacity(ordered.len());

        for ticket in &ordered {
            let title = self.include_title.then(|| ticket.title.clone());

            let mut best: Option<(usize, f64)> = None;
            for (idx, agent) in agents.iter().enumerate() {
                if !agent.has_capacity() {
                    continue;
                }
                let score = scorer.score(ticket, agent)?;
                if !is_eligible_score(score) {
                    continue;
                }
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((idx, score)),
                }
            }

            let decision = match best {
                Some((idx, score)) => {
                    let agent = &mut agents[idx];
                    let load_after = agent.commit_one();
                    debug!(
                        ticket_id = %ticket.id,
                        agent_id = %agent.id,
                        score,
                        load_after,
                        "工单已分派"
                    );
                    AssignmentDecision::assigned(
                        &ticket.id,
                        title,
                        &agent.id,
                        score,
                        load_after,
                        agent.max_daily,
                    )
                }
                None => {
                    debug!(ticket_id = %ticket.id, "无可用坐席");
                    AssignmentDecision::unassigned(&ticket.id, title)
                }
            };
            decisions.push(decision);
        }

        Ok(decisions)
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
