// ==========================================
// 工单分派系统 - 工单处理顺序
// ==========================================
// 排序键:
// 1) priority_rank 降序 (紧急优先)
// 2) age_hours 降序 (老单优先)
// 3) 其余保持输入顺序 (稳定排序)
// ==========================================

use crate::domain::Ticket;
use std::cmp::Ordering;

// ==========================================
// TicketSorter - 工单排序器
// ==========================================
pub struct TicketSorter {
    // 无状态
}

impl TicketSorter {
    pub fn new() -> Self {
        Self {}
    }

    /// 排序工单列表（稳定）
    pub fn sort(&self, mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.sort_by(|a, b| self.compare(a, b));
        tickets
    }

    fn compare(&self, a: &Ticket, b: &Ticket) -> Ordering {
        b.priority_rank
            .cmp(&a.priority_rank)
            .then_with(|| b.age_hours.total_cmp(&a.age_hours))
    }
}

impl Default for TicketSorter {
    fn default() -> Self {
        Self::new()
    }
}
