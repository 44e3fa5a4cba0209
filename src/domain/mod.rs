// ==========================================
// 工单分派系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、容量约束接口
// 红线: 不含 I/O 逻辑, 不含引擎逻辑
// ==========================================

pub mod agent;
pub mod assignment;
pub mod ticket;
pub mod types;

// 重导出核心类型
pub use agent::{normalize_skill_key, Agent, CapacityConstraint, RawAgentRecord, RawSkills, SkillProfile};
pub use assignment::{AssignmentDecision, AssignmentDocument, NO_AGENT_AVAILABLE};
pub use ticket::{RawTicketRecord, RawTimestamp, Ticket};
pub use types::{AvailabilityStatus, Priority};
