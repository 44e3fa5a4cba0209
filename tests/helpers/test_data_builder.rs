// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use std::collections::BTreeMap;
use ticket_dispatch::domain::{AvailabilityStatus, Priority, SkillProfile};
use ticket_dispatch::{Agent, Ticket};

// ==========================================
// Ticket 构建器
// ==========================================

pub struct TicketBuilder {
    id: String,
    title: String,
    description: String,
    priority: Priority,
    age_hours: f64,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            priority: Priority::Unspecified,
            age_hours: 0.0,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn age_hours(mut self, age: f64) -> Self {
        self.age_hours = age;
        self
    }

    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            created_at: None,
            age_hours: self.age_hours,
            priority_rank: self.priority.rank(),
        }
    }
}

// ==========================================
// Agent 构建器
// ==========================================

pub struct AgentBuilder {
    id: String,
    skills: SkillProfile,
    experience_level: f64,
    availability_status: AvailabilityStatus,
    current_load: u32,
    max_daily: u32,
}

impl AgentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            skills: SkillProfile::default(),
            experience_level: 0.0,
            availability_status: AvailabilityStatus::Available,
            current_load: 0,
            max_daily: 10,
        }
    }

    pub fn skills_text(mut self, skills: &str) -> Self {
        self.skills = SkillProfile::Text(skills.to_string());
        self
    }

    pub fn proficiency(mut self, skills: &[(&str, f64)]) -> Self {
        let map: BTreeMap<String, f64> =
            skills.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        self.skills = SkillProfile::Proficiency(map);
        self
    }

    pub fn experience(mut self, years: f64) -> Self {
        self.experience_level = years;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.availability_status = AvailabilityStatus::from_str(status);
        self
    }

    pub fn load(mut self, current: u32, max: u32) -> Self {
        self.current_load = current;
        self.max_daily = max;
        self
    }

    pub fn build(self) -> Agent {
        Agent {
            name: format!("agent {}", self.id),
            id: self.id,
            skills: self.skills,
            experience_level: self.experience_level,
            availability_status: self.availability_status,
            current_load: self.current_load,
            max_daily: self.max_daily,
        }
    }
}

// ==========================================
// 常用数据集
// ==========================================

/// 混合优先级的工单积压
pub fn sample_backlog() -> Vec<Ticket> {
    vec![
        TicketBuilder::new("T1")
            .title("Printer jam")
            .description("printer on floor 3 jams on every print")
            .priority(Priority::Low)
            .age_hours(30.0)
            .build(),
        TicketBuilder::new("T2")
            .title("VPN down")
            .description("vpn tunnel drops for remote staff")
            .priority(Priority::High)
            .age_hours(2.0)
            .build(),
        TicketBuilder::new("T3")
            .title("Mailbox full")
            .description("email quota exceeded, cannot receive email")
            .priority(Priority::Medium)
            .age_hours(12.0)
            .build(),
        TicketBuilder::new("T4")
            .title("DNS")
            .description("dns resolution fails for intranet hosts")
            .priority(Priority::High)
            .age_hours(6.0)
            .build(),
        TicketBuilder::new("T5")
            .title("Password")
            .description("password reset for locked account")
            .priority(Priority::Unspecified)
            .age_hours(1.0)
            .build(),
        TicketBuilder::new("T6")
            .title("VPN slow")
            .description("vpn throughput very slow")
            .priority(Priority::Medium)
            .age_hours(12.0)
            .build(),
    ]
}

/// 文本技能坐席
pub fn sample_text_agents() -> Vec<Agent> {
    vec![
        AgentBuilder::new("A1").skills_text("vpn networking dns firewall").load(0, 2).build(),
        AgentBuilder::new("A2").skills_text("printer hardware laptop").load(1, 3).build(),
        AgentBuilder::new("A3").skills_text("email microsoft 365 password reset").load(0, 2).build(),
    ]
}
