// ==========================================
// 工单分派系统 - 命令行入口
// ==========================================
// 读取数据集 → 分派 → 写出 {"assignments": [...]} → 打印汇总
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use ticket_dispatch::{
    logging, AssignmentWriter, ConfigManager, DatasetLoader, DispatchOrchestrator,
    ScoringStrategy, APP_NAME, VERSION,
};

#[derive(Parser)]
#[command(name = "ticket-dispatch")]
#[command(version, about = "工单分派系统 - 贪心优先级匹配")]
struct Cli {
    /// 数据集 JSON ({"tickets": [...], "agents": [...]})
    #[arg(long, default_value = "dataset.json")]
    dataset: PathBuf,

    /// 工单 CSV (需与 --agents-csv 同时使用, 替代 --dataset)
    #[arg(long, requires = "agents_csv")]
    tickets_csv: Option<PathBuf>,

    /// 坐席 CSV
    #[arg(long, requires = "tickets_csv")]
    agents_csv: Option<PathBuf>,

    /// 结果输出路径
    #[arg(long, default_value = "output_result.json")]
    output: PathBuf,

    /// 分派配置 JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// 评分策略 (similarity | dictionary), 优先于配置文件
    #[arg(long)]
    strategy: Option<ScoringStrategy>,

    /// 计算工单年龄的时刻 (RFC3339), 缺省为当前时间
    #[arg(long)]
    now: Option<String>,

    /// JSON 行格式日志
    #[arg(long)]
    log_json: bool,
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("--now 不是合法的 RFC3339 时间: {}", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }
    tracing::info!("{} v{}", APP_NAME, VERSION);

    let mut manager = ConfigManager::load_or_default(cli.config.as_ref())
        .context("加载分派配置失败")?;
    if let Some(strategy) = cli.strategy {
        manager.override_strategy(strategy)?;
    }
    tracing::debug!(config = %manager.snapshot()?, "生效配置");

    let now = parse_now(cli.now.as_deref())?;

    let dataset = match (&cli.tickets_csv, &cli.agents_csv) {
        (Some(t), Some(a)) => DatasetLoader::load_csv_pair(t, a)
            .with_context(|| format!("读取 CSV 失败: {} / {}", t.display(), a.display()))?,
        (None, None) => DatasetLoader::load(&cli.dataset)
            .with_context(|| format!("读取数据集失败: {}", cli.dataset.display()))?,
        _ => bail!("--tickets-csv 与 --agents-csv 必须同时提供"),
    };

    let orchestrator = DispatchOrchestrator::new(manager.into_config());
    let result = orchestrator.run(dataset, now)?;

    AssignmentWriter::write(&cli.output, &result.decisions)
        .with_context(|| format!("写出结果失败: {}", cli.output.display()))?;

    let summary = &result.summary;
    println!(
        "[{}] 策略={} 工单={} 已分派={} 未分派={} -> {}",
        summary.run_id,
        summary.strategy,
        summary.total_tickets,
        summary.assigned,
        summary.unassigned,
        cli.output.display()
    );
    for load in &summary.agent_loads {
        println!("  {:<12} {}/{}", load.agent_id, load.current_load, load.max_daily);
    }

    Ok(())
}
