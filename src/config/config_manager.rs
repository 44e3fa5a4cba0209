// ==========================================
// 工单分派系统 - 配置管理器
// ==========================================
// 职责: 配置加载、命令行覆写、校验
// 存储: JSON 文件 (缺省时全部取默认值)
// ==========================================

use crate::config::dispatch_config::DispatchConfig;
use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::strategy::ScoringStrategy;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: DispatchConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self {
            config: DispatchConfig::default(),
        }
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 已校验的配置
    /// - Err(ConfigError): 文件缺失/解析失败/配置值非法
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let manager = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            strategy = %manager.config.strategy,
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 从 JSON 文本加载配置
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: DispatchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(Self { config })
    }

    /// 可选文件加载: 未提供路径时使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                debug!("未指定配置文件, 使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 覆写评分策略（命令行优先于配置文件）
    pub fn override_strategy(&mut self, strategy: ScoringStrategy) -> ConfigResult<()> {
        if self.config.strategy != strategy {
            info!(from = %self.config.strategy, to = %strategy, "评分策略被覆写");
        }
        self.config.strategy = strategy;
        self.config.validate()
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn into_config(self) -> DispatchConfig {
        self.config
    }

    /// 当前配置快照（JSON）
    ///
    /// 用于在运行日志中记录本次分派实际使用的参数
    pub fn snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
