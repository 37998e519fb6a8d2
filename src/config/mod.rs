pub mod cli;
pub mod toml_config;

use crate::core::descent::RecursiveDescent;
use crate::core::flatten::BoundedFlatten;
#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Bounded,
    #[default]
    Recursive,
    /// 兩種策略都跑並比對結果
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DepthPolicy {
    /// 使用呼叫端宣告的深度，不足時回報型別不符
    Declared,
    /// 忽略宣告值，自動量測實際深度
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// 合併設定檔與命令列之後的最終執行設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    pub strategy: StrategyKind,
    pub max_depth: Option<usize>,
    pub depth_policy: DepthPolicy,
    pub nesting_limit: Option<usize>,
    pub input_file: Option<String>,
    pub monitor: bool,
}

impl RunSettings {
    /// 攤平策略實際使用的深度；`None` 表示自動量測
    pub fn bounded_depth(&self) -> Option<usize> {
        match self.depth_policy {
            DepthPolicy::Declared => self.max_depth,
            DepthPolicy::Auto => None,
        }
    }

    pub fn bounded(&self) -> BoundedFlatten {
        BoundedFlatten {
            max_depth: self.bounded_depth(),
        }
    }

    pub fn recursive(&self) -> RecursiveDescent {
        let strategy = RecursiveDescent::new();
        match self.nesting_limit {
            Some(limit) => strategy.with_nesting_limit(limit),
            None => strategy,
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        if let Some(max_depth) = self.max_depth {
            validate_positive_number("max_depth", max_depth, 1)?;
        }
        if let Some(limit) = self.nesting_limit {
            validate_positive_number("nesting_limit", limit, 1)?;
        }
        if self.depth_policy == DepthPolicy::Declared && self.strategy != StrategyKind::Recursive {
            validate_required_field("max_depth", &self.max_depth)?;
        }
        if let Some(file) = &self.input_file {
            validate_path("input.file", file)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "nested-sum")]
#[command(about = "Sum every number in an arbitrarily nested JSON array")]
pub struct CliConfig {
    /// JSON array to sum; reads --file or stdin when omitted
    pub input: Option<String>,

    /// Read the JSON array from a file
    #[arg(short, long)]
    pub file: Option<String>,

    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Declared maximum nesting depth for the bounded strategy
    #[arg(long)]
    pub max_depth: Option<usize>,

    #[arg(long, value_enum)]
    pub depth_policy: Option<DepthPolicy>,

    /// Reject inputs nested deeper than this (recursive strategy)
    #[arg(long)]
    pub nesting_limit: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print leaf/sequence counts and depth as JSON after the sum
    #[arg(long)]
    pub stats: bool,

    #[arg(long, help = "Log elapsed time per phase")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<RunSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        let mut settings = file_config.settings();
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        match self.depth_policy {
            Some(policy) => settings.depth_policy = policy,
            None if self.max_depth.is_some() => settings.depth_policy = DepthPolicy::Declared,
            None => {}
        }
        if let Some(limit) = self.nesting_limit {
            settings.nesting_limit = Some(limit);
        }
        if self.file.is_some() {
            settings.input_file = self.file.clone();
        }
        settings.monitor |= self.monitor;

        settings.validate()?;
        Ok(settings)
    }
}
