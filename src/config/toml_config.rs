use crate::config::{DepthPolicy, RunSettings, StrategyKind};
use crate::utils::error::{Result, SumError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sum: SumConfig,
    pub input: Option<InputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SumConfig {
    pub strategy: Option<StrategyKind>,
    pub max_depth: Option<usize>,
    pub depth_policy: Option<DepthPolicy>,
    pub nesting_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SumError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SumError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_DEPTH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SumError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 轉成執行設定；未指定深度政策時，有宣告深度就採用宣告值
    pub fn settings(&self) -> RunSettings {
        let depth_policy = self.sum.depth_policy.unwrap_or(if self.sum.max_depth.is_some() {
            DepthPolicy::Declared
        } else {
            DepthPolicy::Auto
        });

        RunSettings {
            strategy: self.sum.strategy.unwrap_or_default(),
            max_depth: self.sum.max_depth,
            depth_policy,
            nesting_limit: self.sum.nesting_limit,
            input_file: self.input.as_ref().and_then(|i| i.file.clone()),
            monitor: self.monitoring_enabled(),
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}
