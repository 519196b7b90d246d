// ==========================================
// 货车派单系统 - 运行配置
// ==========================================
// 职责: 配置加载（默认值 → JSON 文件 → 环境变量 覆写）
// ==========================================

use crate::domain::types::ZeroCostPolicy;
use crate::engine::scheduler::WORKDAY_BUDGET_SECS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    pub const DATA_DIR: &str = "VAN_DISPATCH_DATA_DIR";
    pub const DATASETS_DIR: &str = "VAN_DISPATCH_DATASETS_DIR";
    pub const OUTPUT_FILE: &str = "VAN_DISPATCH_OUTPUT_FILE";
    pub const WORKDAY_SECS: &str = "VAN_DISPATCH_WORKDAY_SECS";
    pub const ZERO_COST_POLICY: &str = "VAN_DISPATCH_ZERO_COST_POLICY";
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// DispatchConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// 数据集根目录（每个子目录一个数据集）
    pub datasets_dir: PathBuf,

    /// 批量结果输出文件名（相对 datasets_dir）
    pub output_file: String,

    /// 订单文件名
    pub orders_file: String,

    /// 货车文件名
    pub vans_file: String,

    /// 场景3工作日时长预算（秒）
    pub workday_budget_secs: u64,

    /// 场景2零成本货车处理策略
    pub zero_cost_policy: ZeroCostPolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            datasets_dir: default_datasets_dir(),
            output_file: "results.csv".to_string(),
            orders_file: "orders.txt".to_string(),
            vans_file: "vans.txt".to_string(),
            workday_budget_secs: WORKDAY_BUDGET_SECS,
            zero_cost_policy: ZeroCostPolicy::default(),
        }
    }
}

impl DispatchConfig {
    /// 加载配置
    ///
    /// # 参数
    /// - `path`: JSON 配置文件（None 时只用默认值 + 环境变量）
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;

        debug!(
            datasets_dir = %config.datasets_dir.display(),
            workday_budget_secs = config.workday_budget_secs,
            zero_cost_policy = %config.zero_cost_policy,
            "配置加载完成"
        );
        Ok(config)
    }

    /// 从 JSON 文件读取（缺失字段取默认值）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// 环境变量覆写
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(dir) = get(env_keys::DATASETS_DIR) {
            self.datasets_dir = PathBuf::from(dir);
        }
        if let Some(file) = get(env_keys::OUTPUT_FILE) {
            self.output_file = file;
        }
        if let Some(secs) = get(env_keys::WORKDAY_SECS) {
            self.workday_budget_secs = secs.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: env_keys::WORKDAY_SECS.to_string(),
                    value: secs.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(policy) = get(env_keys::ZERO_COST_POLICY) {
            self.zero_cost_policy =
                policy.parse().map_err(|message| ConfigError::InvalidValue {
                    key: env_keys::ZERO_COST_POLICY.to_string(),
                    value: policy.clone(),
                    message,
                })?;
        }
        Ok(())
    }

    /// 配置校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workday_budget_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "workday_budget_secs".to_string(),
                value: "0".to_string(),
                message: "工作日时长预算必须大于 0".to_string(),
            });
        }
        for (key, value) in [
            ("output_file", &self.output_file),
            ("orders_file", &self.orders_file),
            ("vans_file", &self.vans_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                    message: "文件名不能为空".to_string(),
                });
            }
        }
        Ok(())
    }

    /// 批量结果输出路径
    pub fn output_path(&self) -> PathBuf {
        self.datasets_dir.join(&self.output_file)
    }
}

/// 默认数据集目录
///
/// 顺序: VAN_DISPATCH_DATA_DIR → 用户数据目录/van-dispatch/datasets → ./datasets
pub fn default_datasets_dir() -> PathBuf {
    if let Ok(path) = std::env::var(env_keys::DATA_DIR) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join("datasets");
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("van-dispatch").join("datasets"),
        None => PathBuf::from("./datasets"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = DispatchConfig::default();
        assert_eq!(config.workday_budget_secs, 28_800);
        assert_eq!(config.zero_cost_policy, ZeroCostPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"datasets_dir": "/tmp/ds", "workday_budget_secs": 3600, "zero_cost_policy": "PREFER_FIRST"}}"#
        )
        .unwrap();

        let config = DispatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.datasets_dir, PathBuf::from("/tmp/ds"));
        assert_eq!(config.workday_budget_secs, 3600);
        assert_eq!(config.zero_cost_policy, ZeroCostPolicy::PreferFirst);
        assert_eq!(config.orders_file, "orders.txt");
        assert_eq!(config.output_path(), PathBuf::from("/tmp/ds/results.csv"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = DispatchConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (env_keys::WORKDAY_SECS, "100"),
            (env_keys::ZERO_COST_POLICY, "prefer_first"),
            (env_keys::OUTPUT_FILE, " out.csv "),
        ]);

        let mut config = DispatchConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.workday_budget_secs, 100);
        assert_eq!(config.zero_cost_policy, ZeroCostPolicy::PreferFirst);
        assert_eq!(config.output_file, "out.csv");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut config = DispatchConfig::default();
        let err = config
            .apply_overrides(|key| (key == env_keys::WORKDAY_SECS).then(|| "eight hours".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_budget_is_invalid() {
        let config = DispatchConfig {
            workday_budget_secs: 0,
            ..DispatchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
