// ==========================================
// 货车派单系统 - 配置层
// ==========================================
// 职责: 运行配置管理, 支持 文件/环境变量 覆写
// 存储: JSON 配置文件（可选）
// ==========================================

pub mod dispatch_config;

// 重导出核心配置
pub use dispatch_config::{default_datasets_dir, env_keys, ConfigError, DispatchConfig};
