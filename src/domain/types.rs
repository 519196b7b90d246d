// ==========================================
// 货车派单系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 场景类型 (Scenario Kind)
// ==========================================
// 1: 最少车辆 + 最多派单
// 2: 最大利润
// 3: 单车工作日内最多快递
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioKind {
    Scenario1,
    Scenario2,
    Scenario3,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Scenario1,
        ScenarioKind::Scenario2,
        ScenarioKind::Scenario3,
    ];

    /// 场景编号（输出文件 scenario 列）
    pub fn number(&self) -> u8 {
        match self {
            ScenarioKind::Scenario1 => 1,
            ScenarioKind::Scenario2 => 2,
            ScenarioKind::Scenario3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(ScenarioKind::Scenario1),
            2 => Some(ScenarioKind::Scenario2),
            3 => Some(ScenarioKind::Scenario3),
            _ => None,
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            ScenarioKind::Scenario1 => "最少车辆",
            ScenarioKind::Scenario2 => "最大利润",
            ScenarioKind::Scenario3 => "当日快递",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Scenario1 => write!(f, "SCENARIO_1"),
            ScenarioKind::Scenario2 => write!(f, "SCENARIO_2"),
            ScenarioKind::Scenario3 => write!(f, "SCENARIO_3"),
        }
    }
}

// ==========================================
// 零成本货车策略 (Zero Cost Policy)
// ==========================================
// 场景2按 容量/成本 排序, cost=0 时比值无定义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZeroCostPolicy {
    #[default]
    Reject,      // 排序前校验拒绝
    PreferFirst, // 视为比值无穷大,优先使用
}

impl fmt::Display for ZeroCostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroCostPolicy::Reject => write!(f, "REJECT"),
            ZeroCostPolicy::PreferFirst => write!(f, "PREFER_FIRST"),
        }
    }
}

impl std::str::FromStr for ZeroCostPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(ZeroCostPolicy::Reject),
            "prefer_first" | "prefer-first" => Ok(ZeroCostPolicy::PreferFirst),
            other => Err(format!("未知零成本策略: {}", other)),
        }
    }
}
