// ==========================================
// 货车派单系统 - 策略定义
// ==========================================
// 用途：
// - 每个场景暴露封闭的策略枚举,一对一映射到 (订单排序, 货车排序);
// - 映射表对外稳定,批量结果按 strategy 下标跨版本对比。

use crate::engine::ordering::{OrderOrdering, VanOrdering};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 场景1策略 - 最少车辆
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario1Strategy {
    #[default]
    VolumeAsc,
    VolumeDesc,
    WeightAsc,
    WeightDesc,
    AreaAsc,
    AreaDesc,
}

// ==========================================
// 场景2策略 - 最大利润（货车按容量/成本排序）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario2Strategy {
    #[default]
    VolumeAsc,
    VolumeDesc,
    WeightAsc,
    WeightDesc,
    AreaAsc,
    AreaDesc,
}

impl Scenario1Strategy {
    pub const ALL: [Scenario1Strategy; 6] = [
        Scenario1Strategy::VolumeAsc,
        Scenario1Strategy::VolumeDesc,
        Scenario1Strategy::WeightAsc,
        Scenario1Strategy::WeightDesc,
        Scenario1Strategy::AreaAsc,
        Scenario1Strategy::AreaDesc,
    ];

    /// 策略下标（声明顺序, 从 0 开始）
    pub fn index(&self) -> usize {
        match self {
            Scenario1Strategy::VolumeAsc => 0,
            Scenario1Strategy::VolumeDesc => 1,
            Scenario1Strategy::WeightAsc => 2,
            Scenario1Strategy::WeightDesc => 3,
            Scenario1Strategy::AreaAsc => 4,
            Scenario1Strategy::AreaDesc => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        strategy_name(self.index())
    }

    /// 排序规则配对
    pub fn orderings(&self) -> (OrderOrdering, VanOrdering) {
        match self {
            Scenario1Strategy::VolumeAsc => (OrderOrdering::VolumeAsc, VanOrdering::Volume),
            Scenario1Strategy::VolumeDesc => (OrderOrdering::VolumeDesc, VanOrdering::Volume),
            Scenario1Strategy::WeightAsc => (OrderOrdering::WeightAsc, VanOrdering::Weight),
            Scenario1Strategy::WeightDesc => (OrderOrdering::WeightDesc, VanOrdering::Weight),
            Scenario1Strategy::AreaAsc => (OrderOrdering::AreaAsc, VanOrdering::Area),
            Scenario1Strategy::AreaDesc => (OrderOrdering::AreaDesc, VanOrdering::Area),
        }
    }
}

impl Scenario2Strategy {
    pub const ALL: [Scenario2Strategy; 6] = [
        Scenario2Strategy::VolumeAsc,
        Scenario2Strategy::VolumeDesc,
        Scenario2Strategy::WeightAsc,
        Scenario2Strategy::WeightDesc,
        Scenario2Strategy::AreaAsc,
        Scenario2Strategy::AreaDesc,
    ];

    pub fn index(&self) -> usize {
        match self {
            Scenario2Strategy::VolumeAsc => 0,
            Scenario2Strategy::VolumeDesc => 1,
            Scenario2Strategy::WeightAsc => 2,
            Scenario2Strategy::WeightDesc => 3,
            Scenario2Strategy::AreaAsc => 4,
            Scenario2Strategy::AreaDesc => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        strategy_name(self.index())
    }

    /// 排序规则配对（面积/成本 使用 体积×重量, 不是 体积²）
    pub fn orderings(&self) -> (OrderOrdering, VanOrdering) {
        match self {
            Scenario2Strategy::VolumeAsc => (OrderOrdering::VolumeAsc, VanOrdering::VolumeOverCost),
            Scenario2Strategy::VolumeDesc => (OrderOrdering::VolumeDesc, VanOrdering::VolumeOverCost),
            Scenario2Strategy::WeightAsc => (OrderOrdering::WeightAsc, VanOrdering::WeightOverCost),
            Scenario2Strategy::WeightDesc => (OrderOrdering::WeightDesc, VanOrdering::WeightOverCost),
            Scenario2Strategy::AreaAsc => (OrderOrdering::AreaAsc, VanOrdering::AreaOverCost),
            Scenario2Strategy::AreaDesc => (OrderOrdering::AreaDesc, VanOrdering::AreaOverCost),
        }
    }
}

fn strategy_name(index: usize) -> &'static str {
    const NAMES: [&str; 6] = [
        "volume_asc",
        "volume_desc",
        "weight_asc",
        "weight_desc",
        "area_asc",
        "area_desc",
    ];
    NAMES[index]
}

fn parse_strategy_index(s: &str) -> Result<usize, String> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
        "volume_asc" => Ok(0),
        "volume_desc" => Ok(1),
        "weight_asc" => Ok(2),
        "weight_desc" => Ok(3),
        "area_asc" => Ok(4),
        "area_desc" => Ok(5),
        other => Err(format!("未知策略类型: {}", other)),
    }
}

impl std::str::FromStr for Scenario1Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strategy_index(s).map(|i| Scenario1Strategy::ALL[i])
    }
}

impl std::str::FromStr for Scenario2Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strategy_index(s).map(|i| Scenario2Strategy::ALL[i])
    }
}

impl fmt::Display for Scenario1Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl fmt::Display for Scenario2Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, strategy) in Scenario1Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), i);
        }
        for (i, strategy) in Scenario2Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), i);
        }
    }

    #[test]
    fn test_pairing_table() {
        assert_eq!(
            Scenario1Strategy::WeightDesc.orderings(),
            (OrderOrdering::WeightDesc, VanOrdering::Weight)
        );
        assert_eq!(
            Scenario1Strategy::AreaAsc.orderings(),
            (OrderOrdering::AreaAsc, VanOrdering::Area)
        );
        assert_eq!(
            Scenario2Strategy::VolumeDesc.orderings(),
            (OrderOrdering::VolumeDesc, VanOrdering::VolumeOverCost)
        );
        assert_eq!(
            Scenario2Strategy::AreaDesc.orderings(),
            (OrderOrdering::AreaDesc, VanOrdering::AreaOverCost)
        );

        // 场景2 货车规则全部按成本归一化
        for strategy in Scenario2Strategy::ALL {
            assert!(strategy.orderings().1.is_cost_normalized());
        }
        for strategy in Scenario1Strategy::ALL {
            assert!(!strategy.orderings().1.is_cost_normalized());
        }
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("VOLUME_ASC".parse::<Scenario1Strategy>(), Ok(Scenario1Strategy::VolumeAsc));
        assert_eq!("area-desc".parse::<Scenario2Strategy>(), Ok(Scenario2Strategy::AreaDesc));
        assert!("duration".parse::<Scenario1Strategy>().is_err());
        assert_eq!(Scenario2Strategy::WeightAsc.to_string(), "WEIGHT_ASC");
    }

    #[test]
    fn test_default_is_volume_asc() {
        assert_eq!(Scenario1Strategy::default(), Scenario1Strategy::VolumeAsc);
        assert_eq!(Scenario2Strategy::default(), Scenario2Strategy::VolumeAsc);
    }
}
