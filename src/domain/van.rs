// ==========================================
// 货车派单系统 - 货车领域模型
// ==========================================
// 职责: 货车实体 + 单次派单评估内的装载台账
// 红线: 装载量任何时刻不得超过最大体积/最大重量
// ==========================================

use crate::domain::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Van - 货车（不可变）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Van {
    pub van_id: u32,     // 货车ID（按输入顺序从 1 开始, 0 保留给虚拟货车）
    pub max_volume: u64, // 最大体积
    pub max_weight: u64, // 最大重量
    pub cost: u64,       // 出车成本
}

impl Van {
    /// 构造函数
    pub fn new(van_id: u32, max_volume: u64, max_weight: u64, cost: u64) -> Self {
        Self {
            van_id,
            max_volume,
            max_weight,
            cost,
        }
    }

    /// 场景3使用的虚拟货车：容量无限、零成本
    pub fn unbounded() -> Self {
        Self::new(0, u64::MAX, u64::MAX, 0)
    }

    /// 最大“面积” = 最大体积 × 最大重量
    pub fn max_area(&self) -> u128 {
        self.max_volume as u128 * self.max_weight as u128
    }
}

impl fmt::Display for Van {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}\t{}\t{}\t{}",
            self.van_id, self.max_volume, self.max_weight, self.cost
        )
    }
}

// ==========================================
// VanLoad - 装载台账
// ==========================================
// 每次场景评估独立创建,不跨评估复用
// 不变量: current_volume = Σ orders.volume, current_weight = Σ orders.weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VanLoad {
    pub van: Van,
    current_volume: u64,
    current_weight: u64,
    orders: Vec<Order>,
}

impl VanLoad {
    /// 创建空载台账
    pub fn new(van: Van) -> Self {
        Self {
            van,
            current_volume: 0,
            current_weight: 0,
            orders: Vec::new(),
        }
    }

    /// 检查订单能否装入（体积、重量两个约束须同时满足）
    pub fn can_fit(&self, order: &Order) -> bool {
        self.fitted_totals(order).is_some()
    }

    /// 尝试装入订单
    ///
    /// # 返回
    /// - `true`: 已装入,台账累计量已更新
    /// - `false`: 超出容量,台账不变
    pub fn try_assign(&mut self, order: &Order) -> bool {
        match self.fitted_totals(order) {
            Some((volume, weight)) => {
                self.current_volume = volume;
                self.current_weight = weight;
                self.orders.push(*order);
                true
            }
            None => false,
        }
    }

    /// 不做容量检查直接装入（场景3虚拟货车）
    ///
    /// 累计量按 u64 饱和, 不作为截止条件
    pub fn assign_unbounded(&mut self, order: &Order) {
        self.current_volume = self.current_volume.saturating_add(order.volume);
        self.current_weight = self.current_weight.saturating_add(order.weight);
        self.orders.push(*order);
    }

    fn fitted_totals(&self, order: &Order) -> Option<(u64, u64)> {
        let volume = self.current_volume.checked_add(order.volume)?;
        let weight = self.current_weight.checked_add(order.weight)?;
        (volume <= self.van.max_volume && weight <= self.van.max_weight).then_some((volume, weight))
    }

    pub fn current_volume(&self) -> u64 {
        self.current_volume
    }

    pub fn current_weight(&self) -> u64 {
        self.current_weight
    }

    pub fn remaining_volume(&self) -> u64 {
        self.van.max_volume.saturating_sub(self.current_volume)
    }

    pub fn remaining_weight(&self) -> u64 {
        self.van.max_weight.saturating_sub(self.current_weight)
    }

    /// 已装订单（按装入顺序）
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_assign_checks_both_dimensions() {
        let mut load = VanLoad::new(Van::new(1, 10, 10, 5));

        assert!(load.try_assign(&Order::new(1, 4, 4, 0, 0)));
        assert!(load.try_assign(&Order::new(2, 5, 5, 0, 0)));
        // 体积 9+1=10 满足, 重量 9+2=11 不满足
        assert!(!load.try_assign(&Order::new(3, 1, 2, 0, 0)));
        // 体积超限
        assert!(!load.try_assign(&Order::new(4, 2, 1, 0, 0)));

        assert_eq!(load.order_count(), 2);
        assert_eq!(load.current_volume(), 9);
        assert_eq!(load.current_weight(), 9);
        assert_eq!(load.remaining_volume(), 1);
        assert_eq!(load.remaining_weight(), 1);
    }

    #[test]
    fn test_zero_capacity_van_only_accepts_empty_orders() {
        let mut load = VanLoad::new(Van::new(1, 0, 10, 5));

        assert!(!load.try_assign(&Order::new(1, 1, 0, 0, 0)));
        assert!(load.try_assign(&Order::new(2, 0, 3, 0, 0)));
        assert_eq!(load.order_count(), 1);
    }

    #[test]
    fn test_unbounded_van_never_overflows() {
        let mut load = VanLoad::new(Van::unbounded());

        assert!(load.try_assign(&Order::new(1, u64::MAX, 1, 0, 0)));
        // 累加溢出按不可装入处理
        assert!(!load.try_assign(&Order::new(2, 1, 1, 0, 0)));
        assert_eq!(load.order_count(), 1);
    }

    #[test]
    fn test_assign_unbounded_saturates_totals() {
        let mut load = VanLoad::new(Van::unbounded());
        let big = u64::MAX / 2 + 1;

        load.assign_unbounded(&Order::new(1, big, big, 0, 10));
        load.assign_unbounded(&Order::new(2, big, big, 0, 20));
        load.assign_unbounded(&Order::new(3, 1, 1, 0, 30));

        assert_eq!(load.order_count(), 3);
        assert_eq!(load.current_volume(), u64::MAX);
        assert_eq!(load.current_weight(), u64::MAX);
        assert_eq!(load.remaining_volume(), 0);
    }

    #[test]
    fn test_remaining_capacity_never_underflows() {
        let mut load = VanLoad::new(Van::new(1, 1, 1, 0));
        load.assign_unbounded(&Order::new(1, 5, 5, 0, 0));

        assert_eq!(load.current_volume(), 5);
        assert_eq!(load.remaining_volume(), 0);
        assert_eq!(load.remaining_weight(), 0);
    }
}
