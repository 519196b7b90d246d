// ==========================================
// 货车派单系统 - 排序规则
// ==========================================
// 职责: 订单/货车的比较函数（全序）
// 输入: 两个订单 或 两个货车
// 输出: Ordering::Less 表示 a 排在 b 之前
// ==========================================
// 说明: 面积/时长/比值规则没有显式 tie-break,
//       依赖稳定排序保持输入相对顺序
// ==========================================

use crate::domain::order::Order;
use crate::domain::van::Van;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// OrderOrdering - 订单排序规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderOrdering {
    VolumeAsc,   // 体积升序, 重量升序
    VolumeDesc,  // 体积降序, 重量降序
    WeightAsc,   // 重量升序, 体积升序
    WeightDesc,  // 重量降序, 体积降序
    AreaAsc,     // 体积×重量 升序
    AreaDesc,    // 体积×重量 降序
    DurationAsc, // 时长升序（场景3）
}

impl OrderOrdering {
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderOrdering::VolumeAsc => a.volume.cmp(&b.volume).then(a.weight.cmp(&b.weight)),
            OrderOrdering::VolumeDesc => b.volume.cmp(&a.volume).then(b.weight.cmp(&a.weight)),
            OrderOrdering::WeightAsc => a.weight.cmp(&b.weight).then(a.volume.cmp(&b.volume)),
            OrderOrdering::WeightDesc => b.weight.cmp(&a.weight).then(b.volume.cmp(&a.volume)),
            OrderOrdering::AreaAsc => a.area().cmp(&b.area()),
            OrderOrdering::AreaDesc => b.area().cmp(&a.area()),
            OrderOrdering::DurationAsc => a.duration.cmp(&b.duration),
        }
    }
}

// ==========================================
// VanOrdering - 货车排序规则（全部降序）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VanOrdering {
    Volume,         // 最大体积, 最大重量
    Weight,         // 最大重量, 最大体积
    Area,           // 最大体积×最大重量
    VolumeOverCost, // 最大体积/成本
    WeightOverCost, // 最大重量/成本
    AreaOverCost,   // 最大体积×最大重量/成本
}

impl VanOrdering {
    pub fn compare(&self, a: &Van, b: &Van) -> Ordering {
        match self {
            VanOrdering::Volume => b
                .max_volume
                .cmp(&a.max_volume)
                .then(b.max_weight.cmp(&a.max_weight)),
            VanOrdering::Weight => b
                .max_weight
                .cmp(&a.max_weight)
                .then(b.max_volume.cmp(&a.max_volume)),
            VanOrdering::Area => b.max_area().cmp(&a.max_area()),
            VanOrdering::VolumeOverCost => {
                cost_ratio(b.max_volume as f64, b.cost).total_cmp(&cost_ratio(a.max_volume as f64, a.cost))
            }
            VanOrdering::WeightOverCost => {
                cost_ratio(b.max_weight as f64, b.cost).total_cmp(&cost_ratio(a.max_weight as f64, a.cost))
            }
            VanOrdering::AreaOverCost => {
                cost_ratio(b.max_area() as f64, b.cost).total_cmp(&cost_ratio(a.max_area() as f64, a.cost))
            }
        }
    }

    /// 是否按成本归一化（场景2）
    pub fn is_cost_normalized(&self) -> bool {
        matches!(
            self,
            VanOrdering::VolumeOverCost | VanOrdering::WeightOverCost | VanOrdering::AreaOverCost
        )
    }
}

/// 容量/成本 比值
///
/// cost=0 仅在 ZeroCostPolicy::PreferFirst 下可达,视为无穷大（最优先）
fn cost_ratio(capacity: f64, cost: u64) -> f64 {
    if cost == 0 {
        return f64::INFINITY;
    }
    capacity / cost as f64
}

// ==========================================
// DispatchSorter - 排序器
// ==========================================
pub struct DispatchSorter {
    // 无状态,不需要注入依赖
}

impl DispatchSorter {
    pub fn new() -> Self {
        Self {}
    }

    /// 按规则排序订单（稳定排序）
    pub fn sort_orders(&self, mut orders: Vec<Order>, ordering: OrderOrdering) -> Vec<Order> {
        orders.sort_by(|a, b| ordering.compare(a, b));
        orders
    }

    /// 按规则排序货车（稳定排序）
    pub fn sort_vans(&self, mut vans: Vec<Van>, ordering: VanOrdering) -> Vec<Van> {
        vans.sort_by(|a, b| ordering.compare(a, b));
        vans
    }
}

impl Default for DispatchSorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, volume: u64, weight: u64, duration: u64) -> Order {
        Order::new(id, volume, weight, 0, duration)
    }

    fn ids(orders: &[Order]) -> Vec<u32> {
        orders.iter().map(|o| o.order_id).collect()
    }

    fn van_ids(vans: &[Van]) -> Vec<u32> {
        vans.iter().map(|v| v.van_id).collect()
    }

    // ==========================================
    // 订单排序
    // ==========================================

    #[test]
    fn test_volume_orderings_tie_break_on_weight() {
        let sorter = DispatchSorter::new();
        let orders = vec![order(1, 5, 9, 0), order(2, 5, 1, 0), order(3, 2, 7, 0)];

        let asc = sorter.sort_orders(orders.clone(), OrderOrdering::VolumeAsc);
        assert_eq!(ids(&asc), vec![3, 2, 1]);

        let desc = sorter.sort_orders(orders, OrderOrdering::VolumeDesc);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_weight_orderings_tie_break_on_volume() {
        let sorter = DispatchSorter::new();
        let orders = vec![order(1, 8, 3, 0), order(2, 2, 3, 0), order(3, 1, 9, 0)];

        let asc = sorter.sort_orders(orders.clone(), OrderOrdering::WeightAsc);
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = sorter.sort_orders(orders, OrderOrdering::WeightDesc);
        assert_eq!(ids(&desc), vec![3, 1, 2]);
    }

    #[test]
    fn test_area_and_duration_keep_input_order_on_ties() {
        let sorter = DispatchSorter::new();
        // 面积均为 12
        let orders = vec![order(1, 3, 4, 50), order(2, 4, 3, 10), order(3, 2, 6, 10), order(4, 1, 1, 99)];

        let asc = sorter.sort_orders(orders.clone(), OrderOrdering::AreaAsc);
        assert_eq!(ids(&asc), vec![4, 1, 2, 3]);

        let desc = sorter.sort_orders(orders.clone(), OrderOrdering::AreaDesc);
        assert_eq!(ids(&desc), vec![1, 2, 3, 4]);

        let by_duration = sorter.sort_orders(orders, OrderOrdering::DurationAsc);
        assert_eq!(ids(&by_duration), vec![2, 3, 1, 4]);
    }

    // ==========================================
    // 货车排序
    // ==========================================

    #[test]
    fn test_van_capacity_orderings_descending() {
        let sorter = DispatchSorter::new();
        let vans = vec![Van::new(1, 10, 5, 1), Van::new(2, 10, 8, 1), Van::new(3, 20, 1, 1)];

        let by_volume = sorter.sort_vans(vans.clone(), VanOrdering::Volume);
        assert_eq!(van_ids(&by_volume), vec![3, 2, 1]);

        let by_weight = sorter.sort_vans(vans.clone(), VanOrdering::Weight);
        assert_eq!(van_ids(&by_weight), vec![2, 1, 3]);

        let by_area = sorter.sort_vans(vans, VanOrdering::Area);
        assert_eq!(van_ids(&by_area), vec![2, 1, 3]);
    }

    #[test]
    fn test_van_cost_ratio_orderings() {
        let sorter = DispatchSorter::new();
        // volume/cost: 5, 4, 10 ; weight/cost: 1, 2, 1 ; area/cost: 10, 40, 10
        let vans = vec![Van::new(1, 10, 2, 2), Van::new(2, 20, 10, 5), Van::new(3, 10, 1, 1)];

        let by_volume = sorter.sort_vans(vans.clone(), VanOrdering::VolumeOverCost);
        assert_eq!(van_ids(&by_volume), vec![3, 1, 2]);

        let by_weight = sorter.sort_vans(vans.clone(), VanOrdering::WeightOverCost);
        assert_eq!(van_ids(&by_weight), vec![2, 1, 3]);

        let by_area = sorter.sort_vans(vans, VanOrdering::AreaOverCost);
        assert_eq!(van_ids(&by_area), vec![2, 1, 3]);
    }

    #[test]
    fn test_zero_cost_van_sorts_first() {
        let sorter = DispatchSorter::new();
        let vans = vec![Van::new(1, 100, 100, 1), Van::new(2, 0, 0, 0)];

        let sorted = sorter.sort_vans(vans, VanOrdering::AreaOverCost);
        assert_eq!(van_ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_cost_normalized_flag() {
        assert!(!VanOrdering::Volume.is_cost_normalized());
        assert!(VanOrdering::AreaOverCost.is_cost_normalized());
    }
}
