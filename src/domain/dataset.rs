// ==========================================
// 货车派单系统 - 数据集领域模型
// ==========================================
// 职责: 订单/货车两组输入序列 + 显式ID序列生成器
// ==========================================

use crate::domain::order::Order;
use crate::domain::van::Van;
use serde::{Deserialize, Serialize};

// ==========================================
// IdSequence - 顺序ID生成器
// ==========================================
// 由加载器/生成器显式持有,每次加载前 reset
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// 取下一个ID（从 1 开始）
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Dataset - 数据集
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub orders: Vec<Order>,
    pub vans: Vec<Van>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, orders: Vec<Order>, vans: Vec<Van>) -> Self {
        Self {
            name: name.into(),
            orders,
            vans,
        }
    }

    /// 按位置分配ID构建数据集（测试/生成器使用）
    ///
    /// # 参数
    /// - `orders`: (volume, weight, reward, duration)
    /// - `vans`: (max_volume, max_weight, cost)
    pub fn from_tuples(
        name: impl Into<String>,
        orders: &[(u64, u64, u64, u64)],
        vans: &[(u64, u64, u64)],
    ) -> Self {
        let mut ids = IdSequence::new();
        let orders = orders
            .iter()
            .map(|&(v, w, r, d)| Order::new(ids.next_id(), v, w, r, d))
            .collect();

        ids.reset();
        let vans = vans
            .iter()
            .map(|&(v, w, c)| Van::new(ids.next_id(), v, w, c))
            .collect();

        Self::new(name, orders, vans)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.vans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_restarts_after_reset() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        ids.reset();
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn test_from_tuples_assigns_ids_per_sequence() {
        let dataset = Dataset::from_tuples("d", &[(1, 1, 1, 1), (2, 2, 2, 2)], &[(5, 5, 5)]);

        assert_eq!(dataset.orders[0].order_id, 1);
        assert_eq!(dataset.orders[1].order_id, 2);
        assert_eq!(dataset.vans[0].van_id, 1);
    }
}
