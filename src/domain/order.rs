// ==========================================
// 货车派单系统 - 订单领域模型
// ==========================================
// 职责: 订单实体（体积/重量/收益/时长）
// 红线: 订单创建后不可变,引擎只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Order - 配送订单
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32, // 订单ID（按输入顺序从 1 开始）
    pub volume: u64,   // 体积
    pub weight: u64,   // 重量
    pub reward: u64,   // 收益
    pub duration: u64, // 配送时长（秒）
}

impl Order {
    /// 构造函数
    ///
    /// # 参数
    /// - `order_id`: 订单ID（由 IdSequence 分配）
    /// - `volume` / `weight` / `reward` / `duration`: 订单属性
    pub fn new(order_id: u32, volume: u64, weight: u64, reward: u64, duration: u64) -> Self {
        Self {
            order_id,
            volume,
            weight,
            reward,
            duration,
        }
    }

    /// “面积” = 体积 × 重量（u128 避免溢出）
    pub fn area(&self) -> u128 {
        self.volume as u128 * self.weight as u128
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}\t{}\t{}\t{}\t{}",
            self.order_id, self.volume, self.weight, self.reward, self.duration
        )
    }
}
