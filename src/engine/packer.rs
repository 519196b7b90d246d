// ==========================================
// 货车派单系统 - 贪心装车引擎
// ==========================================
// 适用: 场景1（最少车辆）/ 场景2（最大利润）
// 红线: 容量约束优先于订单顺序,体积与重量须同时满足
// ==========================================
// 职责: 排序后逐车单遍装填
// 输入: 订单列表 + 货车列表 + (订单排序, 货车排序)
// 输出: 已装车货车台账 + 剩余订单
// ==========================================

use crate::domain::order::Order;
use crate::domain::van::{Van, VanLoad};
use crate::engine::ordering::{DispatchSorter, OrderOrdering, VanOrdering};
use std::time::Instant;
use tracing::{debug, instrument};

// ==========================================
// PackingOutcome - 装车结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingOutcome {
    pub vans: Vec<VanLoad>,          // 至少装入1单的货车（按使用顺序）
    pub remaining_orders: Vec<Order>, // 未能装车的订单（保持排序后顺序）
    pub runtime_micros: u64,          // 排序+装车耗时（微秒）
}

// ==========================================
// GreedyPacker - 贪心装车引擎
// ==========================================
pub struct GreedyPacker {
    sorter: DispatchSorter,
}

impl GreedyPacker {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 GreedyPacker 实例
    pub fn new() -> Self {
        Self {
            sorter: DispatchSorter::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行装车
    ///
    /// 规则：
    /// 1) 订单按 order_ordering 排序,货车按 van_ordering 排序
    /// 2) 按顺序取每辆车,从头扫描当前订单池,能装则装（移出订单池）并继续扫描,
    ///    装不下的订单跳过但留在池中,由后续货车再尝试
    /// 3) 所有货车都已尝试 或 订单池为空 时停止
    /// 4) 池中剩余订单即 remaining_orders
    ///
    /// 注意: 这不是严格的 FFD,一辆车在一遍扫描中可装入多单
    ///
    /// # 参数
    /// - `orders`: 订单（评估独立副本）
    /// - `vans`: 货车（评估独立副本）
    /// - `order_ordering` / `van_ordering`: 策略对应的排序规则
    ///
    /// # 返回
    /// PackingOutcome（仅保留装入至少1单的货车）
    #[instrument(skip(self, orders, vans), fields(
        orders_count = orders.len(),
        vans_count = vans.len()
    ))]
    pub fn pack(
        &self,
        orders: Vec<Order>,
        vans: Vec<Van>,
        order_ordering: OrderOrdering,
        van_ordering: VanOrdering,
    ) -> PackingOutcome {
        let start = Instant::now();

        // 1. 排序
        let mut pool = self.sorter.sort_orders(orders, order_ordering);
        let vans = self.sorter.sort_vans(vans, van_ordering);

        // 2. 逐车单遍装填
        let mut used_vans = Vec::new();
        for van in vans {
            if pool.is_empty() {
                break;
            }

            let mut load = VanLoad::new(van);
            pool.retain(|order| !load.try_assign(order));

            debug!(
                van_id = van.van_id,
                assigned = load.order_count(),
                pool_left = pool.len(),
                "货车装填完成"
            );

            if !load.is_empty() {
                used_vans.push(load);
            }
        }

        let runtime_micros = start.elapsed().as_micros() as u64;

        debug!(
            vans_used = used_vans.len(),
            remaining = pool.len(),
            runtime_micros,
            "装车结束"
        );

        PackingOutcome {
            vans: used_vans,
            remaining_orders: pool,
            runtime_micros,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GreedyPacker {
    fn default() -> Self {
        Self::new()
    }
}
