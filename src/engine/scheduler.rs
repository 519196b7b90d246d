// ==========================================
// 货车派单系统 - 工作日时间窗调度
// ==========================================
// 适用: 场景3（当日快递最多）
// 职责: 单辆虚拟货车（容量无限、零成本）在工作日时长预算内
//       按时长升序选取最长可行前缀
// ==========================================

use crate::domain::order::Order;
use crate::domain::van::{Van, VanLoad};
use crate::engine::ordering::{DispatchSorter, OrderOrdering};
use crate::engine::packer::PackingOutcome;
use std::time::Instant;
use tracing::{debug, instrument};

/// 工作日时长预算（8 小时, 秒）
pub const WORKDAY_BUDGET_SECS: u64 = 8 * 3600;

// ==========================================
// TimeWindowScheduler - 时间窗调度器
// ==========================================
pub struct TimeWindowScheduler {
    budget_secs: u64,
    sorter: DispatchSorter,
}

impl TimeWindowScheduler {
    /// 构造函数
    ///
    /// # 参数
    /// - `budget_secs`: 累计配送时长上限
    pub fn new(budget_secs: u64) -> Self {
        Self {
            budget_secs,
            sorter: DispatchSorter::new(),
        }
    }

    /// 执行调度
    ///
    /// 规则：
    /// 1) 订单按时长升序（稳定）排序
    /// 2) 累计时长 + 下一单时长 <= 预算 时装入
    /// 3) 第一张超出预算的订单处截止,其后订单不再尝试
    ///
    /// # 返回
    /// PackingOutcome（无订单装入时 vans 为空）
    #[instrument(skip(self, orders), fields(
        orders_count = orders.len(),
        budget_secs = self.budget_secs
    ))]
    pub fn schedule(&self, orders: Vec<Order>) -> PackingOutcome {
        let start = Instant::now();

        let mut sorted = self.sorter.sort_orders(orders, OrderOrdering::DurationAsc);
        let mut load = VanLoad::new(Van::unbounded());

        let mut elapsed_secs: u64 = 0;
        let mut cutoff = sorted.len();
        for (idx, order) in sorted.iter().enumerate() {
            let within_budget = elapsed_secs
                .checked_add(order.duration)
                .is_some_and(|total| total <= self.budget_secs);

            if !within_budget {
                cutoff = idx;
                break;
            }
            load.assign_unbounded(order);
            elapsed_secs += order.duration;
        }

        let remaining_orders = sorted.split_off(cutoff);
        let runtime_micros = start.elapsed().as_micros() as u64;

        debug!(
            dispatched = load.order_count(),
            remaining = remaining_orders.len(),
            elapsed_secs,
            runtime_micros,
            "时间窗调度结束"
        );

        let vans = if load.is_empty() { Vec::new() } else { vec![load] };

        PackingOutcome {
            vans,
            remaining_orders,
            runtime_micros,
        }
    }
}

impl Default for TimeWindowScheduler {
    fn default() -> Self {
        Self::new(WORKDAY_BUDGET_SECS)
    }
}
