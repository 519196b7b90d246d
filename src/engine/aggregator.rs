// ==========================================
// 货车派单系统 - 结果汇总
// ==========================================
// 职责: 由 (已用货车台账, 剩余订单) 计算派单指标
// 红线: 结果为一次性投影,构造后不再修改
// ==========================================
// 口径: 只统计装入至少1单的货车（vans_used / cost）
// ==========================================

use crate::domain::order::Order;
use crate::domain::van::VanLoad;
use crate::engine::packer::PackingOutcome;
use serde::{Deserialize, Serialize};

// ==========================================
// ScenarioResult - 场景结果
// ==========================================
// 合计量在 u128 中累加, 写入 u64 字段时封顶为 u64::MAX;
// profit 由未封顶的合计计算, 再封顶到 i64 范围
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub remaining_orders: Vec<Order>,
    pub vans: Vec<VanLoad>,
    pub orders_dispatched: u64,
    pub delivery_time_total: u64, // 封顶 u64::MAX
    pub efficiency: f64,          // 派单率 ∈ [0, 1]
    pub cost: u64,                // 封顶 u64::MAX
    pub reward: u64,              // 封顶 u64::MAX
    pub profit: i64,              // reward - cost
    pub runtime_micros: u64,
}

impl ScenarioResult {
    /// 汇总结果
    ///
    /// # 参数
    /// - `remaining_orders`: 未派订单
    /// - `vans`: 货车台账（空车会被剔除）
    /// - `runtime_micros`: 算法耗时
    pub fn new(remaining_orders: Vec<Order>, vans: Vec<VanLoad>, runtime_micros: u64) -> Self {
        let vans: Vec<VanLoad> = vans.into_iter().filter(|load| !load.is_empty()).collect();

        let mut orders_dispatched: u64 = 0;
        let mut delivery_time_total: u128 = 0;
        let mut cost: u128 = 0;
        let mut reward: u128 = 0;

        for load in &vans {
            orders_dispatched += load.order_count() as u64;
            cost += load.van.cost as u128;
            for order in load.orders() {
                delivery_time_total += order.duration as u128;
                reward += order.reward as u128;
            }
        }

        let total = orders_dispatched + remaining_orders.len() as u64;
        let efficiency = if total == 0 {
            0.0
        } else {
            orders_dispatched as f64 / total as f64
        };

        let profit = reward as i128 - cost as i128;
        let profit = profit.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        let delivery_time_total = cap_u64(delivery_time_total);
        let cost = cap_u64(cost);
        let reward = cap_u64(reward);

        Self {
            remaining_orders,
            vans,
            orders_dispatched,
            delivery_time_total,
            efficiency,
            cost,
            reward,
            profit,
            runtime_micros,
        }
    }

    pub fn from_outcome(outcome: PackingOutcome) -> Self {
        Self::new(outcome.remaining_orders, outcome.vans, outcome.runtime_micros)
    }

    pub fn vans_used(&self) -> usize {
        self.vans.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining_orders.len()
    }

    /// 平均配送时长（无派单时为 0）
    pub fn average_delivery_time(&self) -> f64 {
        if self.orders_dispatched == 0 {
            return 0.0;
        }
        self.delivery_time_total as f64 / self.orders_dispatched as f64
    }

    /// CSV 扁平记录（字段顺序固定）
    pub fn csv_record(&self) -> ScenarioCsvRecord {
        ScenarioCsvRecord {
            vans_used: self.vans_used() as u64,
            orders_dispatched: self.orders_dispatched,
            remaining_orders: self.remaining_count() as u64,
            efficiency: self.efficiency,
            avg_delivery_time: self.average_delivery_time(),
            cost: self.cost,
            reward: self.reward,
            profit: self.profit,
            runtime_us: self.runtime_micros,
        }
    }

    /// 单行 CSV（不含表头, 以换行结尾）
    pub fn to_csv_line(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(self.csv_record())?;
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn cap_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

// ==========================================
// ScenarioCsvRecord - CSV 投影
// ==========================================
// 字段顺序: vans_used, orders_dispatched, remaining_orders, efficiency,
//          avg_delivery_time, cost, reward, profit, runtime_us
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCsvRecord {
    pub vans_used: u64,
    pub orders_dispatched: u64,
    pub remaining_orders: u64,
    pub efficiency: f64,
    pub avg_delivery_time: f64,
    pub cost: u64,
    pub reward: u64,
    pub profit: i64,
    pub runtime_us: u64,
}
