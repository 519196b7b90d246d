// ==========================================
// 货车派单系统 - 场景编排器
// ==========================================
// 用途: 策略 → 排序规则 → 装车/调度 → 结果汇总
// 红线: 每次调用使用数据集的独立副本, 货车状态不跨调用保留
// ==========================================

use crate::config::DispatchConfig;
use crate::domain::dataset::Dataset;
use crate::domain::types::{ScenarioKind, ZeroCostPolicy};
use crate::engine::aggregator::ScenarioResult;
use crate::engine::error::DispatchResult;
use crate::engine::packer::GreedyPacker;
use crate::engine::scheduler::{TimeWindowScheduler, WORKDAY_BUDGET_SECS};
use crate::engine::strategy::{Scenario1Strategy, Scenario2Strategy};
use crate::engine::validation::validate_costs;
use tracing::info;

// ==========================================
// OrchestratorOptions - 编排参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorOptions {
    pub workday_budget_secs: u64,
    pub zero_cost_policy: ZeroCostPolicy,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            workday_budget_secs: WORKDAY_BUDGET_SECS,
            zero_cost_policy: ZeroCostPolicy::default(),
        }
    }
}

// ==========================================
// DispatchOrchestrator - 场景编排器
// ==========================================
pub struct DispatchOrchestrator {
    options: OrchestratorOptions,
    packer: GreedyPacker,
    scheduler: TimeWindowScheduler,
}

impl DispatchOrchestrator {
    /// 创建新的编排器实例
    pub fn new(options: OrchestratorOptions) -> Self {
        Self {
            packer: GreedyPacker::new(),
            scheduler: TimeWindowScheduler::new(options.workday_budget_secs),
            options,
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(OrchestratorOptions {
            workday_budget_secs: config.workday_budget_secs,
            zero_cost_policy: config.zero_cost_policy,
        })
    }

    /// 场景1: 最少车辆 + 最多派单
    pub fn scenario1(&self, dataset: &Dataset, strategy: Scenario1Strategy) -> ScenarioResult {
        let (order_ordering, van_ordering) = strategy.orderings();
        let outcome = self.packer.pack(
            dataset.orders.clone(),
            dataset.vans.clone(),
            order_ordering,
            van_ordering,
        );
        let result = ScenarioResult::from_outcome(outcome);
        log_result(ScenarioKind::Scenario1, &dataset.name, strategy.as_str(), &result);
        result
    }

    /// 场景2: 最大利润
    ///
    /// # 返回
    /// - `Err(ZeroCostVan)`: ZeroCostPolicy::Reject 下存在零成本货车
    pub fn scenario2(
        &self,
        dataset: &Dataset,
        strategy: Scenario2Strategy,
    ) -> DispatchResult<ScenarioResult> {
        validate_costs(&dataset.vans, self.options.zero_cost_policy)?;

        let (order_ordering, van_ordering) = strategy.orderings();
        let outcome = self.packer.pack(
            dataset.orders.clone(),
            dataset.vans.clone(),
            order_ordering,
            van_ordering,
        );
        let result = ScenarioResult::from_outcome(outcome);
        log_result(ScenarioKind::Scenario2, &dataset.name, strategy.as_str(), &result);
        Ok(result)
    }

    /// 场景3: 单车工作日内最多快递
    pub fn scenario3(&self, dataset: &Dataset) -> ScenarioResult {
        let outcome = self.scheduler.schedule(dataset.orders.clone());
        let result = ScenarioResult::from_outcome(outcome);
        log_result(ScenarioKind::Scenario3, &dataset.name, "duration_asc", &result);
        result
    }
}

impl Default for DispatchOrchestrator {
    fn default() -> Self {
        Self::new(OrchestratorOptions::default())
    }
}

fn log_result(kind: ScenarioKind, dataset: &str, strategy: &str, result: &ScenarioResult) {
    info!(
        scenario = %kind,
        dataset = %dataset,
        strategy = %strategy,
        vans_used = result.vans_used(),
        orders_dispatched = result.orders_dispatched,
        remaining = result.remaining_count(),
        efficiency = result.efficiency,
        profit = result.profit,
        runtime_micros = result.runtime_micros,
        "场景计算完成"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::DispatchError;

    fn sample_dataset() -> Dataset {
        Dataset::from_tuples(
            "sample",
            &[(5, 5, 10, 100), (6, 6, 20, 200), (4, 4, 30, 28_700)],
            &[(10, 10, 5)],
        )
    }

    #[test]
    fn test_scenario1_does_not_mutate_dataset() {
        let orchestrator = DispatchOrchestrator::default();
        let dataset = sample_dataset();
        let before = dataset.clone();

        let first = orchestrator.scenario1(&dataset, Scenario1Strategy::VolumeAsc);
        let second = orchestrator.scenario1(&dataset, Scenario1Strategy::VolumeAsc);

        assert_eq!(dataset, before);
        assert_eq!(first.vans, second.vans);
        assert_eq!(first.remaining_orders, second.remaining_orders);
    }

    #[test]
    fn test_scenario2_rejects_zero_cost_by_default() {
        let orchestrator = DispatchOrchestrator::default();
        let dataset = Dataset::from_tuples("z", &[(1, 1, 1, 1)], &[(10, 10, 0)]);

        let err = orchestrator
            .scenario2(&dataset, Scenario2Strategy::AreaDesc)
            .unwrap_err();
        assert!(matches!(err, DispatchError::ZeroCostVan { van_id: 1 }));
    }

    #[test]
    fn test_scenario2_prefer_first_policy() {
        let orchestrator = DispatchOrchestrator::new(OrchestratorOptions {
            zero_cost_policy: ZeroCostPolicy::PreferFirst,
            ..OrchestratorOptions::default()
        });
        let dataset = Dataset::from_tuples("z", &[(1, 1, 7, 1)], &[(10, 10, 3), (10, 10, 0)]);

        let result = orchestrator
            .scenario2(&dataset, Scenario2Strategy::VolumeAsc)
            .unwrap();
        assert_eq!(result.vans[0].van.van_id, 2);
        assert_eq!(result.profit, 7);
    }

    #[test]
    fn test_scenario3_uses_configured_budget() {
        let orchestrator = DispatchOrchestrator::new(OrchestratorOptions {
            workday_budget_secs: 150,
            ..OrchestratorOptions::default()
        });

        let result = orchestrator.scenario3(&sample_dataset());
        assert_eq!(result.orders_dispatched, 1);
        assert_eq!(result.cost, 0);
    }
}
