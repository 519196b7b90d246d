// ==========================================
// 货车派单系统 - 批量评估
// ==========================================
// 用途: 遍历数据集根目录, 对每个数据集运行全部场景/策略, 汇总为一个 CSV
// 红线: 单个数据集/策略失败只记录, 不中断整批
// ==========================================

use crate::config::DispatchConfig;
use crate::domain::dataset::Dataset;
use crate::domain::types::ScenarioKind;
use crate::engine::aggregator::ScenarioResult;
use crate::engine::error::DispatchResult;
use crate::engine::orchestrator::DispatchOrchestrator;
use crate::engine::strategy::{Scenario1Strategy, Scenario2Strategy};
use crate::importer::dataset_loader::{available_datasets, DatasetLoader};
use crate::perf::PerfGuard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

pub const BATCH_HEADER: [&str; 12] = [
    "dataset",
    "scenario",
    "strategy",
    "vans_used",
    "orders_dispatched",
    "remaining_orders",
    "efficiency",
    "avg_delivery_time",
    "cost",
    "reward",
    "profit",
    "runtime_us",
];

// 场景3只有一种排序方式
const SCENARIO3_STRATEGY_INDEX: usize = 1;

// ==========================================
// BatchRow - 结果文件的一行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub dataset: String,
    pub scenario: u8,
    pub strategy: usize,
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

impl BatchRow {
    fn new(dataset: &str, kind: ScenarioKind, strategy: usize, result: &ScenarioResult) -> Self {
        let r = result.csv_record();
        Self {
            dataset: dataset.to_string(),
            scenario: kind.number(),
            strategy,
            vans_used: r.vans_used,
            orders_dispatched: r.orders_dispatched,
            remaining_orders: r.remaining_orders,
            efficiency: r.efficiency,
            avg_delivery_time: r.avg_delivery_time,
            cost: r.cost,
            reward: r.reward,
            profit: r.profit,
            runtime_us: r.runtime_us,
        }
    }
}

// ==========================================
// BatchFailure - 单项失败记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub dataset: String,
    pub scenario: Option<ScenarioKind>, // None: 数据集加载失败
    pub strategy: Option<String>,
    pub message: String,
}

// ==========================================
// BatchSummary - 批量运行摘要
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub datasets: Vec<String>,
    pub rows_written: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 单个数据集的评估结果
#[derive(Debug, Clone, Default)]
pub struct DatasetEvaluation {
    pub rows: Vec<BatchRow>,
    pub failures: Vec<BatchFailure>,
}

// ==========================================
// BatchRunner - 批量评估器
// ==========================================
pub struct BatchRunner {
    loader: DatasetLoader,
    orchestrator: DispatchOrchestrator,
}

impl BatchRunner {
    pub fn new(loader: DatasetLoader, orchestrator: DispatchOrchestrator) -> Self {
        Self {
            loader,
            orchestrator,
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(
            DatasetLoader::from_config(config),
            DispatchOrchestrator::from_config(config),
        )
    }

    /// 运行全部数据集并写出结果文件
    ///
    /// # 参数
    /// - `datasets_root`: 数据集根目录（每个子目录为一个数据集）
    /// - `output_path`: 结果 CSV 路径（覆盖写）
    ///
    /// # 返回
    /// - `Err`: 根目录不可读或结果文件无法写入
    pub fn run_all(&self, datasets_root: &Path, output_path: &Path) -> DispatchResult<BatchSummary> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let datasets = available_datasets(datasets_root)?;

        info!(
            run_id = %run_id,
            root = %datasets_root.display(),
            datasets_count = datasets.len(),
            "批量评估开始"
        );

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(File::create(output_path)?);
        writer.write_record(BATCH_HEADER)?;

        let mut rows_written = 0;
        let mut failures = Vec::new();

        for name in &datasets {
            let dataset = match self.loader.load(&datasets_root.join(name)) {
                Ok(dataset) => dataset,
                Err(e) => {
                    warn!(dataset = %name, error = %e, "数据集加载失败, 跳过");
                    failures.push(BatchFailure {
                        dataset: name.clone(),
                        scenario: None,
                        strategy: None,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let evaluation = self.evaluate(&dataset);
            for row in &evaluation.rows {
                writer.serialize(row)?;
            }
            rows_written += evaluation.rows.len();
            failures.extend(evaluation.failures);
        }

        writer.flush()?;

        info!(
            run_id = %run_id,
            rows_written,
            failures_count = failures.len(),
            output = %output_path.display(),
            "批量评估完成"
        );

        Ok(BatchSummary {
            run_id,
            started_at,
            datasets,
            rows_written,
            failures,
        })
    }

    /// 对单个数据集运行全部场景与策略
    ///
    /// 行顺序: 场景1 各策略, 场景2 各策略, 场景3
    pub fn evaluate(&self, dataset: &Dataset) -> DatasetEvaluation {
        let _perf = PerfGuard::new("evaluate_dataset").with_label(dataset.name.clone());
        let mut evaluation = DatasetEvaluation::default();

        for strategy in Scenario1Strategy::ALL {
            let result = self.orchestrator.scenario1(dataset, strategy);
            evaluation.rows.push(BatchRow::new(
                &dataset.name,
                ScenarioKind::Scenario1,
                strategy.index(),
                &result,
            ));
        }

        for strategy in Scenario2Strategy::ALL {
            match self.orchestrator.scenario2(dataset, strategy) {
                Ok(result) => evaluation.rows.push(BatchRow::new(
                    &dataset.name,
                    ScenarioKind::Scenario2,
                    strategy.index(),
                    &result,
                )),
                Err(e) => {
                    warn!(
                        dataset = %dataset.name,
                        strategy = %strategy,
                        error = %e,
                        "场景2策略失败, 跳过"
                    );
                    evaluation.failures.push(BatchFailure {
                        dataset: dataset.name.clone(),
                        scenario: Some(ScenarioKind::Scenario2),
                        strategy: Some(strategy.as_str().to_string()),
                        message: e.to_string(),
                    });
                }
            }
        }

        let result = self.orchestrator.scenario3(dataset);
        evaluation.rows.push(BatchRow::new(
            &dataset.name,
            ScenarioKind::Scenario3,
            SCENARIO3_STRATEGY_INDEX,
            &result,
        ));

        evaluation
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(DatasetLoader::default(), DispatchOrchestrator::default())
    }
}
