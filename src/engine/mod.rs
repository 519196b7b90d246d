// ==========================================
// 货车派单系统 - 引擎层
// ==========================================
// 职责: 排序规则、装车、时间窗调度、结果汇总与批量评估
// 红线: 引擎不读写数据集文件（批量评估除外）, 输入数据集不可变
// ==========================================

pub mod aggregator;
pub mod batch;
pub mod error;
pub mod orchestrator;
pub mod ordering;
pub mod packer;
pub mod scheduler;
pub mod strategy;
pub mod validation;

// 重导出核心引擎
pub use aggregator::{ScenarioCsvRecord, ScenarioResult};
pub use batch::{BatchFailure, BatchRow, BatchRunner, BatchSummary, DatasetEvaluation, BATCH_HEADER};
pub use error::{DispatchError, DispatchResult};
pub use orchestrator::{DispatchOrchestrator, OrchestratorOptions};
pub use ordering::{DispatchSorter, OrderOrdering, VanOrdering};
pub use packer::{GreedyPacker, PackingOutcome};
pub use scheduler::{TimeWindowScheduler, WORKDAY_BUDGET_SECS};
pub use strategy::{Scenario1Strategy, Scenario2Strategy};
pub use validation::validate_costs;
