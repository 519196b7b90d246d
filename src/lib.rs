// ==========================================
// 货车派单系统 - 核心库
// ==========================================
// 场景1: 最少车辆 + 最多派单（贪心装车）
// 场景2: 最大利润（按 容量/成本 选车）
// 场景3: 单车工作日内最多快递（时间窗调度）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 装车/调度/汇总
pub mod engine;

// 导入层 - 数据集文件
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ScenarioKind, ZeroCostPolicy};

// 领域实体
pub use domain::{Dataset, IdSequence, Order, Van, VanLoad};

// 引擎
pub use engine::{
    BatchRunner, BatchSummary, DispatchError, DispatchOrchestrator, GreedyPacker,
    Scenario1Strategy, Scenario2Strategy, ScenarioResult, TimeWindowScheduler,
};

// 导入
pub use importer::{DatasetGenerator, DatasetLoader, ImportError};

// 配置
pub use config::DispatchConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "货车派单系统";
