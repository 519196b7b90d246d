// ==========================================
// 货车派单系统 - 领域模型层
// ==========================================
// 职责: 定义订单、货车、装载台账、数据集与基础类型
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod dataset;
pub mod order;
pub mod types;
pub mod van;

// 重导出核心类型
pub use dataset::{Dataset, IdSequence};
pub use order::Order;
pub use types::{ScenarioKind, ZeroCostPolicy};
pub use van::{Van, VanLoad};
