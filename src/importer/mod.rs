// ==========================================
// 货车派单系统 - 导入层
// ==========================================
// 职责: 数据集文件读取与随机数据集生成
// 红线: 只产出不可变的 Dataset, 不触碰引擎状态
// ==========================================

pub mod dataset_loader;
pub mod error;
pub mod generator;

// 重导出核心类型
pub use dataset_loader::{available_datasets, load_orders, load_vans, DatasetLoader};
pub use error::{ImportError, ImportResult};
pub use generator::{generate_in_memory, DatasetGenerationParams, DatasetGenerator};
