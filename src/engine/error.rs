// ==========================================
// 货车派单系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 所有错误均为局部可恢复,批量评估中不应中断其他策略/数据集
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum DispatchError {
    // ===== 输入校验错误 =====
    #[error("货车成本为 0, 无法按 容量/成本 排序: van_id={van_id}")]
    ZeroCostVan { van_id: u32 },

    // ===== 输出错误 =====
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    // ===== 导入错误 =====
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Result 类型别名
pub type DispatchResult<T> = Result<T, DispatchError>;
