// ==========================================
// 货车派单系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("字段数量错误 ({file} 行 {line}): 期望 {expected} 个, 实际 {actual} 个")]
    FieldCountError {
        file: String,
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("类型转换失败 ({file} 行 {line}, 字段 {field}): 非负整数期望, 实际 {value}")]
    TypeConversionError {
        file: String,
        line: u64,
        field: String,
        value: String,
    },

    // ===== 数据集生成错误 =====
    #[error("数据集已存在: {0}")]
    DatasetExists(String),

    #[error("生成参数无效: {0}")]
    InvalidParams(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
