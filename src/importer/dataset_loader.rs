// ==========================================
// 货车派单系统 - 数据集加载器
// ==========================================
// 格式: 首行表头（跳过）, 其后每行一条记录,
//       字段以空白分隔, 均为非负整数
// 订单: volume weight reward duration
// 货车: max_volume max_weight cost
// ==========================================

use crate::config::DispatchConfig;
use crate::domain::dataset::{Dataset, IdSequence};
use crate::domain::order::Order;
use crate::domain::van::Van;
use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub const ORDER_FIELDS: [&str; 4] = ["volume", "weight", "reward", "duration"];
pub const VAN_FIELDS: [&str; 3] = ["max_volume", "max_weight", "cost"];

// ==========================================
// DatasetLoader - 数据集加载器
// ==========================================
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    orders_file: String,
    vans_file: String,
}

impl DatasetLoader {
    /// 构造函数
    ///
    /// # 参数
    /// - `orders_file` / `vans_file`: 数据集目录下的文件名
    pub fn new(orders_file: impl Into<String>, vans_file: impl Into<String>) -> Self {
        Self {
            orders_file: orders_file.into(),
            vans_file: vans_file.into(),
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.orders_file.clone(), config.vans_file.clone())
    }

    pub fn orders_file(&self) -> &str {
        &self.orders_file
    }

    pub fn vans_file(&self) -> &str {
        &self.vans_file
    }

    /// 加载数据集目录
    ///
    /// 订单与货车的ID各自从 1 开始
    pub fn load(&self, dir: &Path) -> ImportResult<Dataset> {
        if !dir.is_dir() {
            return Err(ImportError::FileNotFound(dir.display().to_string()));
        }

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        let mut ids = IdSequence::new();
        let orders = load_orders(&dir.join(&self.orders_file), &mut ids)?;
        ids.reset();
        let vans = load_vans(&dir.join(&self.vans_file), &mut ids)?;

        info!(
            dataset = %name,
            orders_count = orders.len(),
            vans_count = vans.len(),
            "数据集加载完成"
        );

        Ok(Dataset::new(name, orders, vans))
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        let config = DispatchConfig::default();
        Self::from_config(&config)
    }
}

/// 读取订单文件
pub fn load_orders(path: &Path, ids: &mut IdSequence) -> ImportResult<Vec<Order>> {
    let rows = read_numeric_rows(path, &ORDER_FIELDS)?;
    Ok(rows
        .into_iter()
        .map(|f| Order::new(ids.next_id(), f[0], f[1], f[2], f[3]))
        .collect())
}

/// 读取货车文件
pub fn load_vans(path: &Path, ids: &mut IdSequence) -> ImportResult<Vec<Van>> {
    let rows = read_numeric_rows(path, &VAN_FIELDS)?;
    Ok(rows
        .into_iter()
        .map(|f| Van::new(ids.next_id(), f[0], f[1], f[2]))
        .collect())
}

/// 列出根目录下的数据集（子目录名, 按名称排序）
pub fn available_datasets(root: &Path) -> ImportResult<Vec<String>> {
    if !root.is_dir() {
        return Err(ImportError::FileNotFound(root.display().to_string()));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// 读取空白分隔的数值行
///
/// - 首行为表头, 跳过
/// - 连续空白/制表符视为一个分隔
/// - 空行跳过
fn read_numeric_rows(path: &Path, fields: &[&str]) -> ImportResult<Vec<Vec<u64>>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let file_label = path.display().to_string();
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(true)
        .flexible(true) // 允许行长度不一致
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let tokens: Vec<&str> = record
            .iter()
            .flat_map(|field| field.split_whitespace())
            .collect();

        // 跳过完全空白的行
        if tokens.is_empty() {
            continue;
        }

        if tokens.len() != fields.len() {
            return Err(ImportError::FieldCountError {
                file: file_label,
                line,
                expected: fields.len(),
                actual: tokens.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for (token, field) in tokens.iter().zip(fields) {
            let value = token
                .parse::<u64>()
                .map_err(|_| ImportError::TypeConversionError {
                    file: file_label.clone(),
                    line,
                    field: field.to_string(),
                    value: token.to_string(),
                })?;
            values.push(value);
        }
        rows.push(values);
    }

    debug!(file = %file_label, rows = rows.len(), "文件解析完成");
    Ok(rows)
}
