// ==========================================
// 货车派单系统 - 数据集生成器
// ==========================================
// 用途: 按参数区间随机生成订单/货车, 写入数据集目录
// 输出: <root>/<name>/orders.txt + vans.txt（与加载器格式一致）
// ==========================================

use crate::domain::dataset::{Dataset, IdSequence};
use crate::domain::order::Order;
use crate::domain::van::Van;
use crate::importer::dataset_loader::{DatasetLoader, ORDER_FIELDS, VAN_FIELDS};
use crate::importer::error::{ImportError, ImportResult};
use csv::WriterBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::info;

// ==========================================
// DatasetGenerationParams - 生成参数
// ==========================================
// 区间均为闭区间 [min, max]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetGenerationParams {
    // ===== 订单 =====
    pub number_of_orders: usize,
    pub min_order_volume: u64,
    pub max_order_volume: u64,
    pub min_order_weight: u64,
    pub max_order_weight: u64,
    pub min_order_reward: u64,
    pub max_order_reward: u64,
    pub min_order_duration: u64,
    pub max_order_duration: u64,

    // ===== 货车 =====
    pub number_of_vans: usize,
    pub min_van_volume: u64,
    pub max_van_volume: u64,
    pub min_van_weight: u64,
    pub max_van_weight: u64,
    pub min_van_cost: u64,
    pub max_van_cost: u64,

    /// 随机种子（None 时使用系统熵）
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DatasetGenerationParams {
    fn default() -> Self {
        Self {
            number_of_orders: 450,
            min_order_volume: 1,
            max_order_volume: 100,
            min_order_weight: 1,
            max_order_weight: 100,
            min_order_reward: 1,
            max_order_reward: 1000,
            min_order_duration: 60,
            max_order_duration: 3600,
            number_of_vans: 50,
            min_van_volume: 200,
            max_van_volume: 500,
            min_van_weight: 200,
            max_van_weight: 500,
            min_van_cost: 100,
            max_van_cost: 500,
            seed: None,
        }
    }
}

impl DatasetGenerationParams {
    /// 参数校验
    ///
    /// 规则: 数量 >= 1, 所有区间 min <= max
    pub fn validate(&self) -> ImportResult<()> {
        if self.number_of_orders == 0 {
            return Err(ImportError::InvalidParams("订单数量必须 >= 1".to_string()));
        }
        if self.number_of_vans == 0 {
            return Err(ImportError::InvalidParams("货车数量必须 >= 1".to_string()));
        }

        let ranges = [
            ("order_volume", self.min_order_volume, self.max_order_volume),
            ("order_weight", self.min_order_weight, self.max_order_weight),
            ("order_reward", self.min_order_reward, self.max_order_reward),
            ("order_duration", self.min_order_duration, self.max_order_duration),
            ("van_volume", self.min_van_volume, self.max_van_volume),
            ("van_weight", self.min_van_weight, self.max_van_weight),
            ("van_cost", self.min_van_cost, self.max_van_cost),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ImportError::InvalidParams(format!(
                    "{}: min {} > max {}",
                    name, min, max
                )));
            }
        }
        Ok(())
    }
}

// ==========================================
// DatasetGenerator - 数据集生成器
// ==========================================
pub struct DatasetGenerator {
    loader: DatasetLoader,
}

impl DatasetGenerator {
    /// 构造函数
    ///
    /// # 参数
    /// - `loader`: 提供文件命名约定
    pub fn new(loader: DatasetLoader) -> Self {
        Self { loader }
    }

    /// 生成并写入数据集
    ///
    /// # 参数
    /// - `root`: 数据集根目录
    /// - `name`: 数据集名称（子目录名, 已存在则拒绝）
    /// - `params`: 生成参数
    ///
    /// # 返回
    /// 生成的数据集（ID 与重新加载结果一致）
    pub fn generate(
        &self,
        root: &Path,
        name: &str,
        params: &DatasetGenerationParams,
    ) -> ImportResult<Dataset> {
        params.validate()?;

        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ImportError::InvalidParams(format!("数据集名称无效: '{}'", name)));
        }

        let dir = root.join(name);
        if dir.exists() {
            return Err(ImportError::DatasetExists(dir.display().to_string()));
        }

        let dataset = generate_in_memory(name, params)?;

        std::fs::create_dir_all(&dir)?;
        write_rows(
            &dir.join(self.loader.orders_file()),
            &ORDER_FIELDS,
            dataset
                .orders
                .iter()
                .map(|o| vec![o.volume, o.weight, o.reward, o.duration]),
        )?;
        write_rows(
            &dir.join(self.loader.vans_file()),
            &VAN_FIELDS,
            dataset
                .vans
                .iter()
                .map(|v| vec![v.max_volume, v.max_weight, v.cost]),
        )?;

        info!(
            dataset = %name,
            orders_count = dataset.orders.len(),
            vans_count = dataset.vans.len(),
            seed = ?params.seed,
            "数据集生成完成"
        );

        Ok(dataset)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DatasetLoader::default())
    }
}

/// 仅内存生成（不落盘）
///
/// # 返回
/// - `Err(InvalidParams)`: 参数校验失败
pub fn generate_in_memory(name: &str, params: &DatasetGenerationParams) -> ImportResult<Dataset> {
    params.validate()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut ids = IdSequence::new();

    let orders = (0..params.number_of_orders)
        .map(|_| {
            Order::new(
                ids.next_id(),
                sample(&mut rng, params.min_order_volume..=params.max_order_volume),
                sample(&mut rng, params.min_order_weight..=params.max_order_weight),
                sample(&mut rng, params.min_order_reward..=params.max_order_reward),
                sample(&mut rng, params.min_order_duration..=params.max_order_duration),
            )
        })
        .collect();

    ids.reset();
    let vans = (0..params.number_of_vans)
        .map(|_| {
            Van::new(
                ids.next_id(),
                sample(&mut rng, params.min_van_volume..=params.max_van_volume),
                sample(&mut rng, params.min_van_weight..=params.max_van_weight),
                sample(&mut rng, params.min_van_cost..=params.max_van_cost),
            )
        })
        .collect();

    Ok(Dataset::new(name, orders, vans))
}

fn sample(rng: &mut StdRng, range: RangeInclusive<u64>) -> u64 {
    rng.gen_range(range)
}

fn write_rows<I>(path: &Path, header: &[&str], rows: I) -> ImportResult<()>
where
    I: IntoIterator<Item = Vec<u64>>,
{
    let mut writer = WriterBuilder::new().delimiter(b' ').from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
