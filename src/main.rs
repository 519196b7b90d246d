// ==========================================
// 货车派单系统 - 命令行入口
// ==========================================
// 用法:
//   van-dispatch [--config <file.json>] run-all [root] [output]
//   van-dispatch [--config <file.json>] scenario <1|2|3> <dataset_dir> [strategy] [--json]
//   van-dispatch [--config <file.json>] generate <root> <name> [seed]
//   van-dispatch [--config <file.json>] list [root]
// ==========================================

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use van_dispatch::config::DispatchConfig;
use van_dispatch::domain::ScenarioKind;
use van_dispatch::engine::{
    BatchRunner, DispatchOrchestrator, Scenario1Strategy, Scenario2Strategy, ScenarioResult,
};
use van_dispatch::importer::{available_datasets, DatasetGenerationParams, DatasetGenerator, DatasetLoader};
use van_dispatch::logging;

const USAGE: &str = "\
用法:
  van-dispatch [--config <file.json>] run-all [root] [output]
  van-dispatch [--config <file.json>] scenario <1|2|3> <dataset_dir> [strategy] [--json]
  van-dispatch [--config <file.json>] generate <root> <name> [seed]
  van-dispatch [--config <file.json>] list [root]";

fn main() -> Result<()> {
    logging::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config_path = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                bail!("--config 缺少文件路径\n{}", USAGE);
            }
            let path = PathBuf::from(args.remove(i + 1));
            args.remove(i);
            Some(path)
        }
        None => None,
    };

    let config = DispatchConfig::load(config_path.as_deref()).context("配置加载失败")?;

    tracing::info!(
        "{} v{} 启动",
        van_dispatch::APP_NAME,
        van_dispatch::VERSION
    );

    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("run-all") => {
            let root = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| config.datasets_dir.clone());
            let output = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join(&config.output_file));
            run_all(&config, &root, &output)
        }
        Some("scenario") => {
            let number = args.next().ok_or_else(|| anyhow!("缺少场景编号\n{}", USAGE))?;
            let dir = args.next().ok_or_else(|| anyhow!("缺少数据集目录\n{}", USAGE))?;
            let rest: Vec<String> = args.collect();
            let json = rest.iter().any(|a| a == "--json");
            let strategy = rest.into_iter().find(|a| a != "--json");
            run_scenario(&config, &number, Path::new(&dir), strategy.as_deref(), json)
        }
        Some("generate") => {
            let root = args.next().ok_or_else(|| anyhow!("缺少根目录\n{}", USAGE))?;
            let name = args.next().ok_or_else(|| anyhow!("缺少数据集名称\n{}", USAGE))?;
            let seed = args
                .next()
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("随机种子必须为非负整数")?;
            generate(&config, Path::new(&root), &name, seed)
        }
        Some("list") => {
            let root = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| config.datasets_dir.clone());
            let names = available_datasets(&root)
                .with_context(|| format!("无法读取数据集目录: {}", root.display()))?;
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
        Some(other) => bail!("未知命令: {}\n{}", other, USAGE),
        None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

fn run_all(config: &DispatchConfig, root: &Path, output: &Path) -> Result<()> {
    let runner = BatchRunner::from_config(config);
    let summary = runner
        .run_all(root, output)
        .with_context(|| format!("批量评估失败: {}", root.display()))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_scenario(
    config: &DispatchConfig,
    number: &str,
    dir: &Path,
    strategy: Option<&str>,
    json: bool,
) -> Result<()> {
    let kind = number
        .parse::<u8>()
        .ok()
        .and_then(ScenarioKind::from_number)
        .ok_or_else(|| anyhow!("场景编号必须为 1, 2 或 3: {}", number))?;

    let dataset = DatasetLoader::from_config(config)
        .load(dir)
        .with_context(|| format!("数据集加载失败: {}", dir.display()))?;
    let orchestrator = DispatchOrchestrator::from_config(config);

    let result = match kind {
        ScenarioKind::Scenario1 => {
            let strategy: Scenario1Strategy = strategy
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow!(e))?
                .unwrap_or_default();
            orchestrator.scenario1(&dataset, strategy)
        }
        ScenarioKind::Scenario2 => {
            let strategy: Scenario2Strategy = strategy
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow!(e))?
                .unwrap_or_default();
            orchestrator
                .scenario2(&dataset, strategy)
                .context("场景2计算失败")?
        }
        ScenarioKind::Scenario3 => orchestrator.scenario3(&dataset),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(kind, &result)?;
    }
    Ok(())
}

fn print_result(kind: ScenarioKind, result: &ScenarioResult) -> Result<()> {
    println!("{} ({})", kind, kind.title_cn());
    for load in &result.vans {
        println!("货车 {}", load.van);
        for order in load.orders() {
            println!("  {}", order);
        }
    }
    println!("未派订单: {}", result.remaining_count());
    print!("{}", result.to_csv_line()?);
    Ok(())
}

fn generate(config: &DispatchConfig, root: &Path, name: &str, seed: Option<u64>) -> Result<()> {
    let params = DatasetGenerationParams {
        seed,
        ..DatasetGenerationParams::default()
    };
    let dataset = DatasetGenerator::new(DatasetLoader::from_config(config))
        .generate(root, name, &params)
        .with_context(|| format!("数据集生成失败: {}", name))?;

    println!(
        "已生成 {}: {} 个订单, {} 辆货车",
        dataset.name,
        dataset.orders.len(),
        dataset.vans.len()
    );
    Ok(())
}
