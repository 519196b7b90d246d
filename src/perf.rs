use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
}

/// 当前线程内嵌套的 PerfGuard 数量
pub fn active_depth() -> u32 {
    PERF_DEPTH.with(|d| d.get())
}

/// 性能统计 Guard：drop 时记录 elapsed_us + 嵌套深度
///
/// 使用方式：
/// ```ignore
/// let _perf = van_dispatch::perf::PerfGuard::new("evaluate_dataset").with_label("set_1");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    label: Option<String>,
    start: Instant,
    depth: u32,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let next = d.get().saturating_add(1);
            d.set(next);
            next
        });
        Self {
            op,
            label: None,
            start: Instant::now(),
            depth,
        }
    }

    /// 附加标签（如数据集名称）
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_us = self.elapsed_us();
        let label = self.label.as_deref().unwrap_or("-");

        tracing::info!(
            target: "perf",
            op = self.op,
            label,
            depth = self.depth,
            elapsed_us,
            "done"
        );

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
