// ==========================================
// 货车派单系统 - 输入校验
// ==========================================
// 职责: 场景2排序前拒绝零成本货车（容量/成本 无定义）
// ==========================================

use crate::domain::types::ZeroCostPolicy;
use crate::domain::van::Van;
use crate::engine::error::{DispatchError, DispatchResult};
use tracing::warn;

/// 校验货车成本
///
/// # 参数
/// - `vans`: 待排序货车
/// - `policy`: 零成本处理策略
///
/// # 返回
/// - `Ok(())`: 可进入排序
/// - `Err(ZeroCostVan)`: Reject 策略下发现的第一辆零成本货车
pub fn validate_costs(vans: &[Van], policy: ZeroCostPolicy) -> DispatchResult<()> {
    let Some(van) = vans.iter().find(|van| van.cost == 0) else {
        return Ok(());
    };

    match policy {
        ZeroCostPolicy::Reject => Err(DispatchError::ZeroCostVan { van_id: van.van_id }),
        ZeroCostPolicy::PreferFirst => {
            warn!(van_id = van.van_id, "存在零成本货车, 按最优先处理");
            Ok(())
        }
    }
}
