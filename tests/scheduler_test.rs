// ==========================================
// 时间窗调度集成测试（场景3）
// ==========================================
// 测试目标: 验证单车工作日时长预算内的派单
// 覆盖范围: 时长升序、预算截止、恰好用满预算、成本为0
// ==========================================


use test_helpers::{all_ids, dataset, mixed_dataset, order_ids};
use van_dispatch::logging;
use van_dispatch::engine::{
    DispatchOrchestrator, OrchestratorOptions, TimeWindowScheduler, WORKDAY_BUDGET_SECS,
};

// ==========================================
// 测试用例 1: 基本调度
// ==========================================

#[test]
fn test_scenario3_basic_cutoff() {
    logging::init_test();
    println!("\n=== 测试：场景3 预算截止 ===");

    let orchestrator = DispatchOrchestrator::default();
    let data = dataset(
        "workday",
        &[(1, 1, 10, 28_700), (1, 1, 20, 100), (1, 1, 30, 200)],
        &[(10, 10, 99)],
    );

    let result = orchestrator.scenario3(&data);

    println!("✓ 调度完成");
    println!("  - 派单数: {}", result.orders_dispatched);
    println!("  - 总时长: {} 秒", result.delivery_time_total);
    println!("  - 平均时长: {:.1} 秒", result.average_delivery_time());

    assert_eq!(WORKDAY_BUDGET_SECS, 28_800);
    assert_eq!(result.orders_dispatched, 2, "100 + 200 在预算内, 再加 28700 超出");
    assert_eq!(order_ids(result.vans[0].orders()), vec![2, 3]);
    assert_eq!(order_ids(&result.remaining_orders), vec![1]);
    assert_eq!(result.delivery_time_total, 300);
    assert_eq!(result.average_delivery_time(), 150.0);
    assert_eq!(result.cost, 0, "场景3不计货车成本");
    assert_eq!(result.reward, 50);
    assert_eq!(result.profit, 50);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 2: 恰好用满预算
// ==========================================

#[test]
fn test_exact_budget_is_accepted() {
    logging::init_test();
    let scheduler = TimeWindowScheduler::default();
    let data = dataset(
        "exact",
        &[(1, 1, 1, 14_400), (1, 1, 1, 14_400), (1, 1, 1, 1)],
        &[],
    );

    let outcome = scheduler.schedule(data.orders.clone());

    // 时长升序: 1, 14400 → 14401, 再加 14400 = 28801 超出
    assert_eq!(outcome.vans.len(), 1);
    assert_eq!(order_ids(outcome.vans[0].orders()), vec![3, 1]);
    assert_eq!(order_ids(&outcome.remaining_orders), vec![2]);

    let data = dataset("full", &[(1, 1, 1, 14_400), (1, 1, 1, 14_400)], &[]);
    let outcome = scheduler.schedule(data.orders);
    assert_eq!(outcome.vans[0].order_count(), 2, "累计时长等于预算时应装入");
    assert!(outcome.remaining_orders.is_empty());
}

// ==========================================
// 测试用例 3: 截止后不再尝试更短订单
// ==========================================

#[test]
fn test_stops_at_first_order_over_budget() {
    logging::init_test();
    let scheduler = TimeWindowScheduler::new(100);
    let data = dataset(
        "cutoff",
        &[(1, 1, 1, 60), (1, 1, 1, 50), (1, 1, 1, 70)],
        &[],
    );

    let outcome = scheduler.schedule(data.orders);

    // 升序 50, 60, 70: 50 装入, 50+60 超出后截止
    assert_eq!(order_ids(outcome.vans[0].orders()), vec![2]);
    assert_eq!(order_ids(&outcome.remaining_orders), vec![1, 3]);
}

// ==========================================
// 测试用例 4: 无订单可装入
// ==========================================

#[test]
fn test_nothing_fits() {
    logging::init_test();
    let orchestrator = DispatchOrchestrator::new(OrchestratorOptions {
        workday_budget_secs: 10,
        ..OrchestratorOptions::default()
    });
    let data = dataset("long", &[(1, 1, 5, 11), (1, 1, 5, 20)], &[]);

    let result = orchestrator.scenario3(&data);

    assert_eq!(result.vans_used(), 0, "无订单装入时不应产生货车");
    assert_eq!(result.orders_dispatched, 0);
    assert_eq!(result.efficiency, 0.0);
    assert_eq!(result.average_delivery_time(), 0.0);
    assert_eq!(result.remaining_count(), 2);
}

// ==========================================
// 测试用例 5: 订单守恒与预算约束
// ==========================================

#[test]
fn test_mixed_dataset_respects_budget() {
    logging::init_test();
    let orchestrator = DispatchOrchestrator::default();
    let data = mixed_dataset("mixed");

    let result = orchestrator.scenario3(&data);

    let expected: Vec<u32> = (1..=data.orders.len() as u32).collect();
    assert_eq!(all_ids(&result.vans, &result.remaining_orders), expected);
    assert!(result.delivery_time_total <= WORKDAY_BUDGET_SECS);

    // 剩余订单的最短时长也放不下
    if let Some(shortest) = result.remaining_orders.iter().map(|o| o.duration).min() {
        assert!(result.delivery_time_total + shortest > WORKDAY_BUDGET_SECS);
    }

    // 已派订单按时长升序
    if let Some(load) = result.vans.first() {
        let durations: Vec<u64> = load.orders().iter().map(|o| o.duration).collect();
        let mut sorted = durations.clone();
        sorted.sort_unstable();
        assert_eq!(durations, sorted);
    }
}

// ==========================================
// 测试用例 6: 体积/重量累加溢出不构成截止
// ==========================================

#[test]
fn test_huge_volumes_do_not_stop_schedule() {
    logging::init_test();
    println!("\n=== 测试：超大体积订单 ===");

    let big = u64::MAX / 2 + 1;
    let orchestrator = DispatchOrchestrator::default();
    let data = dataset(
        "huge",
        &[(big, big, 1, 10), (big, big, 1, 20), (1, 1, 1, 30)],
        &[],
    );

    let result = orchestrator.scenario3(&data);

    println!("  - 派单数: {}", result.orders_dispatched);

    assert_eq!(result.orders_dispatched, 3, "场景3只受时长预算约束");
    assert_eq!(result.remaining_count(), 0);
    assert_eq!(result.delivery_time_total, 60);

    println!("=== 测试通过 ===\n");
}
