//! Performance benchmarks for the Vacation Engine.
//!
//! Covers the pure calculators, the service over an in-memory store, and the
//! full HTTP path:
//! - Single payout calculation
//! - Aggregation of 1000 employee totals
//! - Vacation totals for stores of increasing size
//! - POST /payout through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::{Months, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use tower::ServiceExt;

use vacation_engine::api::{create_router, AppState};
use vacation_engine::calculation::{aggregate, compute_payout};
use vacation_engine::config::{ConfigLoader, PolicySettings};
use vacation_engine::models::{Employee, EmployeeVacationTotal, WageRecord};
use vacation_engine::service::VacationService;
use vacation_engine::store::InMemoryRecordStore;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
}

/// Creates a store with `employee_count` employees, each with 12 monthly
/// wage records ending January 2026.
fn create_store(employee_count: u64) -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new(PolicySettings::default());
    let first_month = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    for id in 1..=employee_count {
        store
            .add_employee(Employee {
                id,
                name: format!("Employee {}", id),
                hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            })
            .unwrap();

        for month in 0..12 {
            let start = first_month + Months::new(month);
            let end = start + Months::new(1) - chrono::Days::new(1);
            store
                .record_wage(WageRecord {
                    employee_id: id,
                    period_start: start,
                    period_end: end,
                    amount: Decimal::from(2000 + id * 10),
                })
                .unwrap();
        }
    }

    store
}

/// Benchmark: Single payout calculation.
fn bench_single_payout(c: &mut Criterion) {
    let settings = PolicySettings::default();
    let wage = Decimal::new(101_917_808, 6);

    c.bench_function("single_payout", |b| {
        b.iter(|| {
            black_box(
                compute_payout(
                    1,
                    black_box(Decimal::from(5)),
                    black_box(wage),
                    Decimal::from(24),
                    &settings,
                    1,
                )
                .unwrap(),
            )
        })
    });
}

/// Benchmark: Aggregating 1000 employee totals.
fn bench_aggregate_1000(c: &mut Criterion) {
    let entries: Vec<EmployeeVacationTotal> = (1..=1000u64)
        .map(|id| EmployeeVacationTotal {
            employee_id: id,
            employee_name: format!("Employee {}", id),
            amount: Decimal::new(123_456 + id as i64, 2),
        })
        .collect();

    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("1000_entries", |b| {
        b.iter(|| black_box(aggregate(black_box(&entries)).unwrap()))
    });
    group.finish();
}

/// Benchmark: Vacation totals at various store sizes.
fn bench_vacation_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("vacation_totals");

    for employee_count in [10u64, 100, 1000].iter() {
        let service = VacationService::new(Arc::new(create_store(*employee_count)));

        group.throughput(Throughput::Elements(*employee_count));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(service.get_vacation_totals(as_of()).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: POST /payout through the router.
fn bench_payout_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::from_config(config).expect("Failed to seed store"));
    let body = serde_json::json!({
        "employee_id": 1,
        "as_of_date": "2026-01-31",
        "requested_days": "5"
    })
    .to_string();

    c.bench_function("payout_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payout")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_payout,
    bench_aggregate_1000,
    bench_vacation_totals,
    bench_payout_endpoint,
);
criterion_main!(benches);
