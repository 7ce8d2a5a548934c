//! Performance benchmarks for the shift pay engine.
//!
//! The calculator is O(n) in shift count, so these benchmarks verify the
//! constant factor stays small:
//! - Single shift calculation: < 10μs mean
//! - A month of shifts (30): < 50μs mean
//! - A year of shifts (365): < 500μs mean
//! - HTTP round trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use shiftpay_engine::api::{AppState, create_router};
use shiftpay_engine::calculation::calculate_pay;
use shiftpay_engine::config::RateSchedule;
use shiftpay_engine::models::{ShiftRecord, ShiftType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates consecutive 8-hour shifts starting from a fixed Monday.
fn create_shifts(count: usize) -> Vec<ShiftRecord> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    (0..count)
        .map(|i| ShiftRecord {
            date: base + Duration::days(i as i64),
            shift_type: ShiftType::Morning,
            hours: Decimal::from(8),
        })
        .collect()
}

/// Benchmark: direct calculator invocation across shift counts.
fn bench_calculate_pay(c: &mut Criterion) {
    let schedule = RateSchedule::default();
    let mut group = c.benchmark_group("calculate_pay");

    for shift_count in [1usize, 7, 30, 365] {
        let shifts = create_shifts(shift_count);
        group.throughput(Throughput::Elements(shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &shifts,
            |b, shifts| b.iter(|| black_box(calculate_pay(black_box(shifts), &schedule))),
        );
    }

    group.finish();
}

/// Benchmark: full HTTP round trip through the `/calculate` endpoint.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(RateSchedule::default());
    let router = create_router(state);

    let shifts: Vec<serde_json::Value> = create_shifts(14)
        .into_iter()
        .map(|s| {
            serde_json::json!({
                "date": s.date.format("%Y-%m-%d").to_string(),
                "hours": "8",
                "shift_type": "morning"
            })
        })
        .collect();
    let body = serde_json::json!({ "shifts": shifts }).to_string();

    c.bench_function("calculate_endpoint_14_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

criterion_group!(benches, bench_calculate_pay, bench_calculate_endpoint);
criterion_main!(benches);
