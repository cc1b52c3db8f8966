use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ElementBalance, GanJi, HeavenlyStem, SolarTerm, TimeUnit, compatibility_score, day_pillar,
    hour_pillar, month_pillar, node_term_from_longitude, year_pillar,
};

fn ganji_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ganji");
    group.bench_function("at", |b| b.iter(|| GanJi::at(black_box(12_345))));
    group.bench_function("find", |b| b.iter(|| GanJi::find(black_box("경진"))));
    group.bench_function("compatibility_score", |b| {
        b.iter(|| compatibility_score(black_box(17), black_box(42)))
    });
    group.finish();
}

fn pillar_rules_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2000, 3, 17).unwrap_or(NaiveDate::MIN);
    let unit = TimeUnit::from_ordinal(5);

    let mut group = c.benchmark_group("pillar_rules");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(2000))));
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(HeavenlyStem::Gyeong), black_box(SolarTerm::Gyeongchip)))
    });
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(HeavenlyStem::Gap), black_box(unit)))
    });
    group.finish();
}

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_term");
    group.bench_function("node_term_from_longitude", |b| {
        b.iter(|| node_term_from_longitude(black_box(356.7)))
    });
    group.finish();
}

fn balance_bench(c: &mut Criterion) {
    let pillars: Vec<GanJi> = (0..8).map(|i| GanJi::at(i * 7)).collect();
    c.bench_function("element_balance", |b| {
        b.iter(|| ElementBalance::from_pillars(black_box(pillars.iter().copied())))
    });
}

criterion_group!(
    benches,
    ganji_bench,
    pillar_rules_bench,
    solar_term_bench,
    balance_bench
);
criterion_main!(benches);
