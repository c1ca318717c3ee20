use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jl_time::{is_leap_year, month_grid_with, to_gregorian, to_jalali, FormatOptions, JalaliDate, NullCalendar};

fn conversion_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let gregorian = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    group.bench_function("to_jalali", |b| {
        b.iter(|| {
            let j = to_jalali(black_box(gregorian));
            black_box((j.year(), j.month(), j.day()))
        })
    });

    group.bench_function("to_gregorian", |b| {
        b.iter(|| black_box(to_gregorian(black_box(1403), black_box(7), black_box(10))))
    });

    group.bench_function("is_leap_year/century", |b| {
        b.iter(|| (1350..1450).filter(|&y| is_leap_year(black_box(y))).count())
    });

    group.finish();
}

fn presentation_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("present");

    let date = JalaliDate::from_ymd(1403, 12, 30).unwrap();
    let options = FormatOptions {
        include_month_name: true,
        ..FormatOptions::default()
    };
    group.bench_function("format", |b| b.iter(|| black_box(date).format(&options)));

    let today = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
    group.bench_function("month_grid", |b| {
        b.iter(|| month_grid_with(&NullCalendar, black_box(1403), black_box(1), today))
    });

    group.finish();
}

criterion_group!(benches, conversion_benches, presentation_benches);
criterion_main!(benches);
