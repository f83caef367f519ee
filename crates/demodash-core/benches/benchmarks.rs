use criterion::{criterion_group, criterion_main, Criterion};
use demodash_core::{
    apply_filters, build_bar_chart, build_geo_chart, OriginSet, Record, Selection, Table,
};
use std::hint::black_box;

fn synthetic_table() -> Table {
    let countries = ["United States", "Mexico", "India", "China", "Philippines", "Cuba"];
    let codes = [57, 303, 210, 207, 233, 327];
    let mut rows = Vec::new();
    for year in 2007..=2021u16 {
        for city in 0..60 {
            for (i, country) in countries.iter().enumerate() {
                rows.push(Record {
                    city: format!("Metro {city}"),
                    country: country.to_string(),
                    origin_code: codes[i],
                    lat: 30.0 + (city % 15) as f64,
                    lon: -120.0 + (city % 40) as f64,
                    year,
                    population: 1000 + (city as u64 * 37 + i as u64 * 11) % 5000,
                });
            }
        }
    }
    Table::from_records(rows)
}

fn bench_filters(c: &mut Criterion) {
    let table = synthetic_table();
    let selection = Selection::new(["Mexico", "India"], Some("Metro 7"));

    c.bench_function("apply_filters/country+city", |b| {
        b.iter(|| apply_filters(black_box(&table), &OriginSet::all(), &selection))
    });

    c.bench_function("apply_filters/pass_through", |b| {
        b.iter(|| apply_filters(black_box(&table), &OriginSet::all(), &Selection::default()))
    });
}

fn bench_charts(c: &mut Criterion) {
    let table = synthetic_table();

    c.bench_function("build_geo_chart/full", |b| {
        b.iter(|| build_geo_chart(black_box(&table)))
    });

    c.bench_function("build_bar_chart/full", |b| {
        b.iter(|| build_bar_chart(black_box(&table), None))
    });
}

criterion_group!(benches, bench_filters, bench_charts);
criterion_main!(benches);
