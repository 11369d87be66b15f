use criterion::{criterion_group, criterion_main, Criterion};
use easepark_core::prelude::*;
use std::hint::black_box;

fn synthetic_records(n: usize) -> Vec<CarparkRecord> {
    (0..n)
        .map(|i| {
            let district = DistrictKey::ALL[i % DistrictKey::ALL.len()];
            let mut record = CarparkRecord {
                park_id: format!("bench{i}"),
                name: Localized::new(format!("Car Park {i}"), format!("停車場{i}"), format!("停车场{i}")),
                district: district.labels().to_owned_strings(),
                status: match i % 7 {
                    0 => OpeningStatus::Closed,
                    1 => OpeningStatus::Unknown,
                    _ => OpeningStatus::Open,
                },
                ..Default::default()
            };
            if i % 5 != 0 {
                record.vacancies.insert("P".into(), Vacancy::from_raw((i % 300) as i64 - 1));
            }
            record
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve region", |b| {
        b.iter(|| resolve(black_box("Hong%20Kong%20Island"), Language::En))
    });
    c.bench_function("resolve alias", |b| {
        b.iter(|| resolve(black_box("central-&-western"), Language::Tc))
    });
    c.bench_function("resolve passthrough", |b| {
        b.iter(|| resolve(black_box("tin shui wai"), Language::En))
    });
}

fn bench_rank(c: &mut Criterion) {
    let records = synthetic_records(600);
    c.bench_function("rank 600 by vacancy", |b| b.iter(|| rank(black_box(&records), "P")));

    let by_name = CarparkRanker::new("P")
        .lang(Language::Tc)
        .sort_by(SortColumn::Name, SortDirection::Natural);
    c.bench_function("rank 600 by tc name", |b| b.iter(|| by_name.rank(black_box(&records))));

    let filtered = CarparkRanker::new("P").filter(
        CarparkFilter::new()
            .districts(resolve("kowloon", Language::En))
            .open_only(true),
    );
    c.bench_function("filter+rank 600 kowloon", |b| {
        b.iter(|| filtered.rank(black_box(&records)))
    });
}

criterion_group!(benches, bench_resolve, bench_rank);
criterion_main!(benches);
