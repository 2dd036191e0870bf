use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use std::hint::black_box;
use vs_way_search::{search, SortMode, Waypoint};

/// Baut eine synthetische Wegpunkt-Liste mit gestreuten Titeln und Notizen.
fn build_synthetic_waypoints(count: usize) -> Vec<Waypoint> {
    (0..count)
        .map(|index| {
            let column = (index % 1000) as f64;
            let row = (index / 1000) as f64;
            let title = match index % 3 {
                0 => format!("Mine {}", index),
                1 => format!("Camp {}", index),
                _ => format!("Turm {}", index),
            };
            Waypoint::new(
                Some(title),
                Some(format!("Notiz {}", index % 50)),
                DVec3::new(column, 0.0, row),
            )
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_query");
    let reference = DVec3::new(500.0, 0.0, 5.0);

    for &count in &[1_000usize, 10_000usize] {
        let waypoints = build_synthetic_waypoints(count);

        group.bench_with_input(
            BenchmarkId::new("filter_und_distanzsort", count),
            &waypoints,
            |b, wps| {
                b.iter(|| {
                    let result =
                        search::query(black_box("mine"), wps, SortMode::ByDistance, reference);
                    black_box(result.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vollsort_alphabetisch", count),
            &waypoints,
            |b, wps| {
                b.iter(|| {
                    let result = search::query(black_box(""), wps, SortMode::Alphabetical, reference);
                    black_box(result.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
