use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use autolabel::{
    ControlCenterExplorer, DirectionSet, LabelCandidate, Point, Rect, TextRunExplorer,
};

/// A grid of character cells, `columns` per row, the target sitting in the
/// middle of the grid so every direction has qualifying neighbors.
fn char_grid(rows: usize, columns: usize) -> (Rect, Vec<Rect>) {
    let char_width = 8;
    let char_height = 14;
    let line_gap = 4;
    let mut rects = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        let top = row as i32 * (char_height + line_gap);
        for column in 0..columns {
            let left = column as i32 * char_width;
            rects.push(Rect::from_ltwh(left, top, char_width, char_height));
        }
    }
    let mid_row = rows as i32 / 2;
    let target = Rect::from_ltwh(
        columns as i32 * char_width / 2,
        mid_row * (char_height + line_gap),
        120,
        char_height,
    );
    (target, rects)
}

/// Candidate controls scattered on a coarse grid around a centered target.
fn candidate_field(count: usize) -> (Rect, Vec<LabelCandidate>) {
    let per_row = 32;
    let candidates = (0..count)
        .map(|i| {
            let x = (i % per_row) as i32 * 40;
            let y = (i / per_row) as i32 * 30;
            LabelCandidate::new(format!("Label {i}"), Point::new(x, y))
        })
        .collect();
    let target = Rect::from_ltwh(per_row as i32 * 40 / 2, (count / per_row) as i32 * 15, 80, 22);
    (target, candidates)
}

fn bench_text_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_run_scan");
    for (rows, columns) in [(10usize, 40usize), (40, 80), (120, 120)] {
        let name = format!("{}x{}", rows, columns);
        let (target, rects) = char_grid(rows, columns);
        let explorer = TextRunExplorer::new(target, DirectionSet::ALL, 100, Some(40));
        group.bench_with_input(BenchmarkId::from_parameter(name), &rects, |b, rects| {
            b.iter(|| black_box(explorer.scan(black_box(rects))));
        });
    }
    group.finish();
}

fn bench_control_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("control_center_scan");
    for count in [32usize, 256, 2048] {
        let (target, candidates) = candidate_field(count);
        let explorer = ControlCenterExplorer::new(target, DirectionSet::ALL, 200, Some(100));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &candidates,
            |b, candidates| {
                b.iter(|| black_box(explorer.scan(black_box(candidates))));
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_text_run, bench_control_center
);
criterion_main!(benches);
