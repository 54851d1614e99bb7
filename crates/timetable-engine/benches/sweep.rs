use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use timetable_engine::{detect_conflicts, ClockTime, Course, SlotDuration, Weekday};

/// A week of `n` courses cycling through days and start times, with a mix of
/// back-to-back and overlapping meetings.
fn week_of_courses(n: usize) -> Vec<Course> {
    (0..n)
        .map(|i| {
            let start = 8 * 60 + (i % 24) as u32 * 25;
            let end = start + 50 + (i % 3) as u32 * 30;
            let days = vec![Weekday::ALL[i % 5], Weekday::ALL[(i + 2) % 7]];
            Course::new(
                format!("c{}", i),
                format!("Course {}", i),
                days,
                ClockTime::new(start / 60, start % 60).unwrap(),
                ClockTime::new(end / 60, end % 60).unwrap(),
            )
        })
        .collect()
}

fn bench_detect_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_conflicts");
    for n in [10usize, 100, 1_000] {
        let courses = week_of_courses(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &courses, |b, courses| {
            b.iter(|| detect_conflicts(black_box(courses), 7, SlotDuration::HalfHour))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect_conflicts);
criterion_main!(benches);
