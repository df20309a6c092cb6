use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use puzzle_engine::console_interface::parse_rows;
use puzzle_engine::core::{Direction, Level};
use std::hint::black_box;

const PUZZLES: &[(&str, &str)] = &[
    ("corridor", r#"
#######
#@ $ .#
#######
"#),
    ("warehouse", r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#),
];

const WALK: [Direction; 8] = [
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

pub fn bench_moves_then_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves_then_undo");
    group.throughput(Throughput::Elements(WALK.len() as u64 * 2));

    for &(puzzle_name, puzzle) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("walk_and_rewind", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter_with_setup(
                    || Level::from_rows(&parse_rows(puzzle)),
                    |mut level| {
                        for dir in WALK {
                            black_box(level.try_move(dir));
                        }
                        while level.undo().is_some() {}
                        black_box(level)
                    },
                );
            },
        );
    }

    group.finish();
}

pub fn bench_load_level(c: &mut Criterion) {
    let rows = parse_rows(PUZZLES[1].1);
    c.bench_function("load_level", |b| {
        let mut level = Level::new();
        b.iter(|| {
            level.load_level(black_box(&rows[..]));
            black_box(level.is_solved())
        });
    });
}

criterion_group!(benches, bench_moves_then_undo, bench_load_level);
criterion_main!(benches);
