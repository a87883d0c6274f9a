use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexudoku::gen::new_puzzle;

fn criterion_benchmark(c: &mut Criterion) {
  c.bench_function("puzzles 30", |b| b.iter(|| gen_puzzles(black_box(30))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Generates N puzzles from consecutive seeds.
fn gen_puzzles(count: u64) {
  for seed in 0..count {
    new_puzzle(20, seed);
  }
}
