use cotulenh_core::fen;
use cotulenh_core::legal::checker;
use cotulenh_core::movegen;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_generate_startpos(c: &mut Criterion) {
  let state = fen::parse(fen::STARTING_FEN).unwrap();
  c.bench_function("generate_moves startpos", |b| {
    b.iter(|| black_box(movegen::generate_moves(&state)))
  });
}

fn bench_legal_filter_startpos(c: &mut Criterion) {
  let state = fen::parse(fen::STARTING_FEN).unwrap();
  c.bench_function("filter_legal startpos", |b| {
    b.iter(|| {
      let pseudo = movegen::generate_moves(&state);
      black_box(checker::filter_legal(&state, pseudo))
    })
  });
}

fn bench_fen_round_trip(c: &mut Criterion) {
  let state = fen::parse(fen::STARTING_FEN).unwrap();
  c.bench_function("fen round trip startpos", |b| {
    b.iter(|| {
      let text = fen::to_fen(&state);
      black_box(fen::parse(&text).unwrap())
    })
  });
}

criterion_group!(benches, bench_generate_startpos, bench_legal_filter_startpos, bench_fen_round_trip);
criterion_main!(benches);
