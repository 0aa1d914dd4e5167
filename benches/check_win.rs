use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drop_token::{replay, Board, Command, Dimensions, GameState, Token};

/// Fill every column to half height with alternating tokens.
fn half_full(columns: u32, rows: u32) -> Board {
    let mut board = Board::new(Dimensions::new(columns, rows));
    for c in 1..=i64::from(columns) {
        for r in 0..rows / 2 {
            let token = if (c + i64::from(r)) % 2 == 0 { Token(1) } else { Token(2) };
            let _ = board.drop_token(c, token);
        }
    }
    board
}

fn bench_check_win(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_win");
    for size in [4u32, 16, 64] {
        let board = half_full(size, size);
        let row = i64::from(size / 2);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| black_box(&board).check_win(black_box(1), black_box(row)))
        });
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut state = GameState::new(["A", "B"], Dimensions::new(7, 6)).expect("valid game");
    let columns = [1, 2, 3, 4, 5, 6, 7, 7, 6, 5, 4, 3, 2, 1];
    for (i, &column) in columns.iter().enumerate() {
        let player = if i % 2 == 0 { "A" } else { "B" };
        if let Ok((next, _)) = drop_token::rules::submit(&state, &Command::drop(player, column)) {
            state = next;
        }
    }

    c.bench_function("replay_7x6_14_moves", |b| b.iter(|| replay(black_box(&state))));
}

criterion_group!(benches, bench_check_win, bench_replay);
criterion_main!(benches);
