use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_core::*;

fn count_games(controller: &GameController) -> usize {
    let mut total = 0;
    for slot in iter_slots() {
        if !controller.is_armed(slot) {
            continue;
        }
        let mut next = controller.clone();
        let outcome = next
            .handle_cell_activation(slot)
            .expect("armed slots are on the board");
        total += if outcome.is_terminal() {
            1
        } else {
            count_games(&next)
        };
    }
    total
}

fn bench_game_tree(c: &mut Criterion) {
    let start = GameController::new();
    c.bench_function("full game tree", |b| {
        b.iter(|| count_games(black_box(&start)))
    });
}

fn bench_win_check(c: &mut Criterion) {
    let boards: Vec<Board> = ["XOX/OXO/OX.", "XXO/OOX/XOX", "XO./.X./..X", ".../.../..."]
        .iter()
        .map(|s| s.parse().expect("valid notation"))
        .collect();
    c.bench_function("completes_line", |b| {
        b.iter(|| {
            boards
                .iter()
                .filter(|board| black_box(board).completes_line(Mark::X).is_some())
                .count()
        })
    });
}

criterion_group!(benches, bench_game_tree, bench_win_check);
criterion_main!(benches);
