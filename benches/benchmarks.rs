use criterion::{criterion_group, criterion_main, Criterion};
use deeppoker::cards::hand::Hand;
use deeppoker::evaluation::strength::Strength;
use deeppoker::gameplay::game::Game;
use deeppoker::gameplay::stage::Stage;
use deeppoker::players::equity::win_probability;

fn evaluating_seven_cards(c: &mut Criterion) {
    c.bench_function("evaluate a seven card hand", |b| {
        let hand = Hand::from("As Ks Qs Js Ts 2d 7c");
        b.iter(|| Strength::from(criterion::black_box(hand)))
    });
}

fn enumerating_opponent_holdings(c: &mut Criterion) {
    c.bench_function("win probability on the river", |b| {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_board(Hand::from("Kc 7d 2s 9h 3c"))
            .with_stage(Stage::River);
        b.iter(|| win_probability(criterion::black_box(&game), 0))
    });
}

criterion_group!(benches, evaluating_seven_cards, enumerating_opponent_holdings);
criterion_main!(benches);
