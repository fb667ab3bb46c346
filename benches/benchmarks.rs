criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        playing_heads_up_tournament,
        playing_full_ring_tournament,
        parsing_tournament_summary,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    let ref mut rng = Source::from(0);
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter_batched(
            || {
                let mut deck = Deck::shuffled(rng);
                (0..7).fold(Hand::empty(), |h, _| Hand::add(h, Hand::from(deck.draw())))
            },
            |hand| Strength::from(Evaluator::from(hand)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn playing_heads_up_tournament(c: &mut criterion::Criterion) {
    let dispatcher = Dispatcher::default();
    c.bench_function("play a heads-up tournament", |b| {
        b.iter(|| {
            Runner::new(0, 0, vec![AiType::TAG, AiType::LAG], 20)
                .run(&dispatcher)
                .map(|record| record.num_games())
        })
    });
}

fn playing_full_ring_tournament(c: &mut criterion::Criterion) {
    let dispatcher = Dispatcher::default();
    let tags = (0..10)
        .map(|i| match i % 2 {
            0 => AiType::Random,
            _ => AiType::NeuralNet,
        })
        .collect::<Vec<AiType>>();
    c.bench_function("play a 10-seat Random/NeuralNet tournament", |b| {
        b.iter(|| Runner::new(0, 7, tags.clone(), 20).run(&dispatcher))
    });
}

fn parsing_tournament_summary(c: &mut criterion::Criterion) {
    let bytes = Runner::new(0, 3, vec![AiType::MTAG; 6], 20)
        .run(&Dispatcher::default())
        .expect("tournament completes")
        .to_bytes()
        .expect("record encodes");
    c.bench_function("parse a Summary from record bytes", |b| {
        b.iter(|| Summary::decode(&mut bytes.as_slice()))
    });
}

use deepshark::cards::*;
use deepshark::policy::AiType;
use deepshark::policy::Dispatcher;
use deepshark::record::Summary;
use deepshark::rng::Source;
use deepshark::tournament::Runner;
