use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oshi_vocab::core::{MatchSession, QuizSession, SimpleRng, VocabularyStore};
use oshi_vocab::term::{FrameBuffer, QuizView, Viewport};

fn bench_sample(c: &mut Criterion) {
    let store = VocabularyStore::builtin();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("sample_10_all", |b| {
        b.iter(|| store.sample(black_box(10), None, &mut rng))
    });

    c.bench_function("sample_10_category", |b| {
        b.iter(|| store.sample(black_box(10), Some("verbs"), &mut rng))
    });
}

fn bench_quiz_start(c: &mut Criterion) {
    let store = VocabularyStore::builtin();
    let mut quiz = QuizSession::new(12345);

    c.bench_function("quiz_start", |b| {
        b.iter(|| {
            quiz.start(&store, None);
            black_box(quiz.len())
        })
    });
}

fn bench_match_round(c: &mut Criterion) {
    let store = VocabularyStore::builtin();
    let mut session = MatchSession::new(12345);

    c.bench_function("match_full_round", |b| {
        b.iter(|| {
            session.start(&store, None);
            for pair in session.pairs().to_vec() {
                session.select_left(&pair.source_text);
                session.select_right(&pair.target_text);
                session.tick(500);
            }
            black_box(session.score())
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut items: Vec<u32> = (0..108).collect();

    c.bench_function("shuffle_108", |b| b.iter(|| rng.shuffle(black_box(&mut items))));
}

fn bench_render_quiz(c: &mut Criterion) {
    let store = VocabularyStore::builtin();
    let mut quiz = QuizSession::new(12345);
    quiz.start(&store, None);
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_quiz_120x40", |b| {
        b.iter(|| view.render_into(&quiz, black_box(1), Viewport::new(120, 40), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_sample,
    bench_quiz_start,
    bench_match_round,
    bench_shuffle,
    bench_render_quiz
);
criterion_main!(benches);
