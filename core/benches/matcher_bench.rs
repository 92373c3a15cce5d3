use criterion::{criterion_group, criterion_main, Criterion};
use faq_core::{Corpus, EngineOptions, FaqEngine, FaqEntry, Normalizer};

fn sample_corpus() -> Corpus {
    let pairs = [
        ("What are your opening hours?", "9am-5pm, Monday to Friday"),
        ("Where is the store located?", "123 Main St"),
        ("How do I request a refund?", "Email support with your order id"),
        ("Do you ship internationally?", "Yes, worldwide"),
        ("How long does delivery take?", "3-5 business days"),
        ("Can I change my order after placing it?", "Within 24 hours"),
        ("What payment methods do you accept?", "Cards and bank transfer"),
        ("Is there a warranty on your products?", "One year"),
    ];
    Corpus::from_entries(
        pairs
            .iter()
            .map(|(q, a)| FaqEntry {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect(),
    )
}

fn bench_normalize(c: &mut Criterion) {
    let n = Normalizer::english();
    let text = "What ARE your opening hours, and where exactly is the store located??";
    c.bench_function("normalize_query", |b| b.iter(|| n.normalize(text)));
}

fn bench_answer(c: &mut Criterion) {
    let engine = FaqEngine::new(sample_corpus(), EngineOptions::default()).unwrap();
    c.bench_function("answer_query", |b| {
        b.iter(|| engine.answer("when do you open in the morning"))
    });
}

criterion_group!(benches, bench_normalize, bench_answer);
criterion_main!(benches);
