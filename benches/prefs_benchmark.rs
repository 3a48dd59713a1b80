use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prefs::{SettingsEngine, SettingsStore};
use rand::distributions::Alphanumeric;
use rand::rngs::ThreadRng;
use rand::Rng;

pub fn get_random_string(gen: &mut ThreadRng) -> String {
    let sz = gen.gen_range(1, 32);
    gen.sample_iter(&Alphanumeric).take(sz).collect()
}

pub fn criterion_benchmark_store(c: &mut Criterion) {
    let mut store = SettingsStore::new();
    let mut gen = rand::thread_rng();
    c.bench_function("settings_add", |b| {
        b.iter(|| {
            let key = get_random_string(&mut gen);
            let value = get_random_string(&mut gen);
            store.add(key, value);
        })
    });
    c.bench_function("settings_view", |b| b.iter(|| black_box(store.view())));
}

criterion_group!(benches, criterion_benchmark_store);
criterion_main!(benches);
