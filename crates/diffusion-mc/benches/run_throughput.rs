use criterion::{criterion_group, criterion_main, Criterion};

use diffusion_mc::{run, RunConfig, SeedPolicy};

fn sample_density() -> Vec<u32> {
    (0..64).map(|site| (site % 4) as u32).collect()
}

fn bench_run(c: &mut Criterion) {
    let config = RunConfig {
        temperature: 0.5,
        max_iterations: 1000,
        seed_policy: SeedPolicy {
            master_seed: 1,
            label: None,
        },
        ..RunConfig::default()
    };
    let initial = sample_density();

    c.bench_function("run_1000_iterations_64_sites", |b| {
        b.iter(|| run(&config, initial.clone()).unwrap())
    });
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
