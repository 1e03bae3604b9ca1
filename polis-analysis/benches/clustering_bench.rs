//! Clustering throughput on a realistic candidate set.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polis_analysis::cluster_policies;
use polis_core::types::ScoredAction;

fn candidate_set(n: usize) -> Vec<ScoredAction> {
    let texts = [
        "Cria programa de policiamento comunitário nos bairros",
        "Institui merenda escolar integral na rede municipal",
        "Dispõe sobre iluminação pública em vias de grande circulação",
        "Autoriza convênio para construção de unidade básica de saúde",
        "Cria o programa municipal de hortas comunitárias",
    ];
    (0..n)
        .map(|i| ScoredAction {
            municipality: format!("CITY{}", i % 50),
            action: format!("{} {}", texts[i % texts.len()], i % 11),
            score: (i % 37) as f64 - 18.0,
            effect: Some(18.0 - (i % 37) as f64),
        })
        .collect()
}

fn bench_clustering(c: &mut Criterion) {
    let tuples = candidate_set(1000);
    c.bench_function("cluster_1000_actions", |b| {
        b.iter(|| cluster_policies(black_box(&tuples), 2, 0.75))
    });
}

criterion_group!(benches, bench_clustering);
criterion_main!(benches);
