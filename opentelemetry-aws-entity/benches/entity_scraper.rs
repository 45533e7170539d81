//! Benchmarks for entity attribute scraping.
//!
//! ## Run
//!
//! ```sh
//! cargo bench --bench entity_scraper -p opentelemetry-aws-entity
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use opentelemetry_aws_entity::{
    AttributeMap, AttributeScraper, EksAttributeScraper, K8sAttributeScraper,
};
use std::hint::black_box;

fn attributes(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let cases = [
        ("empty", attributes(&[])),
        (
            "semantic_conventions",
            attributes(&[
                ("k8s.namespace.name", "default"),
                ("k8s.deployment.name", "checkout"),
                ("k8s.node.name", "ip-10-0-0-1.ec2.internal"),
                ("service.name", "checkout"),
            ]),
        ),
        (
            "container_insights",
            attributes(&[
                ("Namespace", "default"),
                ("PodName", "checkout"),
                ("NodeName", "ip-10-0-0-1.ec2.internal"),
                ("Type", "Pod"),
            ]),
        ),
    ];

    let mut group = c.benchmark_group("eks_scraper");
    let scraper = EksAttributeScraper::new("test-cluster");
    for (name, attrs) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), attrs, |b, attrs| {
            b.iter_batched(
                || attrs.clone(),
                |mut attrs| black_box(scraper.scrape(&mut attrs)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let prometheus = attributes(&[
        ("pod", "checkout-5d8f7c9b6-abcde"),
        ("namespace", "default"),
        ("node", "ip-10-0-0-1.ec2.internal"),
        ("job", "kubernetes-pods"),
    ]);
    let scraper = K8sAttributeScraper::new("test-cluster");
    c.bench_function("k8s_scraper/prometheus", |b| {
        b.iter_batched(
            || prometheus.clone(),
            |mut attrs| black_box(scraper.scrape(&mut attrs)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
