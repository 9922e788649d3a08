use criterion::{criterion_group, criterion_main, Criterion, black_box};

use hon_guides::{heroes::HeroCatalog, specs};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/guide_krixi.html"))
        .expect("read tests/fixtures/guide_krixi.html")
}

fn bench_guide_page(c: &mut Criterion) {
    let doc = load_sample();
    let hero = HeroCatalog::embedded()
        .and_then(|cat| cat.lookup("Moon Queen").cloned())
        .expect("Moon Queen in catalog");

    c.bench_function("guide_page_parse", |b| {
        b.iter(|| {
            let build = specs::guide_page::parse(black_box(&doc), &hero).expect("parse");
            black_box(build.items.len() + build.abilities.len())
        })
    });

    c.bench_function("guide_to_client_text", |b| {
        let build = specs::guide_page::parse(&doc, &hero).expect("parse");
        let guide = hon_guides::guide::Guide::new(&hero, build, chrono::Local::now().naive_local());
        b.iter(|| black_box(guide.to_client_text()).len())
    });
}

criterion_group!(benches, bench_guide_page);
criterion_main!(benches);
