//! Performance benchmarks for rs-darkpatterns.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_darkpatterns::{classify, Classifier, Options, PatternRegistry};

const SAMPLE_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Trail Runner 2</title>
    <script>window.dataLayer = [];</script>
</head>
<body>
    <header><a href="/">Home</a> <a href="/cart">Cart</a></header>
    <main>
        <h1>Trail Runner 2</h1>
        <p class="price">Now $79.99 <del>$129.99</del></p>
        <p>Only 3 left in stock - order soon!</p>
        <div class="countdown-banner">Sale ends in <span>02:14:09</span></div>
        <p>Frequently bought together</p>
        <form>
            <label for="news">Subscribe to our newsletter</label>
            <input type="checkbox" id="news" checked>
            <button>No thanks, I don't want to save money</button>
        </form>
    </main>
    <footer><p>Customer reviews</p></footer>
</body>
</html>
"#;

fn bench_classify_builtin(c: &mut Criterion) {
    c.bench_function("classify_builtin", |b| {
        b.iter(|| classify(black_box("shop.example"), black_box(SAMPLE_PAGE)));
    });
}

fn bench_classify_with_options(c: &mut Criterion) {
    let registry = match PatternRegistry::builtin() {
        Ok(registry) => registry,
        Err(err) => panic!("builtin patterns failed to load: {err}"),
    };
    let options = Options {
        label_parent_fallback: false,
        require_currency_for_price_classes: false,
        ..Options::default()
    };
    let classifier = Classifier::with_options(registry, options);

    c.bench_function("classify_with_options", |b| {
        b.iter(|| classifier.classify(black_box("shop.example"), black_box(SAMPLE_PAGE)));
    });
}

/// Throughput on synthetic pages of growing size.
fn bench_page_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_size");

    for repeats in [10usize, 100, 1000] {
        let filler = "<div class=\"card\"><p>Lightweight mesh upper, 8mm drop.</p><span>$19.99</span></div>\n"
            .repeat(repeats);
        let html = SAMPLE_PAGE.replace("<footer>", &format!("{filler}<footer>"));
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("classify", format!("{repeats} cards ({size_kb}KB)")),
            &html,
            |b, html| {
                b.iter(|| classify(black_box("shop.example"), black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify_builtin,
    bench_classify_with_options,
    bench_page_size
);
criterion_main!(benches);
