//! Benchmarks for docgen reformatting performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic markdown and DOCX input.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docgen::{ParagraphClassifier, Reformatter, SourceParagraph, StyleProfile, Variables};

/// Creates a markdown document with the given number of sections.
fn create_test_markdown(sections: usize) -> String {
    let mut content = String::from("# Benchmark Report\n\n");
    for i in 0..sections {
        content.push_str(&format!("## Section {}\n", i + 1));
        content.push_str("### Details\n");
        content.push_str("Benchmark body text for docgen reformatting performance.\n\n");
    }
    content.push_str("---\nBenchmark Team\n");
    content
}

/// Benchmark paragraph classification.
fn bench_classification(c: &mut Criterion) {
    let classifier = ParagraphClassifier::new();
    let paragraphs = [
        SourceParagraph::new("Overview").with_style("Heading 1"),
        SourceParagraph::new("Large text").with_font_size(24.0),
        SourceParagraph::new("一、总体要求"),
        SourceParagraph::new("（12）具体措施"),
        SourceParagraph::new("Plain body text that matches no pattern at all."),
    ];

    c.bench_function("classify_paragraphs", |b| {
        b.iter(|| {
            for paragraph in &paragraphs {
                black_box(classifier.classify(black_box(paragraph)));
            }
        });
    });
}

/// Benchmark markdown reformatting at various sizes.
fn bench_reformat_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("reformat_text");
    let reformatter = Reformatter::new(StyleProfile::default());

    for sections in [10, 100, 1000].iter() {
        let content = create_test_markdown(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| reformatter.reformat_text(black_box(&content)));
        });
    }

    group.finish();
}

/// Benchmark DOCX rendering of a reformatted document.
fn bench_render_docx(c: &mut Criterion) {
    let document = Reformatter::default().reformat_text(&create_test_markdown(100));

    c.bench_function("render_docx_100_sections", |b| {
        b.iter(|| docgen::render::to_docx(black_box(&document)).unwrap());
    });
}

/// Benchmark placeholder substitution.
fn bench_substitution(c: &mut Criterion) {
    let vars = Variables::defaults().with("name", "Benchmark");
    let text = "Dear {{name}}, this {{ title }} was written by {{author}} on {{date}}. {{missing}}"
        .repeat(50);

    c.bench_function("substitute_placeholders", |b| {
        b.iter(|| docgen::template::substitute(black_box(&text), &vars).into_owned());
    });
}

criterion_group!(
    benches,
    bench_classification,
    bench_reformat_text,
    bench_render_docx,
    bench_substitution,
);
criterion_main!(benches);
