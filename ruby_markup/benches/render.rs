use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ruby_markup::tokens::TokenStreamBuilder;
use ruby_markup::{Renderer, TokenKind, TokenStream};

/// A method body repeated `methods` times, with the usual mix of styled and
/// whitespace tokens
fn sample_stream(methods: usize) -> TokenStream {
    let mut builder = TokenStreamBuilder::new();
    for i in 0..methods {
        builder = builder
            .push(TokenKind::Comment, "# Adds <one> & returns it\n")
            .push(TokenKind::Keyword, "def")
            .push(TokenKind::from_ripper("on_sp"), " ")
            .push(TokenKind::Identifier, &format!("step_{}", i))
            .push(TokenKind::from_ripper("on_nl"), "\n  ")
            .push(TokenKind::InstanceVariable, "@count")
            .push(TokenKind::from_ripper("on_sp"), " ")
            .push(TokenKind::Operator, "+=")
            .push(TokenKind::from_ripper("on_sp"), " ")
            .push(TokenKind::Integer, "1")
            .push_placeholder()
            .push(TokenKind::from_ripper("on_nl"), "\n")
            .push(TokenKind::Keyword, "end")
            .push(TokenKind::from_ripper("on_nl"), "\n");
    }
    builder.build()
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::default();
    let mut group = c.benchmark_group("render");

    for methods in [10, 1_000] {
        let stream = sample_stream(methods);
        group.throughput(Throughput::Elements(stream.len() as u64));
        group.bench_function(format!("methods_{}", methods), |b| {
            b.iter(|| renderer.render(black_box(stream.tokens())))
        });
    }

    group.finish();
}

fn bench_tokens_to_s(c: &mut Criterion) {
    let stream = sample_stream(1_000);
    c.bench_function("tokens_to_s", |b| b.iter(|| black_box(&stream).tokens_to_s()));
}

criterion_group!(benches, bench_render, bench_tokens_to_s);
criterion_main!(benches);
