//! Performance benchmarks for linkspan
//!
//! Run with: cargo bench --bench scanning

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Sample message bodies
mod samples {
    pub const PLAIN: &str = "Thanks for the update, I will look at it tomorrow morning.";

    pub const LINKY: &str =
        "See http://example.com/a, https://b.example.org/x?y=z and mail jane.doe@example.net.";

    pub const MESSAGE: &str = r#"Hi all,

> On Tue, Bob <bob@example.com> wrote:
> > The build is at https://ci.example.org/job/1234/artifacts/
> > (mirror: ftp://mirror.example.net/pub/builds/1234.tar.gz).
>
> Thanks, see also www.example.com/docs.

Unsubscribe: mailto:list-unsubscribe@lists.example.com?subject=off
"#;

    /// A long body made of repeated message sections
    pub fn large() -> String {
        MESSAGE.repeat(200)
    }

    /// Many bare needles that never form a link
    pub fn pathological_needles() -> String {
        "@ www. http:// ".repeat(500)
    }

    /// One huge address-like run
    pub fn pathological_address() -> String {
        "a".repeat(4000) + "@" + &"b".repeat(4000)
    }
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    group.throughput(Throughput::Bytes(samples::PLAIN.len() as u64));
    group.bench_function("plain_line", |b| {
        b.iter(|| linkspan::scan(black_box(samples::PLAIN)))
    });

    group.throughput(Throughput::Bytes(samples::LINKY.len() as u64));
    group.bench_function("linky_line", |b| {
        b.iter(|| linkspan::scan(black_box(samples::LINKY)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.throughput(Throughput::Bytes(samples::MESSAGE.len() as u64));
    group.bench_function("message", |b| {
        b.iter(|| linkspan::to_html(black_box(samples::MESSAGE)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| b.iter(|| linkspan::to_html(black_box(&large))));

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let needles = samples::pathological_needles();
    group.throughput(Throughput::Bytes(needles.len() as u64));
    group.bench_function("bare_needles", |b| {
        b.iter(|| linkspan::scan(black_box(&needles)))
    });

    let address = samples::pathological_address();
    group.throughput(Throughput::Bytes(address.len() as u64));
    group.bench_function("long_address", |b| {
        b.iter(|| linkspan::scan(black_box(&address)))
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    c.bench_function("verify_mismatch", |b| {
        b.iter(|| {
            linkspan::verify(
                black_box("https://bank.example.com.evil.example/login"),
                black_box("https://bank.example.com/login"),
            )
        })
    });
}

criterion_group!(benches, bench_scan, bench_render, bench_pathological, bench_verify);
criterion_main!(benches);
