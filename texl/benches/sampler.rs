use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use texl::format::Format;
use texl::math::{UVec2, Vec2};
use texl::render::*;

const SIZE: u32 = 1024;

fn texture<T: Texel>(format: Format, value: T) -> Texture2D {
    let mut texture = Texture2D::new(format, UVec2::splat(SIZE), Texture2D::max_levels(UVec2::splat(SIZE))).unwrap();
    for level in 0..texture.levels() {
        texture.fill(level, value);
    }
    texture
}

fn sample_1m<T: Texel>(sampler: &mut Sampler2D<T>, lod: f32) {
    for y in (0..1000).map(|y| y as f32 * 0.001) {
        for x in (0..1000).map(|x| x as f32 * 0.001) {
            std::hint::black_box(sampler.texture_lod(Vec2::new(x, y), lod));
        }
    }
}

fn fetch_1m<T: Texel>(sampler: &mut Sampler2D<T>) {
    for y in 0..1000 {
        for x in 0..1000 {
            std::hint::black_box(sampler.texel_fetch(UVec2::new(x, y), 0));
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut texture_r8 = texture(Format::R8_UNORM_PACK8, 255u8);
    let mut texture_rgba8 = texture(Format::RGBA8_UNORM_PACK8, RGBA::new(255, 128, 0, 255));

    let mut group = c.benchmark_group("Sample 1M");
    for (mip_filter, min_filter, name) in [
        (Filter::Nearest, Filter::Nearest, "Nearest"),
        (Filter::Nearest, Filter::Linear, "Bilinear"),
        (Filter::Linear, Filter::Linear, "Bilinear/Mip"),
    ] {
        let lod = if mip_filter == Filter::Linear { 0.5 } else { 0.0 };
        group.bench_function(BenchmarkId::new(name, "R8"), |bencher| {
            let mut sampler = Sampler2D::<u8>::new(&mut texture_r8, Wrap::Repeat, mip_filter, min_filter);
            bencher.iter(|| sample_1m(&mut sampler, lod))
        });
        group.bench_function(BenchmarkId::new(name, "RGBA8"), |bencher| {
            let mut sampler = Sampler2D::<RGBA>::new(&mut texture_rgba8, Wrap::Repeat, mip_filter, min_filter);
            bencher.iter(|| sample_1m(&mut sampler, lod))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Fetch 1M");
    group.bench_function("RGBA8", |bencher| {
        let mut sampler = Sampler2D::<RGBA>::new(&mut texture_rgba8, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
        bencher.iter(|| fetch_1m(&mut sampler))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
