use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixfork_image::ArgbImage;
use pixfork_imgproc::{
    filter::{self, kernels::DEFAULT_BLUR_WINDOW},
    parallel::{ForkJoinConfig, ParallelExecutor},
    sequential,
};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    let executor = ParallelExecutor::new(ForkJoinConfig::default()).unwrap();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_data = (0..width * height)
            .map(|i| 0xFF00_0000 | (i as u32).wrapping_mul(2_654_435_761) >> 8)
            .collect();
        let image = ArgbImage::new([*width, *height].into(), image_data).unwrap();

        // output image
        let output = ArgbImage::from_size_val(image.size(), 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("box_blur_1d_fork_join", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    black_box(filter::box_blur_1d(
                        &executor,
                        src,
                        &mut dst,
                        DEFAULT_BLUR_WINDOW,
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("box_blur_2d_sequential", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(sequential::box_blur_2d(src, &mut dst, DEFAULT_BLUR_WINDOW)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sobel_fork_join", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(filter::sobel_edges(&executor, src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sobel_sequential", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(sequential::sobel_edges(src, &mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
