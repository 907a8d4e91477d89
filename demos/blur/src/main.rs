use argh::FromArgs;
use std::path::PathBuf;

use pixfork::image::ArgbImage;
use pixfork::imgproc::{
    filter::{self, kernels::DEFAULT_BLUR_WINDOW},
    parallel::{ForkJoinConfig, ParallelExecutor, DEFAULT_SPLIT_THRESHOLD},
    sequential,
};
use pixfork::io::{self, ImageFormat};

#[derive(FromArgs)]
/// Blur an image with a box filter, in parallel or on a single thread
struct Args {
    /// path to an input image
    #[argh(option, short = 'i', default = "PathBuf::from(\"source.jpg\")")]
    input: PathBuf,

    /// path to the output image, png or jpeg
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// run the square-window blur on the current thread
    #[argh(switch)]
    sequential: bool,

    /// the size of the blur window, odd
    #[argh(option, default = "DEFAULT_BLUR_WINDOW")]
    window_size: usize,

    /// number of worker threads, defaults to the number of cpus
    #[argh(option)]
    threads: Option<usize>,

    /// ranges shorter than this are not split
    #[argh(option, default = "DEFAULT_SPLIT_THRESHOLD")]
    threshold: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let output = args.output.unwrap_or_else(|| {
        if args.sequential {
            PathBuf::from("blurred_single.png")
        } else {
            PathBuf::from("blurred.png")
        }
    });
    let format = ImageFormat::from_path(&output)?;

    // read the image
    let src = io::load_image(&args.input)?;
    let mut dst = ArgbImage::from_size_val(src.size(), 0)?;
    log::info!("input {} is {}", args.input.display(), src.size());

    println!("Image loaded. Starting blur...");

    let elapsed = if args.sequential {
        let now = std::time::Instant::now();
        sequential::box_blur_2d(&src, &mut dst, args.window_size)?;
        now.elapsed()
    } else {
        let mut config = ForkJoinConfig::default().with_threshold(args.threshold);
        if let Some(threads) = args.threads {
            config = config.with_num_threads(threads);
        }
        let executor = ParallelExecutor::new(config)?;

        let now = std::time::Instant::now();
        filter::box_blur_1d(&executor, &src, &mut dst, args.window_size)?;
        now.elapsed()
    };

    println!("Blur completed in {} ms.", elapsed.as_millis());

    io::save_image(&dst, &output, format)?;

    println!("Blurred image saved as {}.", output.display());

    Ok(())
}
