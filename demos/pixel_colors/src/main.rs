use argh::FromArgs;

use rgbx::image::{color_spaces::Rgb8, ImageSize};
use rgbx::imgproc::{color::ColorConverter, parallel::ExecutionStrategy};

#[derive(FromArgs)]
/// Convert a single RGB pixel to every supported colorspace
struct Args {
    /// red channel
    #[argh(option, short = 'r', default = "0")]
    r: u8,

    /// green channel
    #[argh(option, short = 'g', default = "0")]
    g: u8,

    /// blue channel
    #[argh(option, short = 'b', default = "0")]
    b: u8,

    /// run the pixel loop on the current thread
    #[argh(switch)]
    serial: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let rgb = Rgb8::from_size_vec(
        ImageSize {
            width: 1,
            height: 1,
        },
        vec![args.r, args.g, args.b],
    )?;

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::ParallelRows
    };
    let converter = ColorConverter::new(strategy);
    log::info!("converting {:?} with {strategy:?}", rgb.as_slice());

    println!("RGB   {:?}", rgb.as_slice());
    println!("BGR   {:?}", converter.rgb_to_bgr(&rgb)?.as_slice());
    println!("Gray  {:?}", converter.rgb_to_gray(&rgb)?.as_slice());
    println!("HSV   {:?}", converter.rgb_to_hsv(&rgb)?.as_slice());
    println!("HSV8  {:?}", converter.rgb_to_hsv_u8(&rgb)?.as_slice());
    println!("Lab   {:?}", converter.rgb_to_lab(&rgb)?.as_slice());
    println!("Lab8  {:?}", converter.rgb_to_lab_u8(&rgb)?.as_slice());
    println!("HLS   {:?}", converter.rgb_to_hls(&rgb)?.as_slice());
    println!("HLS8  {:?}", converter.rgb_to_hls_u8(&rgb)?.as_slice());

    Ok(())
}
