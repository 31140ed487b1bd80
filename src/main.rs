use isp_helpers_rs::logger;
use isp_helpers_rs::transforms::{
    BayerChannel, BayerPattern, MeanFilter, MeanFilterConfig, PadMode, reconstruct_bayer,
    split_bayer, ycbcr_to_rgb,
};

use ndarray::{Array2, Array3};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let pattern: BayerPattern = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("rggb")
        .parse()?;
    info!("Running sensor array transforms, pattern {}", pattern);

    // Synthetic 12-bit sensor readout with a diagonal gradient
    let (height, width) = (64, 96);
    let mosaic = Array2::from_shape_fn((height, width), |(y, x)| ((y * 37 + x * 11) % 4096) as u16);

    let config = MeanFilterConfig::builder()
        .filter_size(3)
        .pad_mode(PadMode::Reflect)
        .build();
    let filter = MeanFilter::new(config)?;

    let channels = split_bayer(&mosaic, pattern)?;
    let smoothed = [
        filter.apply(&channels[0])?,
        filter.apply(&channels[1])?,
        filter.apply(&channels[2])?,
        filter.apply(&channels[3])?,
    ];
    for (channel, plane) in BayerChannel::ALL.iter().zip(&smoothed) {
        let mean = plane.iter().map(|&v| v as f64).sum::<f64>() / plane.len() as f64;
        info!(channel = %channel, shape = ?plane.dim(), mean, "Filtered channel");
    }

    let rebuilt = reconstruct_bayer(&smoothed, pattern)?;
    info!(shape = ?rebuilt.dim(), "Reconstructed mosaic");

    let ycbcr = Array3::from_shape_fn((height, width, 3), |(y, x, c)| match c {
        0 => (16 + y * 219 / (height - 1)) as u8,
        1 => (16 + x * 224 / (width - 1)) as u8,
        _ => 128,
    });
    let rgb = ycbcr_to_rgb(&ycbcr)?;
    info!(
        first = ?rgb.slice(ndarray::s![0, 0, ..]).to_vec(),
        last = ?rgb.slice(ndarray::s![height - 1, width - 1, ..]).to_vec(),
        "Converted YCbCr ramp"
    );

    Ok(())
}
