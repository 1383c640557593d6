use geoshade_rs::logger;
use geoshade_rs::shade_pipeline::{Palette, RasterPipeline, ShadeConfig};

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting geoshade...");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.tif".to_string());
    let output = args.next().unwrap_or_else(|| "output.bmp".to_string());
    let palette = match args.next() {
        Some(name) => Palette::from_name(&name)?,
        None => Palette::Grayscale,
    };

    let config = ShadeConfig::builder().default_palette(palette).build();
    let pipeline = RasterPipeline::new(config);

    info!("Raster shading pipeline initialized");
    info!("Palette: {}", pipeline.config().default_palette.name());

    match pipeline.open_file(&input) {
        Ok(session) => {
            if let Some(range) = session.range() {
                info!(
                    "Shaded {}x{}, value range {}..{}",
                    session.width(),
                    session.height(),
                    range.min,
                    range.max
                );
            }
            session.save_bitmap(&output)?;
            info!("Saved bitmap to {}", output);
        }
        Err(e) => error!("Shading failed: {}", e),
    }

    Ok(())
}
