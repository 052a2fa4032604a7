use std::{
    io::{self, BufWriter, Write},
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Args;
use geobounds_core::TilePyramidRegion;
use humantime::format_duration;
use log::debug;

use super::parse::parse_bounds;

/// List all tiles of a region
#[derive(Args, Debug)]
pub struct CoverArgs {
    /// The bounds of the region as `north,east,south,west`
    #[arg(allow_hyphen_values = true)]
    pub bounds: String,

    /// The lowest zoom level
    #[arg(long, default_value_t = 0)]
    pub min_zoom: u8,

    /// The highest zoom level
    #[arg(long)]
    pub max_zoom: u8,

    /// Only print the number of tiles
    #[arg(long)]
    pub count: bool,
}

/// Run the `cover` command
pub fn run_cover(args: CoverArgs) -> Result<()> {
    let bounds = parse_bounds(&args.bounds)?;
    let region = TilePyramidRegion::new(bounds, args.min_zoom, args.max_zoom)?;
    debug!(
        "Covering {} at zoom levels {:?}",
        region.bounds(),
        region.zoom_levels()
    );

    let start = Instant::now();

    let tile_count = if args.count {
        region.tile_count()
    } else {
        let stdout = io::stdout().lock();
        let mut writer = BufWriter::new(stdout);
        let mut n = 0u128;
        for tile in region.tiles() {
            writeln!(writer, "{tile}")?;
            n += 1;
        }
        writer.flush()?;
        n
    };

    eprintln!(
        "Found {} tiles in {}",
        tile_count,
        format_duration(Duration::from_millis(start.elapsed().as_millis() as u64))
    );

    Ok(())
}
